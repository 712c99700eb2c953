mod self_role_message;
