pub use super::role::Entity as Role;
pub use super::role_category::Entity as RoleCategory;
pub use super::self_role_message::Entity as SelfRoleMessage;
