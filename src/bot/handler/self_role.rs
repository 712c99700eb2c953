//! Self-role picker selections.

use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    discord::HttpGateway,
    error::{internal::InternalError, AppError},
    model::self_role::{RoleChange, SelfRoleUpdate},
    service::self_role::SelfRoleService,
    state::BotState,
    util::format::{pretty_list, role_mention},
};

/// Applies a picker selection and tells the member what changed.
///
/// Selections of the same member in the same guild are applied one at a time.
pub async fn handle_self_role_selection(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
) {
    let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
        tracing::debug!(
            "Ignoring component interaction {} that is not a select menu",
            component.data.custom_id
        );
        return;
    };

    let embed = match apply(state, ctx, component, values).await {
        Ok(update) => CreateEmbed::new()
            .title("Role Update")
            .description(format_update(&update)),
        Err(e) => {
            if e.is_user_facing() {
                tracing::debug!("Self role selection rejected: {}", e);
            } else {
                tracing::error!(
                    "Self role selection {} failed: {}",
                    component.data.custom_id,
                    e
                );
            }
            CreateEmbed::new().description(e.user_message())
        }
    };

    let response = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true);
    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!("Failed to reply to self role selection: {}", e);
    }
}

async fn apply(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
    values: &[String],
) -> Result<SelfRoleUpdate, AppError> {
    let guild_id = component
        .guild_id
        .ok_or_else(|| InternalError::MissingGuild(component.id.to_string()))?
        .get();
    let user_id = component.user.id.get();

    let _guard = state.self_role_locks.lock((guild_id, user_id)).await;

    let gateway = HttpGateway::new(ctx.http.clone());
    let update = SelfRoleService::new(&state.db, &gateway)
        .apply_selection(guild_id, user_id, &component.data.custom_id, values)
        .await?;

    tracing::info!(
        "{} updated self roles in guild {}: {} applied, {} pending",
        component.user.name,
        guild_id,
        update.applied.len(),
        update.pending.len()
    );

    Ok(update)
}

fn mentions(role_ids: &[u64]) -> String {
    let mentions: Vec<String> = role_ids.iter().map(|id| role_mention(*id)).collect();
    pretty_list(&mentions)
}

/// Describes a self-role update for the member.
///
/// Lists removed and added roles, and the changes that could not be made when Discord
/// rejected one of them, including a category role that was never checked.
pub fn format_update(update: &SelfRoleUpdate) -> String {
    let mut lines = Vec::new();

    let lists: [(&[RoleChange], &str, &str); 2] = [
        (&update.applied, "Removed", "Added"),
        (&update.pending, "Could not remove", "Could not add"),
    ];
    for (changes, revoke_label, grant_label) in lists {
        let revoked = SelfRoleUpdate::revoked(changes);
        if !revoked.is_empty() {
            lines.push(format!("{} {}", revoke_label, mentions(&revoked)));
        }

        let granted = SelfRoleUpdate::granted(changes);
        if !granted.is_empty() {
            lines.push(format!("{} {}", grant_label, mentions(&granted)));
        }
    }

    if update.category_skipped {
        lines.push("Could not update the category role".to_string());
    }

    if lines.is_empty() {
        return "Nothing changed".to_string();
    }

    lines.join("\n")
}
