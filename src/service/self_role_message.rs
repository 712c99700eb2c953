//! Self-role picker publisher.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{role_category::RoleCategoryRepository, self_role_message::SelfRoleMessageRepository},
    discord::DiscordGateway,
    error::AppError,
    model::{
        discord::{SelfRoleOption, SelfRolePicker},
        role_category::RoleCategoryWithRoles,
        self_role_message::CreateSelfRoleMessageParams,
    },
    util::format::{role_mention, snake_case},
};

/// Discord allows at most 25 options in one select menu.
pub const MAX_PICKER_OPTIONS: usize = 25;

pub struct SelfRoleMessageService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn DiscordGateway,
}

impl<'a> SelfRoleMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn DiscordGateway) -> Self {
        Self { db, gateway }
    }

    /// Replaces the published self-role pickers with fresh ones.
    ///
    /// Pickers are built and validated first. The previous picker messages are then
    /// deleted from the channel along with their records, and one new picker is sent per
    /// category that has self-assignable roles, in category order.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the pickers belong to, used in the select menu custom ids
    /// - `channel_id` - Channel the pickers are published in
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of pickers published
    /// - `Err(AppError::Validation)` - A category has more self roles than a select menu
    ///   can hold, or two categories share a custom id; nothing was changed
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn publish(&self, guild_id: u64, channel_id: u64) -> Result<usize, AppError> {
        let message_repo = SelfRoleMessageRepository::new(self.db);

        let categories = RoleCategoryRepository::new(self.db)
            .get_all_with_roles()
            .await?;

        let mut pickers = Vec::new();
        let mut custom_ids: HashMap<String, &str> = HashMap::new();
        for entry in &categories {
            if let Some(picker) = build_picker(guild_id, entry)? {
                if let Some(other) = custom_ids.get(&picker.custom_id) {
                    return Err(AppError::Validation(format!(
                        "The categories '{}' and '{}' need names that differ by more than case or spaces",
                        other, entry.category.name
                    )));
                }
                custom_ids.insert(picker.custom_id.clone(), &entry.category.name);
                pickers.push((entry.category.id, picker));
            }
        }

        for message in message_repo.get_all().await? {
            if let Err(e) = self.gateway.delete_message(channel_id, message.id).await {
                tracing::warn!(
                    "Could not delete old self role message {} in channel {}: {}",
                    message.id,
                    channel_id,
                    e
                );
            }
        }
        let removed = message_repo.delete_all().await?;
        tracing::debug!("Removed {} old self role message records", removed);

        for (category_id, picker) in &pickers {
            let message_id = self
                .gateway
                .send_self_role_picker(channel_id, picker)
                .await?;

            message_repo
                .create(CreateSelfRoleMessageParams {
                    id: message_id,
                    role_category_id: *category_id,
                    custom_id: picker.custom_id.clone(),
                })
                .await?;
        }

        tracing::info!(
            "Published {} self role messages in channel {}",
            pickers.len(),
            channel_id
        );

        Ok(pickers.len())
    }
}

/// Builds the picker for one category.
///
/// # Returns
/// - `Ok(Some(SelfRolePicker))` - The category has self-assignable roles
/// - `Ok(None)` - The category has none and gets no picker
/// - `Err(AppError::Validation)` - The category has more than `MAX_PICKER_OPTIONS`
///   self-assignable roles
pub fn build_picker(
    guild_id: u64,
    entry: &RoleCategoryWithRoles,
) -> Result<Option<SelfRolePicker>, AppError> {
    let roles: Vec<_> = entry.self_roles().collect();

    if roles.is_empty() {
        return Ok(None);
    }
    if roles.len() > MAX_PICKER_OPTIONS {
        return Err(AppError::Validation(format!(
            "The category '{}' has {} self roles but a menu can only hold {}",
            entry.category.name,
            roles.len(),
            MAX_PICKER_OPTIONS
        )));
    }

    let description = roles
        .iter()
        .map(|role| format!("{} - {}", role_mention(role.id), role.description))
        .collect::<Vec<_>>()
        .join("\n");

    let options = roles
        .iter()
        .map(|role| SelfRoleOption {
            label: role.name.clone(),
            value: role.id.to_string(),
            description: role.description.clone(),
        })
        .collect();

    Ok(Some(SelfRolePicker {
        title: format!("Assign {}", entry.category.name),
        description,
        custom_id: format!("{}-{}", guild_id, snake_case(&entry.category.name)),
        options,
    }))
}
