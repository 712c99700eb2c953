use std::{collections::HashSet, sync::Arc};

use serenity::all::{
    ChannelId, CreateActionRow, CreateEmbed, CreateMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, EditRole, GetMessages, GuildId, Http,
    MessageId, Permissions, RoleId, UserId,
};

use crate::{
    discord::DiscordGateway,
    error::{internal::InternalError, AppError},
    model::discord::{LiveRole, RoleSpec, SelfRolePicker},
};

/// Discord limits select option descriptions to 100 characters.
const MAX_OPTION_DESCRIPTION: usize = 100;

/// `DiscordGateway` backed by Serenity's HTTP client.
pub struct HttpGateway {
    http: Arc<Http>,
}

impl HttpGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

fn edit_role_builder(spec: RoleSpec) -> EditRole<'static> {
    let builder = EditRole::new().name(spec.name);

    match spec.colour {
        Some(colour) => builder.colour(colour),
        None => builder,
    }
}

/// Builds the string select menu of a picker.
///
/// # Returns
/// - `Ok(CreateSelectMenu)` - Menu allowing any number of the options to be selected
/// - `Err(InternalError::TooManyMenuOptions)` - More options than a menu's value count
///   can describe
fn picker_menu(picker: &SelfRolePicker) -> Result<CreateSelectMenu, AppError> {
    let option_count =
        u8::try_from(picker.options.len()).map_err(|_| InternalError::TooManyMenuOptions {
            custom_id: picker.custom_id.clone(),
            count: picker.options.len(),
        })?;

    let options: Vec<CreateSelectMenuOption> = picker
        .options
        .iter()
        .map(|option| {
            let description: String = option
                .description
                .chars()
                .take(MAX_OPTION_DESCRIPTION)
                .collect();
            CreateSelectMenuOption::new(&option.label, &option.value).description(description)
        })
        .collect();

    Ok(
        CreateSelectMenu::new(&picker.custom_id, CreateSelectMenuKind::String { options })
            .placeholder("Nothing selected")
            .min_values(0)
            .max_values(option_count),
    )
}

#[serenity::async_trait]
impl DiscordGateway for HttpGateway {
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<LiveRole>, AppError> {
        let roles = GuildId::new(guild_id).roles(self.http.as_ref()).await?;

        Ok(roles.values().map(LiveRole::from).collect())
    }

    async fn create_role(&self, guild_id: u64, spec: RoleSpec) -> Result<u64, AppError> {
        let builder = edit_role_builder(spec).permissions(Permissions::empty());
        let role = GuildId::new(guild_id)
            .create_role(self.http.as_ref(), builder)
            .await?;

        tracing::info!("Created role {} ({}) in guild {}", role.name, role.id, guild_id);

        Ok(role.id.get())
    }

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        spec: RoleSpec,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .edit_role(self.http.as_ref(), RoleId::new(role_id), edit_role_builder(spec))
            .await?;

        Ok(())
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .delete_role(self.http.as_ref(), RoleId::new(role_id))
            .await?;

        tracing::info!("Deleted role {} from guild {}", role_id, guild_id);

        Ok(())
    }

    async fn set_role_position(
        &self,
        guild_id: u64,
        role_id: u64,
        position: u16,
    ) -> Result<Vec<LiveRole>, AppError> {
        let roles = GuildId::new(guild_id)
            .edit_role_position(self.http.as_ref(), RoleId::new(role_id), position)
            .await?;

        Ok(roles.iter().map(LiveRole::from).collect())
    }

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<HashSet<u64>, AppError> {
        let member = self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await?;

        Ok(member.roles.iter().map(|id| id.get()).collect())
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Self role selection"),
            )
            .await?;

        Ok(())
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Self role selection"),
            )
            .await?;

        Ok(())
    }

    async fn send_self_role_picker(
        &self,
        channel_id: u64,
        picker: &SelfRolePicker,
    ) -> Result<u64, AppError> {
        let menu = picker_menu(picker)?;

        let embed = CreateEmbed::new()
            .title(&picker.title)
            .description(&picker.description);

        let message = ChannelId::new(channel_id)
            .send_message(
                self.http.as_ref(),
                CreateMessage::new()
                    .embed(embed)
                    .components(vec![CreateActionRow::SelectMenu(menu)]),
            )
            .await?;

        Ok(message.id.get())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_message(self.http.as_ref(), MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn purge_messages(&self, channel_id: u64, amount: u8) -> Result<usize, AppError> {
        let channel = ChannelId::new(channel_id);
        let messages = channel
            .messages(self.http.as_ref(), GetMessages::new().limit(amount))
            .await?;
        match messages.as_slice() {
            [] => {}
            // Bulk delete requires at least two messages
            [single] => channel.delete_message(self.http.as_ref(), single.id).await?,
            _ => channel.delete_messages(self.http.as_ref(), &messages).await?,
        }

        tracing::debug!(
            "Purged {} messages from channel {}",
            messages.len(),
            channel_id
        );

        Ok(messages.len())
    }
}
