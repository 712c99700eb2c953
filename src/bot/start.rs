use std::sync::Arc;

use serenity::all::{ApplicationId, Client, GatewayIntents, Http};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Creates an HTTP client for the bot's application.
///
/// The application id is required to register global commands before the gateway
/// connection is established.
pub fn http_client(config: &Config) -> Arc<Http> {
    let http = Http::new(&config.discord_bot_token);
    http.set_application_id(ApplicationId::new(config.discord_client_id));

    Arc::new(http)
}

/// Starts the Discord bot and runs until it shuts down.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared bot state passed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the client could not be built or the connection failed
pub async fn start_bot(config: &Config, state: Arc<BotState>) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .application_id(ApplicationId::new(config.discord_client_id))
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
