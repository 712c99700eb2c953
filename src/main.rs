mod bot;
mod config;
mod data;
mod discord;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{config::Config, error::AppError, state::BotState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let http = bot::start::http_client(&config);
    bot::deploy::deploy_commands(&http, &config.deployed_commands_path).await?;

    let state = Arc::new(BotState::new(db, &config));

    bot::start::start_bot(&config, state).await
}
