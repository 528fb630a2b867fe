mod bot;
mod config;
mod error;
mod model;
mod service;

use dioxus_logger::tracing::{self, Level};

use crate::{config::Config, error::AppError, service::ticket::TicketService};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    // Ticket numbering starts over with every process
    let tickets = TicketService::new();

    let client = bot::start::init_bot(&config, tickets).await?;
    let http = client.http.clone();
    let shard_manager = client.shard_manager.clone();

    // Start Discord bot in a separate task
    let mut bot_task = tokio::spawn(bot::start::start_bot(client));

    tokio::select! {
        result = &mut bot_task => {
            return match result {
                Ok(result) => result,
                Err(e) => Err(AppError::InternalError(format!("Discord bot task failed: {}", e))),
            };
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Received shutdown signal");
        }
    }

    bot::start::shutdown_bot(&config, &http, shard_manager).await;

    match bot_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Discord bot stopped with error: {}", e),
        Err(e) => tracing::error!("Discord bot task failed during shutdown: {}", e),
    }

    Ok(())
}
