use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, Http, ShardManager};

use crate::bot::{command, handler::Handler};
use crate::config::Config;
use crate::error::AppError;
use crate::service::ticket::TicketService;

/// Builds the Discord bot client
///
/// Creates the Serenity client with the ticket event handler attached but does not
/// connect to the gateway yet. The returned client's `http` and `shard_manager` can be
/// cloned out before the client is moved into `start_bot`, so the caller can still
/// clean up and shut down once the bot is running.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and command guild
/// - `tickets` - Ticket service shared by all event handler tasks
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, tickets: TicketService) -> Result<Client, AppError> {
    // Interactions arrive without any intent, GUILDS keeps the channel cache warm
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(tickets, config.discord_guild_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function connects the client to the gateway. It should be called from within
/// a tokio::spawn task since it will block until the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the connection fails (e.g. invalid token)
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Shuts the bot down
///
/// Removes the registered slash commands when configured to, so stale commands
/// don't linger while the bot is offline, then disconnects every shard. Failing to
/// remove the commands is logged and doesn't stop the shutdown.
///
/// # Arguments
/// - `config` - Application configuration deciding whether and where to unregister
/// - `http` - HTTP client taken from the running client
/// - `shard_manager` - Shard manager taken from the running client
pub async fn shutdown_bot(config: &Config, http: &Http, shard_manager: Arc<ShardManager>) {
    if config.clear_commands_on_shutdown {
        match command::unregister_commands(http, config.discord_guild_id).await {
            Ok(()) => tracing::info!("Removed slash commands"),
            Err(e) => tracing::error!("Failed to remove slash commands: {}", e),
        }
    }

    shard_manager.shutdown_all().await;

    tracing::info!("Discord bot shut down");
}
