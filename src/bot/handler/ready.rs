//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The bot uses it
//! to register its slash commands, since registration needs the application id that
//! Serenity only learns from the ready payload.
//!
//! Ready fires again after every reconnect that can't resume the session. Registration
//! overwrites the whole command set, so repeating it is harmless.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client used for registration
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild to register commands in, `None` to register globally
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: Option<GuildId>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match command::register_commands(&ctx.http, guild_id).await {
        Ok(commands) => match guild_id {
            Some(guild_id) => tracing::info!(
                "Registered {} slash commands in guild {}",
                commands.len(),
                guild_id
            ),
            None => tracing::info!("Registered {} global slash commands", commands.len()),
        },
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
