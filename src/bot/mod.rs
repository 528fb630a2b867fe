//! Discord bot integration for the ticket workflow.
//!
//! This module provides the Discord side of the bot: building the Serenity client,
//! registering the slash commands, and turning command interactions into ticket
//! transitions. The ticket rules themselves live in `service::ticket`; everything
//! here is plumbing between Discord and that service.
//!
//! The bot runs in a separate tokio task so the main task can wait for the shutdown
//! signal and remove the registered commands before exiting.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and thread events so channel lookups can be served from cache
//!
//! Slash command interactions are delivered regardless of intents, and the bot never
//! reads message content, so no privileged intents are needed.

pub mod command;
pub mod handler;
pub mod start;
pub mod thread;
