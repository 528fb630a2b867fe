//! Error types for the ticket bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Startup code returns
//! it directly so configuration problems abort the process, while the interaction
//! handler catches it per command so one failed request never takes the bot down.

pub mod config;
pub mod ticket;

use thiserror::Error;

use crate::error::{config::ConfigError, ticket::TicketError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the bot cannot connect without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Ticket command could not be applied.
    ///
    /// Covers both wrong-context invocations and malformed command payloads.
    #[error(transparent)]
    TicketErr(#[from] TicketError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised by any request against Discord: channel
    /// lookup, thread join, message history, rename or interaction response.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, raised while waiting for the shutdown signal.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
