//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (GuildChannel, Message) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API would
//! return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::{create_test_channel, create_test_message, create_test_thread};
//!
//! #[test]
//! fn test_thread_lookup() {
//!     // A forum post, which Discord models as a public thread
//!     let thread = create_test_thread(123456789, "Crash on load", ChannelType::PublicThread);
//!
//!     // A regular text channel
//!     let channel = create_test_channel(987654321, "general");
//!
//!     // The first message of the thread
//!     let message = create_test_message(111111111, 123456789, 42, "alice");
//! }
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_thread` - Create Serenity GuildChannel thread objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel text channels
//! - `message::create_test_message` - Create Serenity Message objects

pub mod channel;
pub mod message;

// Re-export commonly used functions for convenience
pub use channel::{create_test_channel, create_test_thread};
pub use message::create_test_message;
