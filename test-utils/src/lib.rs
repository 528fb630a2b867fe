//! Vice Bot Test Utils
//!
//! Provides shared testing utilities for the ticket bot. The bot only ever reads
//! Discord objects handed to it by Serenity, so the utilities here are factories that
//! build those objects the same way Serenity does: by deserializing the JSON payloads
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::{create_test_message, create_test_thread};
//!
//! #[test]
//! fn resolves_thread_author() {
//!     let thread = create_test_thread(1, "Crash on load", ChannelType::PublicThread);
//!     let message = create_test_message(10, 1, 42, "alice");
//!
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
