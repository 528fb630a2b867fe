//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message`
//! structs for testing purposes. Only the author matters to the bot, so the
//! remaining fields are filled with the defaults of a plain text message.

use serenity::all::Message;

/// Creates a test Serenity Message authored by the given user.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel (or thread) the message was posted in
/// - `author_id` - Discord user ID of the author
/// - `username` - Author's username
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::create_test_message;
///
/// let message = create_test_message(111111111, 123456789, 42, "alice");
/// assert_eq!(message.author.id.get(), 42);
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    username: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
            "system": false,
            "public_flags": 0,
        },
        "content": format!("Message from {}", username),
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
