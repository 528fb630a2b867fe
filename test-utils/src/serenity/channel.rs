//! Test factory for creating Serenity GuildChannel objects.
//!
//! This module provides factory functions for creating mock Serenity `GuildChannel`
//! structs for testing purposes. Discord models threads (including forum posts) as
//! guild channels with a thread channel type and a `thread_metadata` block, so both
//! threads and plain text channels are built through the same JSON shape.

use serenity::all::{ChannelType, GuildChannel};

/// Guild that all test channels belong to.
const TEST_GUILD_ID: u64 = 100000000000000000;

/// Parent channel that all test threads hang off.
const TEST_PARENT_CHANNEL_ID: u64 = 200000000000000000;

/// Creates a test Serenity thread with customizable fields.
///
/// Creates a GuildChannel by deserializing JSON with the provided values. The
/// channel is parented to a fixed test channel and carries unarchived, unlocked
/// thread metadata.
///
/// # Arguments
/// - `channel_id` - Discord channel ID of the thread (snowflake)
/// - `name` - Thread title
/// - `kind` - Channel type; `PublicThread` for forum posts, `PrivateThread` etc.
///   to exercise the wrong-context paths
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::ChannelType;
/// use test_utils::serenity::channel::create_test_thread;
///
/// let thread = create_test_thread(123456789, "[VICE-BUG-3] Crash on load", ChannelType::PublicThread);
/// assert_eq!(thread.name, "[VICE-BUG-3] Crash on load");
/// ```
pub fn create_test_thread(channel_id: u64, name: &str, kind: ChannelType) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": u8::from(kind),
        "guild_id": TEST_GUILD_ID.to_string(),
        "parent_id": TEST_PARENT_CHANNEL_ID.to_string(),
        "owner_id": "300000000000000000",
        "name": name,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "message_count": 1,
        "member_count": 1,
        "total_message_sent": 1,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
        "thread_metadata": {
            "archived": false,
            "auto_archive_duration": 1440,
            "archive_timestamp": "2024-01-01T00:00:00.000000+00:00",
            "locked": false,
            "create_timestamp": "2024-01-01T00:00:00.000000+00:00",
        },
    }))
    .expect("Failed to create test thread - invalid JSON structure")
}

/// Creates a test Serenity text channel.
///
/// Creates a regular guild text channel with no thread metadata. Used to test
/// that ticket commands are refused outside of threads.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(channel_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": u8::from(ChannelType::Text),
        "guild_id": TEST_GUILD_ID.to_string(),
        "parent_id": null,
        "name": name,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
