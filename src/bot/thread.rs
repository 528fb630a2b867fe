//! Discord thread lookups and updates.
//!
//! Helpers that read the ticket context out of Discord and write transitions back:
//! resolving the invoking channel, finding the thread's original poster from a bounded
//! page of message history, and renaming the thread.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, ChannelType, Context, EditThread, GetMessages, GuildChannel, Mentionable, Message,
};

use crate::error::AppError;
use crate::model::ticket::ThreadContext;

/// Builds the ticket context for a resolved channel.
///
/// Only public threads accept ticket commands. Forum posts are public threads too.
/// Channels that didn't resolve to a guild channel (DMs) are treated as outside a thread.
///
/// # Arguments
/// - `channel` - The guild channel the command was invoked in, if any
///
/// # Returns
/// - `ThreadContext` - Context with no original poster resolved yet
pub fn thread_context(channel: Option<&GuildChannel>) -> ThreadContext {
    match channel {
        Some(channel) if channel.kind == ChannelType::PublicThread => {
            ThreadContext::public_thread(channel.name.clone())
        }
        Some(channel) => ThreadContext::outside_thread(channel.name.clone()),
        None => ThreadContext::outside_thread(String::new()),
    }
}

/// Picks the original poster's mention from a page of message history.
///
/// Discord returns history newest first, so the last message of the page is the
/// oldest one fetched. This is only the true first message when the thread is no
/// longer than the page.
///
/// # Returns
/// - `Some(String)` - Mention of the oldest fetched message's author
/// - `None` - The page was empty
pub fn resolve_original_poster(messages: &[Message]) -> Option<String> {
    messages
        .last()
        .map(|message| message.author.mention().to_string())
}

/// Fetches the channel a command was invoked in.
///
/// # Returns
/// - `Ok(Some(GuildChannel))` - A guild channel or thread
/// - `Ok(None)` - A DM or other non-guild channel
/// - `Err(AppError::DiscordErr)` - Channel lookup failed
pub async fn fetch_channel(
    ctx: &Context,
    channel_id: ChannelId,
) -> Result<Option<GuildChannel>, AppError> {
    let channel = channel_id.to_channel(ctx).await?;

    Ok(channel.guild())
}

/// Fetches up to `limit` of the thread's most recent messages and resolves the original
/// poster from them.
pub async fn fetch_original_poster(
    ctx: &Context,
    channel_id: ChannelId,
    limit: u8,
) -> Result<Option<String>, AppError> {
    let messages = channel_id
        .messages(ctx, GetMessages::new().limit(limit))
        .await?;

    tracing::debug!(
        "Fetched {} messages from thread {} to resolve original poster",
        messages.len(),
        channel_id
    );

    Ok(resolve_original_poster(&messages))
}

/// Adds the bot to the thread so it can post and edit there.
pub async fn join_thread(ctx: &Context, channel_id: ChannelId) -> Result<(), AppError> {
    channel_id.join_thread(&ctx.http).await?;

    Ok(())
}

/// Renames the thread.
pub async fn rename_thread(
    ctx: &Context,
    channel_id: ChannelId,
    title: &str,
) -> Result<(), AppError> {
    channel_id
        .edit_thread(ctx, EditThread::new().name(title))
        .await?;

    Ok(())
}
