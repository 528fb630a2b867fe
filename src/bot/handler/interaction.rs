//! Interaction handler for the ticket slash commands.
//!
//! Every command goes through the same steps:
//!
//! 1. Parse the command name and options into a `TicketCommand`
//! 2. Defer the response, thread renames are rate limited and can take longer than
//!    Discord's initial response window
//! 3. Resolve the channel and, inside a public thread, join it (opening only) and read
//!    the bounded message history to find the original poster
//! 4. Let `TicketService` decide the transition
//! 5. Rename the thread and post the acknowledgement
//!
//! A failed Discord request aborts only the command it belongs to. The error is logged
//! and the user gets a generic failure reply while the bot keeps serving other commands.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::bot::{command, thread};
use crate::error::{ticket::TicketError, AppError};
use crate::model::ticket::TicketCommand;
use crate::service::ticket::TicketService;

/// Reply sent when a command fails for reasons other than being used outside a thread.
const FAILURE_REPLY: &str = "Something went wrong while updating this ticket.";

/// Handles an interaction received from Discord.
///
/// Only application commands are handled; commands that aren't ticket commands are
/// ignored.
///
/// # Arguments
/// - `tickets` - Shared ticket service
/// - `ctx` - Discord context for making requests
/// - `interaction` - The received interaction
pub async fn handle_interaction_create(
    tickets: &TicketService,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let name_option = interaction
        .data
        .options
        .iter()
        .find(|option| option.name == command::NAME_OPTION)
        .and_then(|option| option.value.as_str());

    let ticket_command = match command::parse_command(&interaction.data.name, name_option) {
        Ok(Some(ticket_command)) => ticket_command,
        Ok(None) => {
            tracing::debug!("Ignoring unknown command /{}", interaction.data.name);
            return;
        }
        Err(e) => {
            tracing::warn!(
                "Refused /{} in channel {}: {}",
                interaction.data.name,
                interaction.channel_id,
                e
            );
            report_failure(&ctx, &interaction, false, &e.to_string()).await;
            return;
        }
    };

    if let Err(e) = interaction.defer(&ctx).await {
        tracing::error!(
            "Failed to acknowledge /{} in channel {}: {}",
            interaction.data.name,
            interaction.channel_id,
            e
        );
        return;
    }

    if let Err(e) = handle_ticket_command(tickets, &ctx, &interaction, &ticket_command).await {
        tracing::error!(
            "Failed to handle /{} in channel {}: {}",
            interaction.data.name,
            interaction.channel_id,
            e
        );
        report_failure(&ctx, &interaction, true, FAILURE_REPLY).await;
    }
}

/// Applies a parsed ticket command to the channel it was invoked in.
///
/// The response must already be deferred.
///
/// # Returns
/// - `Ok(())` - The thread was updated and acknowledged, or the user was told the
///   command only works in threads
/// - `Err(AppError::DiscordErr)` - A Discord request failed
async fn handle_ticket_command(
    tickets: &TicketService,
    ctx: &Context,
    interaction: &CommandInteraction,
    ticket_command: &TicketCommand,
) -> Result<(), AppError> {
    let channel_id = interaction.channel_id;
    let channel = thread::fetch_channel(ctx, channel_id).await?;
    let mut context = thread::thread_context(channel.as_ref());

    // Membership and history are only meaningful inside a thread
    if context.is_public_thread {
        if ticket_command.joins_thread() {
            thread::join_thread(ctx, channel_id).await?;
        }

        let original_poster =
            thread::fetch_original_poster(ctx, channel_id, ticket_command.history_limit()).await?;
        context = context.with_original_poster(original_poster);
    }

    let update = match tickets.apply(ticket_command, &context) {
        Ok(update) => update,
        Err(TicketError::InvalidContext) => {
            tracing::debug!(
                "Refused /{} outside of a public thread in channel {}",
                interaction.data.name,
                channel_id
            );
            respond(ctx, interaction, &TicketError::InvalidContext.to_string()).await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    thread::rename_thread(ctx, channel_id, &update.title).await?;
    respond(ctx, interaction, &update.reply).await?;

    match &update.ticket {
        Some(ticket) => tracing::info!(
            "Opened {} #{} in thread {} for {}",
            ticket.category.label(),
            ticket.number,
            channel_id,
            context.original_poster()
        ),
        None => tracing::info!(
            "/{} renamed thread {} to '{}' for {}",
            interaction.data.name,
            channel_id,
            update.title,
            context.original_poster()
        ),
    }

    Ok(())
}

/// Fills in the deferred response.
async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    interaction
        .edit_response(ctx, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// Tells the user their command failed. Errors here are only logged.
///
/// # Arguments
/// - `deferred` - Whether the response was already deferred; an undeferred
///   interaction gets an ephemeral reply instead
/// - `message` - Text shown to the user
async fn report_failure(
    ctx: &Context,
    interaction: &CommandInteraction,
    deferred: bool,
    message: &str,
) {
    let result = if deferred {
        respond(ctx, interaction, message).await
    } else {
        interaction
            .create_response(
                ctx,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(message)
                        .ephemeral(true),
                ),
            )
            .await
            .map_err(AppError::from)
    };

    if let Err(e) = result {
        tracing::error!(
            "Failed to send failure reply for /{} in channel {}: {}",
            interaction.data.name,
            interaction.channel_id,
            e
        );
    }
}
