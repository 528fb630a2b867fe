//! Slash command definitions and parsing.
//!
//! Defines the four ticket commands registered with Discord and converts an incoming
//! command name plus its options back into a `TicketCommand`.

use serenity::all::{Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http};

use crate::error::{ticket::TicketError, AppError};
use crate::model::ticket::{TicketCategory, TicketCommand};

pub const BUG_COMMAND: &str = "bug";
pub const FEATURE_COMMAND: &str = "feature";
pub const COMPLETE_COMMAND: &str = "complete";
pub const NOT_DOING_COMMAND: &str = "notdoing";

/// Name of the string option holding a new ticket's subject.
pub const NAME_OPTION: &str = "name";

/// Longest ticket name accepted, in characters.
///
/// Discord caps thread names at 100 characters. The rest is left for the
/// `[VICE-FEAT-NNNNNN] ` tag and the `✅ ` / ` ❌` status markers.
pub const MAX_NAME_LENGTH: u16 = 75;

/// Create all slash commands for registration
pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(BUG_COMMAND)
            .description("Submit a bug report.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    NAME_OPTION,
                    "Name of the bug report.",
                )
                .required(true)
                .max_length(MAX_NAME_LENGTH),
            ),
        CreateCommand::new(FEATURE_COMMAND)
            .description("Submit a feature request.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    NAME_OPTION,
                    "Name of the feature request.",
                )
                .required(true)
                .max_length(MAX_NAME_LENGTH),
            ),
        CreateCommand::new(COMPLETE_COMMAND)
            .description("Mark a bug report or feature request as complete."),
        CreateCommand::new(NOT_DOING_COMMAND)
            .description("Mark a feature request as not going to be implemented."),
    ]
}

/// Parses an incoming slash command into a ticket command.
///
/// # Arguments
/// - `command_name` - Name of the invoked command
/// - `name_option` - Value of the `name` option, if the command carried one
///
/// # Returns
/// - `Ok(Some(TicketCommand))` - A ticket command
/// - `Ok(None)` - Not one of the ticket commands
/// - `Err(TicketError::MissingOption)` - `bug` or `feature` without a usable name
/// - `Err(TicketError::NameTooLong)` - The name wouldn't fit in a thread title
pub fn parse_command(
    command_name: &str,
    name_option: Option<&str>,
) -> Result<Option<TicketCommand>, TicketError> {
    let category = match command_name {
        BUG_COMMAND => TicketCategory::Bug,
        FEATURE_COMMAND => TicketCategory::Feature,
        COMPLETE_COMMAND => return Ok(Some(TicketCommand::Complete)),
        NOT_DOING_COMMAND => return Ok(Some(TicketCommand::Reject)),
        _ => return Ok(None),
    };

    let name = name_option
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| TicketError::MissingOption(NAME_OPTION.to_string()))?;

    let length = name.chars().count();
    if length > usize::from(MAX_NAME_LENGTH) {
        return Err(TicketError::NameTooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(Some(TicketCommand::Open {
        category,
        name: name.to_string(),
    }))
}

/// Registers the ticket commands, replacing any previously registered set.
///
/// Guild commands update immediately and are meant for development; global commands
/// can take a while to propagate to every client.
///
/// # Arguments
/// - `http` - Discord HTTP client, must already know the application id
/// - `guild_id` - Guild to register in, or `None` to register globally
///
/// # Returns
/// - `Ok(Vec<Command>)` - The commands as registered by Discord
/// - `Err(AppError::DiscordErr)` - Discord rejected the registration
pub async fn register_commands(
    http: &Http,
    guild_id: Option<GuildId>,
) -> Result<Vec<Command>, AppError> {
    let commands = match guild_id {
        Some(guild_id) => guild_id.set_commands(http, create_commands()).await?,
        None => Command::set_global_commands(http, create_commands()).await?,
    };

    Ok(commands)
}

/// Removes every command registered by `register_commands` for the same scope.
pub async fn unregister_commands(http: &Http, guild_id: Option<GuildId>) -> Result<(), AppError> {
    match guild_id {
        Some(guild_id) => guild_id.set_commands(http, Vec::new()).await?,
        None => Command::set_global_commands(http, Vec::new()).await?,
    };

    Ok(())
}
