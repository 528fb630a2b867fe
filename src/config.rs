use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const DISCORD_BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
const DISCORD_GUILD_ID: &str = "DISCORD_GUILD_ID";
const DISCORD_CLEAR_COMMANDS_ON_SHUTDOWN: &str = "DISCORD_CLEAR_COMMANDS_ON_SHUTDOWN";

pub struct Config {
    pub discord_bot_token: String,

    /// Guild to register slash commands in. Commands are registered globally when unset.
    pub discord_guild_id: Option<GuildId>,
    /// Remove the registered slash commands when the bot shuts down.
    pub clear_commands_on_shutdown: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones so an empty line in `.env`
    /// doesn't turn into a parse error.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            discord_bot_token: var(DISCORD_BOT_TOKEN)
                .ok_or_else(|| ConfigError::MissingEnvVar(DISCORD_BOT_TOKEN.to_string()))?,
            discord_guild_id: var(DISCORD_GUILD_ID)
                .map(|value| parse_guild_id(&value))
                .transpose()?,
            clear_commands_on_shutdown: var(DISCORD_CLEAR_COMMANDS_ON_SHUTDOWN)
                .map(|value| parse_bool(DISCORD_CLEAR_COMMANDS_ON_SHUTDOWN, &value))
                .transpose()?
                .unwrap_or(true),
        })
    }
}

fn parse_guild_id(value: &str) -> Result<GuildId, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(GuildId::new(id)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: DISCORD_GUILD_ID.to_string(),
            value: value.to_string(),
            reason: "expected a non-zero Discord snowflake".to_string(),
        }),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
