use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::service::ticket::TicketService;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub tickets: TicketService,
    /// Guild the slash commands are registered in, `None` for global registration.
    pub guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(tickets: TicketService, guild_id: Option<GuildId>) -> Self {
        Self { tickets, guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.tickets, ctx, interaction).await;
    }
}
