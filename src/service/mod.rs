//! Business logic for the ticket workflow.
//!
//! Services here are pure with respect to Discord: they take the context the bot
//! adapter read from Discord and decide what should change, leaving the actual
//! requests to the `bot` module.

pub mod ticket;

#[cfg(test)]
mod test;
