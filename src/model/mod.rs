//! Domain models for the ticket workflow.
//!
//! Tickets are never stored. A ticket lives in the title of the Discord thread it was
//! opened in, so the models here describe the inputs read back from Discord
//! (`ThreadContext`), the intent of an incoming command (`TicketCommand`) and the
//! side effects the bot should perform in response (`TicketUpdate`).

pub mod ticket;
