use crate::{
    error::ticket::TicketError,
    model::ticket::{ThreadContext, TicketCategory, TicketCommand, UNKNOWN_POSTER},
    service::ticket::TicketService,
};

mod apply;
mod complete;
mod open;

/// Builds a public thread context with a resolved original poster.
fn thread(title: &str, poster: &str) -> ThreadContext {
    ThreadContext::public_thread(title).with_original_poster(Some(poster.to_string()))
}
