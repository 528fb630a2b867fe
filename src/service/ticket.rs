//! Ticket numbering and thread status transitions.
//!
//! This module provides the `TicketService`, the only stateful part of the bot. It owns
//! one counter per ticket category and turns each ticket command into a new thread
//! title plus the acknowledgement to post. Ticket status is never stored; it is encoded
//! in the thread title:
//!
//! - opened: `[VICE-BUG-N] subject` / `[VICE-FEAT-N] subject`
//! - completed: `✅ ` prefixed to the current title
//! - rejected: ` ❌` appended to the current title
//!
//! The completed and rejected transitions apply to whatever the current title is. They
//! do not check for an existing ticket tag or status marker, so repeating a command
//! stacks markers (`✅ ✅ [VICE-BUG-1] ...`). Counters start at zero with every process
//! and are not persisted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::ticket::TicketError;
use crate::model::ticket::{ThreadContext, Ticket, TicketCategory, TicketCommand, TicketUpdate};

/// Service for numbering tickets and computing thread status transitions.
///
/// Cloning the service is cheap and clones share the same counters, so a single
/// instance created at startup can be handed to every event handler task.
#[derive(Clone)]
pub struct TicketService {
    /// Last bug ticket number handed out.
    bug_count: Arc<AtomicU64>,
    /// Last feature ticket number handed out.
    feature_count: Arc<AtomicU64>,
}

impl TicketService {
    /// Creates a new TicketService with both counters at zero.
    ///
    /// # Returns
    /// - `TicketService` - New service whose first ticket of each category is number 1
    pub fn new() -> Self {
        Self {
            bug_count: Arc::new(AtomicU64::new(0)),
            feature_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Applies a ticket command to a thread.
    ///
    /// Dispatches to the matching transition. See `open`, `complete` and `reject`.
    ///
    /// # Arguments
    /// - `command` - The parsed slash command
    /// - `thread` - Channel the command was invoked in
    ///
    /// # Returns
    /// - `Ok(TicketUpdate)` - New title and reply to post
    /// - `Err(TicketError::InvalidContext)` - Command was not invoked in a public thread
    pub fn apply(
        &self,
        command: &TicketCommand,
        thread: &ThreadContext,
    ) -> Result<TicketUpdate, TicketError> {
        match command {
            TicketCommand::Open {
                category: TicketCategory::Bug,
                name,
            } => self.open_bug(name, thread),
            TicketCommand::Open {
                category: TicketCategory::Feature,
                name,
            } => self.open_feature(name, thread),
            TicketCommand::Complete => self.complete(thread),
            TicketCommand::Reject => self.reject(thread),
        }
    }

    /// Opens a new bug ticket in the thread.
    pub fn open_bug(&self, name: &str, thread: &ThreadContext) -> Result<TicketUpdate, TicketError> {
        self.open(TicketCategory::Bug, name, thread)
    }

    /// Opens a new feature ticket in the thread.
    pub fn open_feature(
        &self,
        name: &str,
        thread: &ThreadContext,
    ) -> Result<TicketUpdate, TicketError> {
        self.open(TicketCategory::Feature, name, thread)
    }

    /// Opens a new ticket of the given category.
    ///
    /// Takes the next number for the category and replaces the thread title with the
    /// tagged ticket title. The number is only consumed once the context check passes,
    /// so refused commands never leave gaps in the numbering.
    ///
    /// # Arguments
    /// - `category` - Bug or feature
    /// - `name` - Subject of the ticket, becomes the title after the tag
    /// - `thread` - Channel the command was invoked in
    ///
    /// # Returns
    /// - `Ok(TicketUpdate)` - Tagged title, acknowledgement and the created ticket
    /// - `Err(TicketError::InvalidContext)` - Not a public thread, counter untouched
    fn open(
        &self,
        category: TicketCategory,
        name: &str,
        thread: &ThreadContext,
    ) -> Result<TicketUpdate, TicketError> {
        require_public_thread(thread)?;

        let ticket = Ticket {
            category,
            number: self.next_number(category),
            subject: name.to_string(),
        };

        let reply = format!(
            "Good news, {}! Your {} was accepted by the Vice Development Team. We will notify you when it’s complete! Your ticket number is {}. Please do not reply to this message.\n\nIf you have any questions, please contact the Vice Development Team on Discord.\n\nThank you for your patience!",
            thread.original_poster(),
            category.label(),
            ticket.number,
        );

        Ok(TicketUpdate {
            title: ticket.to_string(),
            reply,
            ticket: Some(ticket),
        })
    }

    /// Marks the thread's ticket as complete by prefixing `✅` to the title.
    ///
    /// # Returns
    /// - `Ok(TicketUpdate)` - Marked title and acknowledgement
    /// - `Err(TicketError::InvalidContext)` - Not a public thread
    pub fn complete(&self, thread: &ThreadContext) -> Result<TicketUpdate, TicketError> {
        require_public_thread(thread)?;

        Ok(TicketUpdate {
            title: format!("✅ {}", thread.title),
            reply: format!(
                "Good news, {}! Your bug report or feature request has been marked as complete. Thank you for your patience! ✅",
                thread.original_poster(),
            ),
            ticket: None,
        })
    }

    /// Marks the thread's ticket as not being done by appending `❌` to the title.
    ///
    /// # Returns
    /// - `Ok(TicketUpdate)` - Marked title and rejection notice
    /// - `Err(TicketError::InvalidContext)` - Not a public thread
    pub fn reject(&self, thread: &ThreadContext) -> Result<TicketUpdate, TicketError> {
        require_public_thread(thread)?;

        Ok(TicketUpdate {
            title: format!("{} ❌", thread.title),
            reply: format!(
                "Unfortunately, {}, your feature request will not be implemented at this time. We appreciate your suggestion and encourage you to keep submitting ideas in the future.",
                thread.original_poster(),
            ),
            ticket: None,
        })
    }

    /// Returns the last number handed out for a category, 0 if none yet.
    #[cfg(test)]
    pub fn current(&self, category: TicketCategory) -> u64 {
        self.counter(category).load(Ordering::SeqCst)
    }

    /// Increments the category's counter and returns the new value in one atomic step,
    /// so concurrent opens never share or skip a number.
    fn next_number(&self, category: TicketCategory) -> u64 {
        self.counter(category).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn counter(&self, category: TicketCategory) -> &AtomicU64 {
        match category {
            TicketCategory::Bug => &self.bug_count,
            TicketCategory::Feature => &self.feature_count,
        }
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new()
    }
}

fn require_public_thread(thread: &ThreadContext) -> Result<(), TicketError> {
    if thread.is_public_thread {
        Ok(())
    } else {
        Err(TicketError::InvalidContext)
    }
}
