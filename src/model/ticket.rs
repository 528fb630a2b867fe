use std::fmt;

/// Mention used in replies when the thread's author can't be determined.
pub const UNKNOWN_POSTER: &str = "unknown user";

/// Kind of ticket a thread can be opened as. Each category is numbered independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketCategory {
    Bug,
    Feature,
}

impl TicketCategory {
    /// Tag embedded in the thread title, e.g. `VICE-BUG` in `[VICE-BUG-3] Crash on load`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Bug => "VICE-BUG",
            Self::Feature => "VICE-FEAT",
        }
    }

    /// Human readable name used in acknowledgement messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "bug report",
            Self::Feature => "feature request",
        }
    }
}

/// A numbered ticket as encoded in a thread title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub category: TicketCategory,
    pub number: u64,
    pub subject: String,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}] {}", self.category.tag(), self.number, self.subject)
    }
}

/// Intent of an incoming slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketCommand {
    /// Tag the thread as a new ticket named `name`.
    Open {
        category: TicketCategory,
        name: String,
    },
    /// Mark the thread's ticket as done.
    Complete,
    /// Mark the thread's ticket as not going to be done.
    Reject,
}

impl TicketCommand {
    /// Number of most recent messages fetched to find the thread's original poster.
    ///
    /// Only the oldest message of the fetched page is used. `Complete` looks further
    /// back since the bot's own acknowledgement is usually the newest message by then.
    pub fn history_limit(&self) -> u8 {
        match self {
            Self::Complete => 50,
            Self::Open { .. } | Self::Reject => 1,
        }
    }

    /// Whether the bot must be a member of the thread before updating it.
    pub fn joins_thread(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// The parts of a Discord channel the ticket workflow reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadContext {
    /// Whether the command was invoked inside a public thread (forum posts included).
    pub is_public_thread: bool,
    /// Current title of the channel.
    pub title: String,
    /// Mention of the thread's original poster, if message history had one.
    pub original_poster: Option<String>,
}

impl ThreadContext {
    /// Context for a public thread whose poster hasn't been resolved yet.
    pub fn public_thread(title: impl Into<String>) -> Self {
        Self {
            is_public_thread: true,
            title: title.into(),
            original_poster: None,
        }
    }

    /// Context for anything that isn't a public thread: text channels, private
    /// threads, DMs or channels that couldn't be resolved to a guild channel.
    pub fn outside_thread(title: impl Into<String>) -> Self {
        Self {
            is_public_thread: false,
            title: title.into(),
            original_poster: None,
        }
    }

    pub fn with_original_poster(mut self, original_poster: Option<String>) -> Self {
        self.original_poster = original_poster;
        self
    }

    /// Mention of the original poster, falling back to [`UNKNOWN_POSTER`].
    pub fn original_poster(&self) -> &str {
        self.original_poster.as_deref().unwrap_or(UNKNOWN_POSTER)
    }
}

/// Side effects to perform on the thread after a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketUpdate {
    /// New thread title.
    pub title: String,
    /// Acknowledgement posted as the command reply.
    pub reply: String,
    /// Ticket created by the transition, only set when opening.
    pub ticket: Option<Ticket>,
}
