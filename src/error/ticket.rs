use thiserror::Error;

/// Reasons a ticket command is refused before anything on Discord changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// Command was invoked outside of a public thread.
    ///
    /// The display text is sent verbatim to the user as the command reply, so it
    /// must stay user-facing.
    #[error("This command can only be used in a thread.")]
    InvalidContext,

    /// A required command option was absent or blank.
    ///
    /// Discord enforces required options in the command schema, so this indicates
    /// a stale command registration or a malformed payload.
    #[error("Missing required command option: {0}")]
    MissingOption(String),

    /// Ticket name is too long to fit in a thread title once tagged.
    ///
    /// Refused before a ticket number is taken. The display text is shown to the user.
    #[error("Ticket names can be at most {max} characters long, this one has {length}.")]
    NameTooLong {
        /// Length of the submitted name in characters
        length: usize,
        /// Longest accepted name in characters
        max: u16,
    },
}
