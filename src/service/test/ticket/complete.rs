use super::*;

/// Tests completing a ticket.
///
/// Expected: Ok with a checkmark prefixed to the current title
#[test]
fn prefixes_checkmark() {
    let service = TicketService::new();

    let update = service
        .complete(&thread("[VICE-BUG-3] Crash on load", "<@42>"))
        .unwrap();

    assert_eq!(update.title, "✅ [VICE-BUG-3] Crash on load");
    assert_eq!(
        update.reply,
        "Good news, <@42>! Your bug report or feature request has been marked as complete. Thank you for your patience! ✅"
    );
    assert!(update.ticket.is_none());
}

/// Tests that completing is not idempotent.
///
/// The title is used as given, so completing an already completed ticket stacks
/// another checkmark.
///
/// Expected: Ok with "✅ ✅ " prefix after two completions
#[test]
fn completing_twice_stacks_checkmarks() {
    let service = TicketService::new();

    let first = service
        .complete(&thread("[VICE-BUG-3] Crash on load", "@alice"))
        .unwrap();
    let second = service.complete(&thread(&first.title, "@alice")).unwrap();

    assert_eq!(second.title, "✅ ✅ [VICE-BUG-3] Crash on load");
}

/// Tests completing a rejected ticket.
///
/// Expected: Ok with both markers present
#[test]
fn keeps_rejection_marker() {
    let service = TicketService::new();

    let update = service
        .complete(&thread("[VICE-FEAT-2] Dark mode ❌", "@alice"))
        .unwrap();

    assert_eq!(update.title, "✅ [VICE-FEAT-2] Dark mode ❌");
}

/// Tests that completing doesn't touch the counters.
///
/// Expected: Ok with both counters still at zero
#[test]
fn does_not_number_tickets() {
    let service = TicketService::new();

    service.complete(&thread("[VICE-BUG-3] Crash", "@alice")).unwrap();

    assert_eq!(service.current(TicketCategory::Bug), 0);
    assert_eq!(service.current(TicketCategory::Feature), 0);
}

/// Tests completing outside a public thread.
///
/// Expected: Err(InvalidContext)
#[test]
fn refuses_outside_thread() {
    let service = TicketService::new();

    let err = service
        .complete(&ThreadContext::outside_thread("general"))
        .unwrap_err();

    assert_eq!(err, TicketError::InvalidContext);
}

/// Tests completing without a resolvable original poster.
///
/// Expected: Ok with "unknown user" in the reply
#[test]
fn uses_unknown_user_without_poster() {
    let service = TicketService::new();

    let update = service
        .complete(&ThreadContext::public_thread("[VICE-BUG-1] Crash"))
        .unwrap();

    assert!(update.reply.starts_with("Good news, unknown user!"));
}
