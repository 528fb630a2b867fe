use super::*;

/// Tests that apply routes each command to its transition.
///
/// Expected: Ok with the title each command produces
#[test]
fn dispatches_each_command() {
    let service = TicketService::new();
    let thread = thread("[VICE-BUG-1] Crash", "@alice");

    let bug = TicketCommand::Open {
        category: TicketCategory::Bug,
        name: "Crash".to_string(),
    };
    let feature = TicketCommand::Open {
        category: TicketCategory::Feature,
        name: "Dark mode".to_string(),
    };

    assert_eq!(service.apply(&bug, &thread).unwrap().title, "[VICE-BUG-1] Crash");
    assert_eq!(
        service.apply(&feature, &thread).unwrap().title,
        "[VICE-FEAT-1] Dark mode"
    );
    assert_eq!(
        service.apply(&TicketCommand::Complete, &thread).unwrap().title,
        "✅ [VICE-BUG-1] Crash"
    );
    assert_eq!(
        service.apply(&TicketCommand::Reject, &thread).unwrap().title,
        "[VICE-BUG-1] Crash ❌"
    );
}

/// Tests that every command is refused outside a public thread.
///
/// Expected: Err(InvalidContext) for all four commands and no numbers consumed
#[test]
fn refuses_every_command_outside_thread() {
    let service = TicketService::new();
    let channel = ThreadContext::outside_thread("general");

    let commands = [
        TicketCommand::Open {
            category: TicketCategory::Bug,
            name: "Crash".to_string(),
        },
        TicketCommand::Open {
            category: TicketCategory::Feature,
            name: "Dark mode".to_string(),
        },
        TicketCommand::Complete,
        TicketCommand::Reject,
    ];

    for command in &commands {
        assert_eq!(
            service.apply(command, &channel),
            Err(TicketError::InvalidContext)
        );
    }

    assert_eq!(service.current(TicketCategory::Bug), 0);
    assert_eq!(service.current(TicketCategory::Feature), 0);
}
