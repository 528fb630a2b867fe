use super::*;

/// Tests opening the first bug ticket on a fresh service.
///
/// Verifies the tagged title and that the acknowledgement names the original
/// poster and the ticket number.
///
/// Expected: Ok with title "[VICE-BUG-1] Crash on load"
#[test]
fn opens_first_bug_ticket() {
    let service = TicketService::new();

    let update = service
        .open_bug("Crash on load", &thread("help pls", "@alice"))
        .unwrap();

    assert_eq!(update.title, "[VICE-BUG-1] Crash on load");
    assert!(update.reply.contains("@alice"));
    assert!(update.reply.contains("1"));
    assert!(update.reply.contains("bug report"));
    assert!(update.reply.contains("Your ticket number is 1."));

    let ticket = update.ticket.unwrap();
    assert_eq!(ticket.category, TicketCategory::Bug);
    assert_eq!(ticket.number, 1);
    assert_eq!(ticket.subject, "Crash on load");
}

/// Tests opening a feature ticket.
///
/// Expected: Ok with VICE-FEAT tag and feature request wording
#[test]
fn opens_feature_ticket() {
    let service = TicketService::new();

    let update = service
        .open_feature("Dark mode", &thread("idea", "<@42>"))
        .unwrap();

    assert_eq!(update.title, "[VICE-FEAT-1] Dark mode");
    assert!(update.reply.starts_with("Good news, <@42>! Your feature request was accepted"));
    assert!(update.reply.ends_with("Thank you for your patience!"));
}

/// Tests that successive opens are numbered 1..N with no gaps or repeats.
///
/// Expected: Ok with numbers 1 through 10 in call order
#[test]
fn numbers_bug_tickets_sequentially() {
    let service = TicketService::new();

    let numbers: Vec<u64> = (0..10)
        .map(|i| {
            service
                .open_bug(&format!("Bug {}", i), &thread("t", "@alice"))
                .unwrap()
                .ticket
                .unwrap()
                .number
        })
        .collect();

    assert_eq!(numbers, (1..=10).collect::<Vec<u64>>());
    assert_eq!(service.current(TicketCategory::Bug), 10);
}

/// Tests that bug and feature numbering don't affect each other.
///
/// Expected: Ok with each category counting from 1 independently
#[test]
fn counts_categories_independently() {
    let service = TicketService::new();
    let thread = thread("t", "@alice");

    assert_eq!(service.open_bug("a", &thread).unwrap().title, "[VICE-BUG-1] a");
    assert_eq!(service.open_feature("b", &thread).unwrap().title, "[VICE-FEAT-1] b");
    assert_eq!(service.open_bug("c", &thread).unwrap().title, "[VICE-BUG-2] c");
    assert_eq!(service.open_feature("d", &thread).unwrap().title, "[VICE-FEAT-2] d");
    assert_eq!(service.open_feature("e", &thread).unwrap().title, "[VICE-FEAT-3] e");
    assert_eq!(service.open_bug("f", &thread).unwrap().title, "[VICE-BUG-3] f");

    assert_eq!(service.current(TicketCategory::Bug), 3);
    assert_eq!(service.current(TicketCategory::Feature), 3);
}

/// Tests that clones of the service share their counters.
///
/// Expected: Ok with the clone continuing the original's numbering
#[test]
fn clones_share_counters() {
    let service = TicketService::new();
    let clone = service.clone();

    service.open_bug("a", &thread("t", "@alice")).unwrap();
    let update = clone.open_bug("b", &thread("t", "@alice")).unwrap();

    assert_eq!(update.title, "[VICE-BUG-2] b");
}

/// Tests that opening outside a public thread is refused without consuming a number.
///
/// Expected: Err(InvalidContext) with the fixed message and counters unchanged
#[test]
fn refuses_open_outside_thread() {
    let service = TicketService::new();
    let channel = ThreadContext::outside_thread("general");

    let err = service.open_bug("Crash on load", &channel).unwrap_err();
    assert_eq!(err, TicketError::InvalidContext);
    assert_eq!(err.to_string(), "This command can only be used in a thread.");

    let err = service.open_feature("Dark mode", &channel).unwrap_err();
    assert_eq!(err, TicketError::InvalidContext);

    assert_eq!(service.current(TicketCategory::Bug), 0);
    assert_eq!(service.current(TicketCategory::Feature), 0);

    // The next valid open still gets number 1
    let update = service.open_bug("Crash on load", &thread("t", "@alice")).unwrap();
    assert_eq!(update.title, "[VICE-BUG-1] Crash on load");
}

/// Tests the acknowledgement when the thread had no messages to take a poster from.
///
/// Expected: Ok with "unknown user" substituted into the reply
#[test]
fn uses_unknown_user_without_poster() {
    let service = TicketService::new();

    let update = service
        .open_bug("Crash on load", &ThreadContext::public_thread("t"))
        .unwrap();

    assert!(update
        .reply
        .starts_with(&format!("Good news, {}!", UNKNOWN_POSTER)));
}

/// Tests concurrent opens from many tasks.
///
/// Each task opens tickets on its own clone of the service, as event handler tasks do.
///
/// Expected: Ok with every number from 1 to N handed out exactly once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn hands_out_unique_numbers_concurrently() {
    const TASKS: u64 = 16;
    const OPENS_PER_TASK: u64 = 25;

    let service = TicketService::new();

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                (0..OPENS_PER_TASK)
                    .map(|_| {
                        service
                            .open_bug("Crash", &thread("t", "@alice"))
                            .unwrap()
                            .ticket
                            .unwrap()
                            .number
                    })
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.extend(handle.await.unwrap());
    }
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=TASKS * OPENS_PER_TASK).collect::<Vec<u64>>());
    assert_eq!(service.current(TicketCategory::Feature), 0);
}
