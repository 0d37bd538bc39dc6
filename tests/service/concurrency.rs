//! Updates racing on one record through a shared service.

use std::sync::Arc;
use std::thread;

use feedback_board::{ListQuery, Status, UpdateFeedback};

use crate::support::seeded;

const WRITERS: usize = 8;
const ROUNDS: usize = 50;

fn content_for(writer: usize) -> String {
    format!("Writer {writer} says the export dialog needs work.")
}

#[test]
fn concurrent_content_and_status_updates_do_not_tear() {
    let service = Arc::new(seeded());
    let before = service.get("1").unwrap();

    let mut allowed_content: Vec<String> = (0..WRITERS).map(content_for).collect();
    allowed_content.push(before.content.clone());

    let mut handles = Vec::new();
    for writer in 0..WRITERS {
        let service = Arc::clone(&service);
        handles.push(thread::spawn(move || {
            (0..ROUNDS)
                .map(|_| {
                    service
                        .update("1", UpdateFeedback::new().content(content_for(writer)))
                        .unwrap()
                })
                .collect::<Vec<_>>()
        }));
    }
    for writer in 0..WRITERS {
        let service = Arc::clone(&service);
        let status = Status::ALL[writer % Status::ALL.len()];
        handles.push(thread::spawn(move || {
            (0..ROUNDS)
                .map(|_| {
                    service
                        .update("1", UpdateFeedback::new().status(status.as_str()))
                        .unwrap()
                })
                .collect::<Vec<_>>()
        }));
    }

    let results: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(results.len(), 2 * WRITERS * ROUNDS);

    let last = service.get("1").unwrap();
    for record in results.iter().chain(std::iter::once(&last)) {
        assert_eq!(record.id, "1");
        assert_eq!(record.name, before.name);
        assert_eq!(record.email, before.email);
        assert_eq!(record.category, before.category);
        assert!(Status::ALL.contains(&record.status));
        assert!(allowed_content.contains(&record.content));
    }

    let after = service.list(&ListQuery::default()).unwrap();
    assert_eq!(after.pagination.count, 8);
}

#[test]
fn status_update_keeps_content_written_by_another_thread() {
    let service = Arc::new(seeded());

    let writer = {
        let service = Arc::clone(&service);
        thread::spawn(move || {
            service
                .update("2", UpdateFeedback::new().content(content_for(0)))
                .unwrap()
        })
    };
    let closer = {
        let service = Arc::clone(&service);
        thread::spawn(move || {
            service
                .update("2", UpdateFeedback::new().status("Closed"))
                .unwrap()
        })
    };
    writer.join().unwrap();
    closer.join().unwrap();

    let record = service.get("2").unwrap();
    assert_eq!(record.content, content_for(0));
    assert_eq!(record.status, Status::Closed);
}
