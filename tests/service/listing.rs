//! List behaviour: filters, sorting, pagination metadata.

use feedback_board::{ListParams, ListQuery, Pagination, SortDirection, SortKey, Status};

use crate::support::{ids, seeded};

fn params(pairs: &[(&str, &str)]) -> ListQuery {
    ListQuery::from(ListParams::from_pairs(pairs.iter().copied()))
}

#[test]
fn pending_filter_keeps_insertion_order() {
    let page = seeded().list(&params(&[("status", "Pending")])).unwrap();
    assert_eq!(ids(&page.feedback), ["1", "2", "7", "8"]);
    assert_eq!(page.pagination.count, 4);
}

#[test]
fn search_matches_name_email_or_content() {
    let page = seeded().list(&params(&[("search", "csv")])).unwrap();
    assert!(!page.feedback.is_empty());
    for record in &page.feedback {
        let haystack = format!("{} {} {}", record.name, record.email, record.content)
            .to_lowercase();
        assert!(haystack.contains("csv"), "{} does not match", record.id);
    }
    assert_eq!(page.pagination.count, 6);

    let page = seeded().list(&params(&[("search", "IVANOV")])).unwrap();
    assert_eq!(ids(&page.feedback), ["1"]);
}

#[test]
fn second_page_of_three() {
    let page = seeded()
        .list(&params(&[("limit", "3"), ("page", "2")]))
        .unwrap();
    assert_eq!(ids(&page.feedback), ["4", "5", "6"]);
    assert_eq!(
        page.pagination,
        Pagination {
            current: 2,
            total: 3,
            count: 8
        }
    );
}

#[test]
fn invalid_filter_values_are_ignored() {
    let page = seeded()
        .list(&params(&[("category", "Nope"), ("status", "closed")]))
        .unwrap();
    assert_eq!(page.pagination.count, 8);
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let page = seeded()
        .list(&params(&[("page", "first"), ("limit", "lots")]))
        .unwrap();
    assert_eq!(page.feedback.len(), 8);
    assert_eq!(
        page.pagination,
        Pagination {
            current: 1,
            total: 1,
            count: 8
        }
    );
}

#[test]
fn category_and_status_combine() {
    let page = seeded()
        .list(&params(&[("category", "Request"), ("status", "Resolved")]))
        .unwrap();
    assert_eq!(ids(&page.feedback), ["3", "4", "5"]);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let page = seeded()
        .list(&params(&[("page", "5"), ("limit", "4")]))
        .unwrap();
    assert!(page.feedback.is_empty());
    assert_eq!(page.pagination.total, 2);
}

#[test]
fn sort_by_name_descending() {
    let page = seeded()
        .list(&params(&[("sort", "name"), ("order", "desc"), ("limit", "2")]))
        .unwrap();
    let names: Vec<&str> = page.feedback.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Petya Petrova", "John Doe"]);
}

#[test]
fn builder_query_matches_params() {
    let built = ListQuery::default()
        .status(Status::Pending)
        .sort_by(SortKey::Name, SortDirection::Asc);
    let parsed = params(&[("status", "Pending"), ("sort", "name")]);
    assert_eq!(built, parsed);

    let page = seeded().list(&built).unwrap();
    assert_eq!(ids(&page.feedback), ["8", "7", "2", "1"]);
}

#[test]
fn list_reflects_mutations() {
    let service = seeded();
    service.delete("1").unwrap();
    service
        .update("3", feedback_board::UpdateFeedback::new().status("Pending"))
        .unwrap();

    let page = service.list(&params(&[("status", "Pending")])).unwrap();
    assert_eq!(ids(&page.feedback), ["2", "3", "7", "8"]);
}
