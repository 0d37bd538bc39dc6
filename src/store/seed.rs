use crate::feedback::{Category, Feedback, Status};

const CSV_REQUEST: &str = "Can you add support for exporting data to CSV?";

/// The eight sample records the board starts with.
pub fn sample_records() -> Vec<Feedback> {
    let rows: [(&str, &str, &str, Category, Status); 8] = [
        (
            "Ivan Ivanov",
            "ivan.ivanov@example.com",
            "The application crashes. Please fix this.",
            Category::Bug,
            Status::Pending,
        ),
        (
            "Georgi Georgiev",
            "georgi.georgiev@example.com",
            "Can you add a dark mode feature?",
            Category::Feature,
            Status::Pending,
        ),
        (
            "Petya Petrova",
            "petya.petrova@example.com",
            CSV_REQUEST,
            Category::Request,
            Status::Resolved,
        ),
        (
            "John Doe",
            "john.doe@example.com",
            CSV_REQUEST,
            Category::Request,
            Status::Resolved,
        ),
        (
            "Jane Doe",
            "jane.doe@example.com",
            CSV_REQUEST,
            Category::Request,
            Status::Resolved,
        ),
        (
            "Alice Smith",
            "alice.smith@example.com",
            CSV_REQUEST,
            Category::Request,
            Status::Closed,
        ),
        (
            "Brian Smith",
            "brian.smith@example.com",
            CSV_REQUEST,
            Category::Request,
            Status::Pending,
        ),
        (
            "Alex Hanson",
            "alex.hanson@example.com",
            CSV_REQUEST,
            Category::Request,
            Status::Pending,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, email, content, category, status))| Feedback {
            id: (i + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            content: content.to_string(),
            category,
            status,
        })
        .collect()
}
