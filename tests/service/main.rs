//! CRUD service integration tests, run against the seeded in-memory store.

mod listing;
mod concurrency;
