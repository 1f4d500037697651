use chrono::{DateTime, Utc};

/// One page of a cursor-paginated feed
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }
}

/// Feed items that can be filtered against a cutoff
pub trait Published {
    fn published_at(&self) -> DateTime<Utc>;
}
