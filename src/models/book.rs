//! Book model and stock helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book model from database
///
/// `stock` counts the physically available copies. It never goes negative:
/// the loan workflow is the only writer and decrements/increments by exactly
/// one per successful borrow/return.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// A book can be lent while at least one copy is in stock.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// New book to insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(stock: i32) -> Book {
        Book {
            id: 1,
            isbn: "978-0000000001".to_string(),
            title: "A Book".to_string(),
            author: "Someone".to_string(),
            stock,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn available_only_with_positive_stock() {
        assert!(book(1).is_available());
        assert!(book(5).is_available());
        assert!(!book(0).is_available());
    }
}
