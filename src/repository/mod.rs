//! Repository layer for database operations
//!
//! Each repository is a collection of parameterized statements built on the
//! gateway. Methods take the executor explicitly: hand them the pool for a
//! standalone statement, or a transaction's connection handle to make the
//! statement join that unit of work.

pub mod books;
pub mod loans;
pub mod members;
pub mod users;

use sqlx::PgPool;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: PgPool,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub loans: loans::LoansRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            books: books::BooksRepository::new(),
            members: members::MembersRepository::new(),
            loans: loans::LoansRepository::new(),
            users: users::UsersRepository::new(),
            pool,
        }
    }
}
