//! Books repository for database operations

use sqlx::{Executor, FromRow, Postgres};

use crate::{
    db::gateway,
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BooksRepository;

impl BooksRepository {
    pub fn new() -> Self {
        Self
    }

    /// Get book by ID
    pub async fn find_by_id<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        id: i32,
    ) -> AppResult<Option<Book>> {
        gateway::query_one(
            db,
            "SELECT * FROM book WHERE id = $1",
            |q| q.bind(id),
            |row| Book::from_row(row),
        )
        .await
    }

    /// Get book by ID, locking the row until the enclosing transaction
    /// ends. Used by the loan workflow so concurrent borrowers of the same
    /// book serialize in the store.
    pub async fn find_by_id_for_update<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        id: i32,
    ) -> AppResult<Option<Book>> {
        gateway::query_one(
            db,
            "SELECT * FROM book WHERE id = $1 FOR UPDATE",
            |q| q.bind(id),
            |row| Book::from_row(row),
        )
        .await
    }

    /// Get book by catalog key
    pub async fn find_by_isbn<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        isbn: &str,
    ) -> AppResult<Option<Book>> {
        gateway::query_one(
            db,
            "SELECT * FROM book WHERE isbn = $1",
            |q| q.bind(isbn.to_string()),
            |row| Book::from_row(row),
        )
        .await
    }

    /// List all books
    pub async fn find_all<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
    ) -> AppResult<Vec<Book>> {
        gateway::query(db, "SELECT * FROM book ORDER BY title", |q| q, |row| Book::from_row(row)).await
    }

    /// Insert a new book, returning the generated id.
    pub async fn save<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        book: &NewBook,
    ) -> AppResult<i32> {
        gateway::insert_returning_id(
            db,
            "INSERT INTO book (isbn, title, author, stock) VALUES ($1, $2, $3, $4) RETURNING id",
            |q| {
                q.bind(book.isbn.clone())
                    .bind(book.title.clone())
                    .bind(book.author.clone())
                    .bind(book.stock)
            },
        )
        .await
    }

    /// Persist a new stock count. Zero affected rows is a failure: the
    /// workflow requires the book it just loaded to still be there.
    pub async fn update_stock<'e>(
        &self,
        db: impl Executor<'e, Database = Postgres>,
        book_id: i32,
        stock: i32,
    ) -> AppResult<()> {
        const SQL: &str = "UPDATE book SET stock = $1, updated_at = NOW() WHERE id = $2";
        let rows = gateway::execute(db, SQL, |q| q.bind(stock).bind(book_id)).await?;
        if rows == 0 {
            return Err(AppError::no_rows(
                SQL,
                &format!("stock update for book {} affected no rows", book_id),
            ));
        }
        Ok(())
    }
}
