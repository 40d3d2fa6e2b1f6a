mod client;
mod loader;

pub use client::{BookQuery, BooksClient, BooksClientError};
pub use loader::{LoaderError, load_books_from};
