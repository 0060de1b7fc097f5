pub mod app;
pub mod get_python_books;
