pub mod add_book_form;
pub mod edit_book_form;

pub use add_book_form::AddBookForm;
pub use edit_book_form::EditBookForm;
