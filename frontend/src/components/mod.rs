pub mod book_table;
pub mod forms;
pub mod popup_alert;
pub mod search_panel;

pub use book_table::BookTable;
pub use forms::{AddBookForm, EditBookForm};
pub use popup_alert::PopupAlert;
pub use search_panel::SearchPanel;
