use shared::{Book, BookDraft, BookStatus, FieldError};
use std::collections::HashMap;

/// How long the success popup stays visible before fading out
pub const SUCCESS_POPUP_MS: u32 = 2_000;

/// Per-field error messages keyed by the backend's field names
/// ("isbn", "title", "author", "publicationYear", "bookStatus")
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a backend validation response
    pub fn from_errors(errors: &[FieldError]) -> Self {
        Self(
            errors
                .iter()
                .map(|e| (e.field.clone(), e.default_message.clone()))
                .collect(),
        )
    }

    /// A single error tied to one field
    pub fn single(field: &str, message: String) -> Self {
        let mut map = HashMap::new();
        map.insert(field.to_string(), message);
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The four text inputs shared by the add and edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFormFields {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: String,
}

impl BookFormFields {
    /// Populate the fields from a fetched record
    pub fn from_book(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book.publication_year.to_string(),
        }
    }

    /// Payload for an add call; new books always start AVAILABLE
    pub fn add_draft(&self) -> BookDraft {
        self.draft(BookStatus::Available)
    }

    /// Payload for an update call, carrying the status currently shown in
    /// the edit form
    pub fn update_draft(&self, displayed_status: BookStatus) -> BookDraft {
        self.draft(displayed_status)
    }

    fn draft(&self, status: BookStatus) -> BookDraft {
        BookDraft {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            publication_year: self.publication_year.clone(),
            book_status: status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> BookFormFields {
        BookFormFields {
            isbn: "123".to_string(),
            title: "Foo".to_string(),
            author: "Bar".to_string(),
            publication_year: "2020".to_string(),
        }
    }

    #[test]
    fn test_add_draft_defaults_to_available() {
        let draft = filled_fields().add_draft();
        assert_eq!(draft.book_status, BookStatus::Available);
        assert_eq!(draft.publication_year, "2020");
    }

    #[test]
    fn test_update_draft_carries_displayed_status() {
        let draft = filled_fields().update_draft(BookStatus::Borrowed);
        assert_eq!(draft.book_status, BookStatus::Borrowed);
        assert_eq!(draft.isbn, "123");
    }

    #[test]
    fn test_fields_from_book() {
        let book = Book {
            isbn: "978-0-13-468599-1".to_string(),
            title: "Foo".to_string(),
            author: "Bar".to_string(),
            publication_year: 2020,
            book_status: BookStatus::Borrowed,
        };
        let fields = BookFormFields::from_book(&book);
        assert_eq!(fields.isbn, "978-0-13-468599-1");
        assert_eq!(fields.publication_year, "2020");
    }

    #[test]
    fn test_field_errors_from_validation_response() {
        let errors = vec![
            FieldError {
                field: "title".to_string(),
                default_message: "Title is required".to_string(),
            },
            FieldError {
                field: "publicationYear".to_string(),
                default_message: "Publication Year is required".to_string(),
            },
        ];
        let field_errors = FieldErrors::from_errors(&errors);
        assert_eq!(field_errors.get("title"), Some("Title is required"));
        assert_eq!(
            field_errors.get("publicationYear"),
            Some("Publication Year is required")
        );
        assert_eq!(field_errors.get("isbn"), None);
    }

    #[test]
    fn test_field_errors_single_and_clear() {
        let errors = FieldErrors::single("isbn", "Could not find book 123".to_string());
        assert_eq!(errors.get("isbn"), Some("Could not find book 123"));
        assert!(!errors.is_empty());
        assert!(FieldErrors::new().is_empty());
    }
}
