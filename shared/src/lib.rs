use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A book record as the backend stores and returns it.
///
/// Field names on the wire are camelCase to match the backend's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, primary key across all endpoints
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "publicationYear")]
    pub publication_year: i32,
    #[serde(rename = "bookStatus")]
    pub book_status: BookStatus,
}

/// Lending status of a book, governs which action button is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    /// The status a borrow/return action would move this book to
    pub fn toggled(&self) -> BookStatus {
        match self {
            BookStatus::Available => BookStatus::Borrowed,
            BookStatus::Borrowed => BookStatus::Available,
        }
    }

    /// Label for the status action button in the edit form
    pub fn action_label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Borrow Book",
            BookStatus::Borrowed => "Return Book",
        }
    }

    /// Wire/path representation, also used in success popups
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "AVAILABLE",
            BookStatus::Borrowed => "BORROWED",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = BookStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(BookStatus::Available),
            "BORROWED" => Ok(BookStatus::Borrowed),
            other => Err(BookStatusParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookStatusParseError(pub String);

impl fmt::Display for BookStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown book status '{}'", self.0)
    }
}

impl std::error::Error for BookStatusParseError {}

/// Request body for add/update calls.
///
/// The client relays form fields as the user typed them; in particular the
/// publication year stays a string and the backend coerces and validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "publicationYear")]
    pub publication_year: String,
    #[serde(rename = "bookStatus")]
    pub book_status: BookStatus,
}

/// One per-field validation failure from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Backend field name, e.g. "isbn" or "publicationYear"
    pub field: String,
    #[serde(rename = "defaultMessage")]
    pub default_message: String,
}

/// Error body carrying a list of per-field validation failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// Error body carrying a single message string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Rewrite a backend handler marker (e.g. "getByIsbn.isbn:") to " - " for
/// display. Messages without the marker pass through untouched, which also
/// covers the bare-string error bodies.
pub fn rewrite_path_marker(message: &str, marker: &str) -> String {
    message.replace(marker, " - ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            isbn: "978-0-13-468599-1".to_string(),
            title: "The Rust Programming Language".to_string(),
            author: "Steve Klabnik".to_string(),
            publication_year: 2019,
            book_status: BookStatus::Available,
        }
    }

    #[test]
    fn test_book_wire_field_names() {
        let json = serde_json::to_value(sample_book()).unwrap();
        assert_eq!(json["isbn"], "978-0-13-468599-1");
        assert_eq!(json["publicationYear"], 2019);
        assert_eq!(json["bookStatus"], "AVAILABLE");
    }

    #[test]
    fn test_book_deserializes_backend_response() {
        let body = r#"{
            "isbn": "123",
            "title": "Foo",
            "author": "Bar",
            "publicationYear": 2020,
            "bookStatus": "AVAILABLE"
        }"#;
        let book: Book = serde_json::from_str(body).unwrap();
        assert_eq!(book.isbn, "123");
        assert_eq!(book.book_status, BookStatus::Available);
    }

    #[test]
    fn test_draft_relays_year_as_typed() {
        let draft = BookDraft {
            isbn: "123".to_string(),
            title: "Foo".to_string(),
            author: "Bar".to_string(),
            publication_year: "2020".to_string(),
            book_status: BookStatus::Available,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["publicationYear"], "2020");
        assert_eq!(json["bookStatus"], "AVAILABLE");
    }

    #[test]
    fn test_status_toggle_round_trips() {
        assert_eq!(BookStatus::Available.toggled(), BookStatus::Borrowed);
        assert_eq!(BookStatus::Borrowed.toggled(), BookStatus::Available);
        assert_eq!(BookStatus::Available.toggled().toggled(), BookStatus::Available);
    }

    #[test]
    fn test_status_action_labels() {
        assert_eq!(BookStatus::Available.action_label(), "Borrow Book");
        assert_eq!(BookStatus::Borrowed.action_label(), "Return Book");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("AVAILABLE".parse::<BookStatus>().unwrap(), BookStatus::Available);
        assert_eq!("BORROWED".parse::<BookStatus>().unwrap(), BookStatus::Borrowed);
        assert!("available".parse::<BookStatus>().is_err());
        assert!("".parse::<BookStatus>().is_err());
    }

    #[test]
    fn test_validation_errors_deserialize() {
        let body = r#"{"errors":[
            {"field":"title","defaultMessage":"Title is required"},
            {"field":"publicationYear","defaultMessage":"Publication Year is required"}
        ]}"#;
        let parsed: ValidationErrors = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.errors[0].field, "title");
        assert_eq!(parsed.errors[1].default_message, "Publication Year is required");
    }

    #[test]
    fn test_rewrite_path_marker_strips_known_marker() {
        let rewritten = rewrite_path_marker(
            "getByIsbn.isbn: ISBN must be 10 or 13 digits long",
            "getByIsbn.isbn:",
        );
        assert_eq!(rewritten, " -  ISBN must be 10 or 13 digits long");
    }

    #[test]
    fn test_rewrite_path_marker_passes_bare_strings_through() {
        let rewritten = rewrite_path_marker("Could not find book 123", "deleteBookByIsbn.isbn:");
        assert_eq!(rewritten, "Could not find book 123");
    }
}
