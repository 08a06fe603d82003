use gloo::net::http::{Request, Response};
use shared::{ApiMessage, Book, BookDraft, BookStatus, FieldError, ValidationErrors};
use std::fmt;

/// Error returned by any backend call.
///
/// The backend answers failures with one of two body shapes: a list of
/// per-field validation errors, or a single message (either a bare string
/// or a `{"message": ...}` object). Transport failures become `Network`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    Message(String),
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "Validation failed ({} fields)", errors.len()),
            ApiError::Message(message) => f.write_str(message),
            ApiError::Network(details) => write!(f, "Network error: {}", details),
        }
    }
}

impl std::error::Error for ApiError {}

/// API client for the book-catalog backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the same origin the app is served from
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// List all books
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/api/books", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Book>>().await {
                        Ok(books) => Ok(books),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse book list: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Search books by author. Spaces become `+` in the path; the backend
    /// decodes them back.
    pub async fn search_by_author(&self, author: &str) -> Result<Vec<Book>, ApiError> {
        let author = author.replace(' ', "+");
        let url = format!("{}/api/books/search/author/{}", self.base_url, author);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Book>>().await {
                        Ok(books) => Ok(books),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse search results: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Search books with a publication year inside the given range. The
    /// bounds are relayed as typed; the backend validates them.
    pub async fn search_by_year_range(&self, start: &str, end: &str) -> Result<Vec<Book>, ApiError> {
        let url = format!(
            "{}/api/books/search/publicationYear/range/{}/{}",
            self.base_url, start, end
        );

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Book>>().await {
                        Ok(books) => Ok(books),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse search results: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Add a new book
    pub async fn add_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let url = format!("{}/api/books", self.base_url);

        match Request::post(&url)
            .json(draft)
            .map_err(|e| ApiError::Message(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Book>().await {
                        Ok(book) => Ok(book),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse response: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Fetch a single book by isbn
    pub async fn get_book(&self, isbn: &str) -> Result<Book, ApiError> {
        let url = format!("{}/api/books/{}", self.base_url, isbn);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Book>().await {
                        Ok(book) => Ok(book),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse response: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Replace the book stored under the given isbn
    pub async fn update_book(&self, isbn: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        let url = format!("{}/api/books/{}", self.base_url, isbn);

        match Request::put(&url)
            .json(draft)
            .map_err(|e| ApiError::Message(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Book>().await {
                        Ok(book) => Ok(book),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse response: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Move a book to the given lending status (borrow/return)
    pub async fn update_status(&self, isbn: &str, status: BookStatus) -> Result<Book, ApiError> {
        let url = format!("{}/api/books/{}/updateStatus/{}", self.base_url, isbn, status);

        match Request::put(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Book>().await {
                        Ok(book) => Ok(book),
                        Err(e) => Err(ApiError::Message(format!("Failed to parse response: {}", e))),
                    }
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Delete the book stored under the given isbn
    pub async fn delete_book(&self, isbn: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/books/{}", self.base_url, isbn);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(decode_error(response).await)
                }
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a non-2xx response into the matching `ApiError` variant
async fn decode_error(response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error_from_body(&body)
}

/// Map an error body to its `ApiError` variant. Tries the field-validation
/// shape first, then the message object, and falls back to the raw text.
fn error_from_body(body: &str) -> ApiError {
    if let Ok(validation) = serde_json::from_str::<ValidationErrors>(body) {
        return ApiError::Validation(validation.errors);
    }
    if let Ok(wrapped) = serde_json::from_str::<ApiMessage>(body) {
        return ApiError::Message(wrapped.message);
    }
    ApiError::Message(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_maps_to_field_errors() {
        let body = r#"{"errors":[{"field":"isbn","defaultMessage":"ISBN is required"}]}"#;
        match error_from_body(body) {
            ApiError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "isbn");
                assert_eq!(errors[0].default_message, "ISBN is required");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_message_object_body_unwraps_message() {
        let body = r#"{"message":"getByIsbn.isbn: ISBN must be 10 or 13 digits long"}"#;
        assert_eq!(
            error_from_body(body),
            ApiError::Message("getByIsbn.isbn: ISBN must be 10 or 13 digits long".to_string())
        );
    }

    #[test]
    fn test_plain_text_body_passes_through() {
        assert_eq!(
            error_from_body("Could not find book 123"),
            ApiError::Message("Could not find book 123".to_string())
        );
    }

    #[test]
    fn test_message_error_displays_bare_text() {
        let err = ApiError::Message("Could not find book 123".to_string());
        assert_eq!(err.to_string(), "Could not find book 123");
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
