use shared::Book;
use yew::prelude::*;

/// Fixed header row of the results table
pub fn header_cells() -> [&'static str; 5] {
    ["ISBN", "Title", "Author", "Publication Year", "Status"]
}

/// Cell text for one book row, in column order
pub fn row_cells(book: &Book) -> [String; 5] {
    [
        book.isbn.clone(),
        book.title.clone(),
        book.author.clone(),
        book.publication_year.to_string(),
        book.book_status.to_string(),
    ]
}

#[derive(Properties, PartialEq)]
pub struct BookTableProps {
    pub books: Vec<Book>,
    pub loading: bool,
}

/// Results table, rebuilt from scratch on every render: the header row
/// followed by one row per record in input order.
#[function_component(BookTable)]
pub fn book_table(props: &BookTableProps) -> Html {
    html! {
        <section class="book-list-section">
            <h2>{"Books"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading books..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="book-list">
                            <thead>
                                <tr class="book-list-row book-list-title-row">
                                    {for header_cells().iter().map(|title| {
                                        html! { <th class="book-list-column book-list-title-column">{*title}</th> }
                                    })}
                                </tr>
                            </thead>
                            <tbody>
                                {for props.books.iter().map(|book| {
                                    html! {
                                        <tr class="book-list-row">
                                            {for row_cells(book).iter().map(|cell| {
                                                html! { <td class="book-list-column">{cell}</td> }
                                            })}
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BookStatus;

    #[test]
    fn test_header_matches_fixed_columns() {
        assert_eq!(
            header_cells(),
            ["ISBN", "Title", "Author", "Publication Year", "Status"]
        );
    }

    #[test]
    fn test_row_cells_in_column_order() {
        let book = Book {
            isbn: "123".to_string(),
            title: "Foo".to_string(),
            author: "Bar".to_string(),
            publication_year: 2020,
            book_status: BookStatus::Borrowed,
        };
        assert_eq!(row_cells(&book), ["123", "Foo", "Bar", "2020", "BORROWED"]);
    }

    #[test]
    fn test_empty_list_renders_no_body_rows() {
        let books: Vec<Book> = Vec::new();
        let rows: Vec<[String; 5]> = books.iter().map(row_cells).collect();
        assert!(rows.is_empty());
    }
}
