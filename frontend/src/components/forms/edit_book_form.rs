use crate::state::{BookFormFields, FieldErrors};
use shared::BookStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditBookFormProps {
    // Form state
    pub fields: BookFormFields,
    pub field_errors: FieldErrors,
    /// Status of the fetched record; `None` until a book has been found
    pub displayed_status: Option<BookStatus>,
    /// Whether Update/Delete/Borrow-Return are usable (a record is loaded)
    pub buttons_enabled: bool,
    pub busy: bool,

    // Event handlers
    pub on_isbn_change: Callback<Event>,
    pub on_title_change: Callback<Event>,
    pub on_author_change: Callback<Event>,
    pub on_year_change: Callback<Event>,
    pub on_find: Callback<()>,
    pub on_update: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_borrow: Callback<()>,
    pub on_return: Callback<()>,
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <div class="book-input-error">{message}</div> },
        None => html! {},
    }
}

/// Edit form: find a book by isbn, then update, delete, or toggle its
/// lending status. The action buttons stay disabled until a find succeeds.
#[function_component(EditBookForm)]
pub fn edit_book_form(props: &EditBookFormProps) -> Html {
    let edit_disabled = props.busy || !props.buttons_enabled;

    let on_find = {
        let on_find = props.on_find.clone();
        Callback::from(move |_: MouseEvent| on_find.emit(()))
    };
    let on_update = {
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| on_update.emit(()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(()))
    };
    // AVAILABLE books get a Borrow button, everything else a Return button
    let on_toggle_status = {
        let on_borrow = props.on_borrow.clone();
        let on_return = props.on_return.clone();
        let displayed_status = props.displayed_status;
        Callback::from(move |_: MouseEvent| match displayed_status {
            Some(BookStatus::Available) | None => on_borrow.emit(()),
            Some(BookStatus::Borrowed) => on_return.emit(()),
        })
    };

    let status_text = props
        .displayed_status
        .map(|status| status.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let status_label = props
        .displayed_status
        .unwrap_or(BookStatus::Available)
        .action_label();

    html! {
        <section class="edit-book-section">
            <h2>{"Edit Book"}</h2>

            <div class="form-group">
                <label for="edit-isbn">{"ISBN"}</label>
                <input
                    type="text"
                    id="edit-isbn"
                    placeholder="978-0-13-468599-1"
                    value={props.fields.isbn.clone()}
                    onchange={props.on_isbn_change.clone()}
                    disabled={props.busy}
                />
                {field_error(&props.field_errors, "isbn")}
            </div>

            <button
                class="btn find-book-btn"
                id="find-book-button"
                onclick={on_find}
                disabled={props.busy}
            >
                {"Find Book"}
            </button>

            <div class="form-group">
                <label for="edit-title">{"Title"}</label>
                <input
                    type="text"
                    id="edit-title"
                    value={props.fields.title.clone()}
                    onchange={props.on_title_change.clone()}
                    disabled={props.busy}
                />
                {field_error(&props.field_errors, "title")}
            </div>

            <div class="form-group">
                <label for="edit-author">{"Author"}</label>
                <input
                    type="text"
                    id="edit-author"
                    value={props.fields.author.clone()}
                    onchange={props.on_author_change.clone()}
                    disabled={props.busy}
                />
                {field_error(&props.field_errors, "author")}
            </div>

            <div class="form-group">
                <label for="edit-publicationYear">{"Publication Year"}</label>
                <input
                    type="number"
                    id="edit-publicationYear"
                    value={props.fields.publication_year.clone()}
                    onchange={props.on_year_change.clone()}
                    disabled={props.busy}
                />
                {field_error(&props.field_errors, "publicationYear")}
            </div>

            <div class="form-group">
                <span class="status-label">{"Status: "}</span>
                <span class="book-status" id="edit-bookStatus">{status_text}</span>
                {field_error(&props.field_errors, "bookStatus")}
            </div>

            <div class="edit-buttons">
                <button
                    class="btn update-book-btn"
                    id="update-book-button"
                    onclick={on_update}
                    disabled={edit_disabled}
                >
                    {"Update Book"}
                </button>
                <button
                    class="btn delete-book-btn"
                    id="delete-book-button"
                    onclick={on_delete}
                    disabled={edit_disabled}
                >
                    {"Delete Book"}
                </button>
                <button
                    class="btn update-status-btn"
                    id="update-status-button"
                    onclick={on_toggle_status}
                    disabled={edit_disabled}
                >
                    {status_label}
                </button>
            </div>
        </section>
    }
}
