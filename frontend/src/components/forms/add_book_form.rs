use crate::state::{BookFormFields, FieldErrors};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddBookFormProps {
    // Form state
    pub fields: BookFormFields,
    pub field_errors: FieldErrors,
    pub form_error: Option<String>,
    pub saving: bool,

    // Event handlers
    pub on_isbn_change: Callback<Event>,
    pub on_title_change: Callback<Event>,
    pub on_author_change: Callback<Event>,
    pub on_year_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <div class="book-input-error">{message}</div> },
        None => html! {},
    }
}

/// Form for registering a new book. Validation happens on the backend;
/// this form only relays field values and renders the errors that come back.
#[function_component(AddBookForm)]
pub fn add_book_form(props: &AddBookFormProps) -> Html {
    html! {
        <section class="add-book-section">
            <h2>{"Add Book"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="add-book-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="add-isbn">{"ISBN"}</label>
                    <input
                        type="text"
                        id="add-isbn"
                        placeholder="978-0-13-468599-1"
                        value={props.fields.isbn.clone()}
                        onchange={props.on_isbn_change.clone()}
                        disabled={props.saving}
                    />
                    {field_error(&props.field_errors, "isbn")}
                </div>

                <div class="form-group">
                    <label for="add-title">{"Title"}</label>
                    <input
                        type="text"
                        id="add-title"
                        value={props.fields.title.clone()}
                        onchange={props.on_title_change.clone()}
                        disabled={props.saving}
                    />
                    {field_error(&props.field_errors, "title")}
                </div>

                <div class="form-group">
                    <label for="add-author">{"Author"}</label>
                    <input
                        type="text"
                        id="add-author"
                        value={props.fields.author.clone()}
                        onchange={props.on_author_change.clone()}
                        disabled={props.saving}
                    />
                    {field_error(&props.field_errors, "author")}
                </div>

                <div class="form-group">
                    <label for="add-publicationYear">{"Publication Year"}</label>
                    <input
                        type="number"
                        id="add-publicationYear"
                        placeholder="2020"
                        value={props.fields.publication_year.clone()}
                        onchange={props.on_year_change.clone()}
                        disabled={props.saving}
                    />
                    {field_error(&props.field_errors, "publicationYear")}
                </div>

                <button
                    type="submit"
                    class="btn btn-primary add-book-btn"
                    disabled={props.saving}
                >
                    {if props.saving { "Adding Book..." } else { "Add Book" }}
                </button>
            </form>
        </section>
    }
}
