mod components;
mod services;
mod state;

use components::{AddBookForm, BookTable, EditBookForm, PopupAlert, SearchPanel};
use gloo::timers::future::TimeoutFuture;
use services::api::{ApiClient, ApiError};
use services::logging::Logger;
use shared::{rewrite_path_marker, Book, BookStatus};
use state::{BookFormFields, FieldErrors, SUCCESS_POPUP_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

// Backend handler markers that show up in isbn path-variable error messages
const FIND_MARKER: &str = "getByIsbn.isbn:";
const UPDATE_MARKER: &str = "updateBook.isbn:";
const DELETE_MARKER: &str = "deleteBookByIsbn.isbn:";
const STATUS_MARKER: &str = "updateBookStatus.isbn:";

/// Change handler writing one input's value into a form-fields state struct
fn on_field_change(
    fields: UseStateHandle<BookFormFields>,
    apply: fn(&mut BookFormFields, String),
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*fields).clone();
        apply(&mut next, input.value());
        fields.set(next);
    })
}

/// Change handler for a standalone string input
fn on_value_change(value: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        value.set(input.value());
    })
}

#[function_component(App)]
fn app() -> Html {
    let api = ApiClient::new();

    // Book list
    let books = use_state(Vec::<Book>::new);
    let loading = use_state(|| true);

    // Add form
    let add_fields = use_state(BookFormFields::default);
    let add_errors = use_state(FieldErrors::new);
    let add_form_error = use_state(|| Option::<String>::None);
    let adding = use_state(|| false);

    // Edit form
    let edit_fields = use_state(BookFormFields::default);
    let edit_errors = use_state(FieldErrors::new);
    let edit_status = use_state(|| Option::<BookStatus>::None);
    let edit_enabled = use_state(|| false);
    let editing = use_state(|| false);

    // Search panel
    let author_query = use_state(String::new);
    let year_start = use_state(String::new);
    let year_end = use_state(String::new);
    let search_error = use_state(|| Option::<String>::None);
    let searching = use_state(|| false);

    // Success popup
    let popup = use_state(|| Option::<String>::None);

    let show_popup = {
        let popup = popup.clone();
        Callback::from(move |message: String| {
            popup.set(Some(message));
            // Auto-hide after the fixed popup duration
            let popup = popup.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUCCESS_POPUP_MS).await;
                popup.set(None);
            });
        })
    };

    // Resets the edit form: fields empty, status back to N/A, buttons disabled
    let clear_edit_form = {
        let edit_fields = edit_fields.clone();
        let edit_status = edit_status.clone();
        let edit_enabled = edit_enabled.clone();
        Callback::from(move |_| {
            edit_fields.set(BookFormFields::default());
            edit_status.set(None);
            edit_enabled.set(false);
        })
    };

    // List all books and rebuild the table
    let list_books = {
        let api = api.clone();
        let books = books.clone();
        let loading = loading.clone();
        let search_error = search_error.clone();
        let searching = searching.clone();
        let show_popup = show_popup.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let books = books.clone();
            let loading = loading.clone();
            let search_error = search_error.clone();
            let searching = searching.clone();
            let show_popup = show_popup.clone();

            spawn_local(async move {
                search_error.set(None);
                searching.set(true);
                loading.set(true);

                match api.list_books().await {
                    Ok(list) => {
                        books.set(list);
                        show_popup.emit("Books Loaded".to_string());
                    }
                    Err(err) => {
                        Logger::error_with_component("book_list", &err.to_string());
                        search_error.set(Some(err.to_string()));
                    }
                }

                loading.set(false);
                searching.set(false);
            });
        })
    };

    // Search books by author and rebuild the table
    let search_by_author = {
        let api = api.clone();
        let books = books.clone();
        let loading = loading.clone();
        let author_query = author_query.clone();
        let search_error = search_error.clone();
        let searching = searching.clone();
        let show_popup = show_popup.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let books = books.clone();
            let loading = loading.clone();
            let author = (*author_query).clone();
            let search_error = search_error.clone();
            let searching = searching.clone();
            let show_popup = show_popup.clone();

            spawn_local(async move {
                search_error.set(None);
                searching.set(true);
                loading.set(true);

                match api.search_by_author(&author).await {
                    Ok(list) => {
                        books.set(list);
                        show_popup.emit("Search Complete".to_string());
                    }
                    Err(err) => {
                        Logger::error_with_component("book_search", &err.to_string());
                        search_error.set(Some(err.to_string()));
                    }
                }

                loading.set(false);
                searching.set(false);
            });
        })
    };

    // Search books within a publication-year range and rebuild the table
    let search_by_years = {
        let api = api.clone();
        let books = books.clone();
        let loading = loading.clone();
        let year_start = year_start.clone();
        let year_end = year_end.clone();
        let search_error = search_error.clone();
        let searching = searching.clone();
        let show_popup = show_popup.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let books = books.clone();
            let loading = loading.clone();
            let start = (*year_start).clone();
            let end = (*year_end).clone();
            let search_error = search_error.clone();
            let searching = searching.clone();
            let show_popup = show_popup.clone();

            spawn_local(async move {
                search_error.set(None);
                searching.set(true);
                loading.set(true);

                match api.search_by_year_range(&start, &end).await {
                    Ok(list) => {
                        books.set(list);
                        show_popup.emit("Search Complete".to_string());
                    }
                    Err(err) => {
                        Logger::warn_with_component("book_search", &err.to_string());
                        search_error.set(Some(err.to_string()));
                    }
                }

                loading.set(false);
                searching.set(false);
            });
        })
    };

    // Add a new book; new books always start AVAILABLE
    let add_book = {
        let api = api.clone();
        let add_fields = add_fields.clone();
        let add_errors = add_errors.clone();
        let add_form_error = add_form_error.clone();
        let adding = adding.clone();
        let show_popup = show_popup.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let add_fields = add_fields.clone();
            let add_errors = add_errors.clone();
            let add_form_error = add_form_error.clone();
            let adding = adding.clone();
            let show_popup = show_popup.clone();

            spawn_local(async move {
                add_errors.set(FieldErrors::new());
                add_form_error.set(None);
                adding.set(true);

                match api.add_book(&add_fields.add_draft()).await {
                    Ok(_) => {
                        add_fields.set(BookFormFields::default());
                        show_popup.emit("Book Added".to_string());
                    }
                    Err(ApiError::Validation(errors)) => {
                        add_errors.set(FieldErrors::from_errors(&errors));
                    }
                    Err(err) => {
                        add_form_error.set(Some(err.to_string()));
                    }
                }

                adding.set(false);
            });
        })
    };

    // Fetch a book by isbn into the edit form and enable the edit buttons
    let find_book = {
        let api = api.clone();
        let edit_fields = edit_fields.clone();
        let edit_errors = edit_errors.clone();
        let edit_status = edit_status.clone();
        let edit_enabled = edit_enabled.clone();
        let editing = editing.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let edit_fields = edit_fields.clone();
            let edit_errors = edit_errors.clone();
            let edit_status = edit_status.clone();
            let edit_enabled = edit_enabled.clone();
            let editing = editing.clone();

            spawn_local(async move {
                edit_errors.set(FieldErrors::new());
                editing.set(true);

                let isbn = edit_fields.isbn.clone();
                match api.get_book(&isbn).await {
                    Ok(book) => {
                        edit_fields.set(BookFormFields::from_book(&book));
                        edit_status.set(Some(book.book_status));
                        edit_enabled.set(true);
                    }
                    Err(err) => {
                        edit_errors.set(FieldErrors::single(
                            "isbn",
                            rewrite_path_marker(&err.to_string(), FIND_MARKER),
                        ));
                        edit_enabled.set(false);
                    }
                }

                editing.set(false);
            });
        })
    };

    // Overwrite the record under the isbn with the current edit fields
    let update_book = {
        let api = api.clone();
        let edit_fields = edit_fields.clone();
        let edit_errors = edit_errors.clone();
        let edit_status = edit_status.clone();
        let edit_enabled = edit_enabled.clone();
        let editing = editing.clone();
        let show_popup = show_popup.clone();
        let clear_edit_form = clear_edit_form.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let edit_fields = edit_fields.clone();
            let edit_errors = edit_errors.clone();
            let edit_status = edit_status.clone();
            let edit_enabled = edit_enabled.clone();
            let editing = editing.clone();
            let show_popup = show_popup.clone();
            let clear_edit_form = clear_edit_form.clone();

            spawn_local(async move {
                edit_errors.set(FieldErrors::new());
                editing.set(true);

                let isbn = edit_fields.isbn.clone();
                let displayed = (*edit_status).unwrap_or(BookStatus::Available);
                let draft = edit_fields.update_draft(displayed);
                match api.update_book(&isbn, &draft).await {
                    Ok(_) => {
                        show_popup.emit("Book Updated".to_string());
                        clear_edit_form.emit(());
                    }
                    Err(ApiError::Validation(errors)) => {
                        edit_errors.set(FieldErrors::from_errors(&errors));
                    }
                    Err(err) => {
                        edit_errors.set(FieldErrors::single(
                            "isbn",
                            rewrite_path_marker(&err.to_string(), UPDATE_MARKER),
                        ));
                        edit_enabled.set(false);
                    }
                }

                editing.set(false);
            });
        })
    };

    // Delete the record under the isbn
    let delete_book = {
        let api = api.clone();
        let edit_fields = edit_fields.clone();
        let edit_errors = edit_errors.clone();
        let edit_enabled = edit_enabled.clone();
        let editing = editing.clone();
        let show_popup = show_popup.clone();
        let clear_edit_form = clear_edit_form.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let edit_fields = edit_fields.clone();
            let edit_errors = edit_errors.clone();
            let edit_enabled = edit_enabled.clone();
            let editing = editing.clone();
            let show_popup = show_popup.clone();
            let clear_edit_form = clear_edit_form.clone();

            spawn_local(async move {
                edit_errors.set(FieldErrors::new());
                editing.set(true);

                let isbn = edit_fields.isbn.clone();
                match api.delete_book(&isbn).await {
                    Ok(()) => {
                        show_popup.emit("Book Deleted".to_string());
                        clear_edit_form.emit(());
                    }
                    Err(err) => {
                        edit_errors.set(FieldErrors::single(
                            "isbn",
                            rewrite_path_marker(&err.to_string(), DELETE_MARKER),
                        ));
                        edit_enabled.set(false);
                    }
                }

                editing.set(false);
            });
        })
    };

    // General status change; borrow/return below fix the target status
    let set_status = {
        let api = api.clone();
        let edit_fields = edit_fields.clone();
        let edit_errors = edit_errors.clone();
        let edit_enabled = edit_enabled.clone();
        let editing = editing.clone();
        let show_popup = show_popup.clone();
        let clear_edit_form = clear_edit_form.clone();

        Callback::from(move |status: BookStatus| {
            let api = api.clone();
            let edit_fields = edit_fields.clone();
            let edit_errors = edit_errors.clone();
            let edit_enabled = edit_enabled.clone();
            let editing = editing.clone();
            let show_popup = show_popup.clone();
            let clear_edit_form = clear_edit_form.clone();

            spawn_local(async move {
                edit_errors.set(FieldErrors::new());
                editing.set(true);

                let isbn = edit_fields.isbn.clone();
                match api.update_status(&isbn, status).await {
                    Ok(_) => {
                        show_popup.emit(format!("Book {}", status));
                        clear_edit_form.emit(());
                    }
                    Err(err) => {
                        edit_errors.set(FieldErrors::single(
                            "isbn",
                            rewrite_path_marker(&err.to_string(), STATUS_MARKER),
                        ));
                        edit_enabled.set(false);
                    }
                }

                editing.set(false);
            });
        })
    };

    let borrow_book = {
        let set_status = set_status.clone();
        Callback::from(move |_| set_status.emit(BookStatus::Borrowed))
    };
    let return_book = {
        let set_status = set_status.clone();
        Callback::from(move |_| set_status.emit(BookStatus::Available))
    };

    // Load the catalog once on mount
    use_effect_with((), {
        let list_books = list_books.clone();
        move |_| {
            Logger::info_with_component("app", "Loading book catalog");
            list_books.emit(());
            || ()
        }
    });

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Library Book Catalog"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <AddBookForm
                        fields={(*add_fields).clone()}
                        field_errors={(*add_errors).clone()}
                        form_error={(*add_form_error).clone()}
                        saving={*adding}
                        on_isbn_change={on_field_change(add_fields.clone(), |f, v| f.isbn = v)}
                        on_title_change={on_field_change(add_fields.clone(), |f, v| f.title = v)}
                        on_author_change={on_field_change(add_fields.clone(), |f, v| f.author = v)}
                        on_year_change={on_field_change(add_fields.clone(), |f, v| f.publication_year = v)}
                        on_submit={add_book}
                    />

                    <EditBookForm
                        fields={(*edit_fields).clone()}
                        field_errors={(*edit_errors).clone()}
                        displayed_status={*edit_status}
                        buttons_enabled={*edit_enabled}
                        busy={*editing}
                        on_isbn_change={on_field_change(edit_fields.clone(), |f, v| f.isbn = v)}
                        on_title_change={on_field_change(edit_fields.clone(), |f, v| f.title = v)}
                        on_author_change={on_field_change(edit_fields.clone(), |f, v| f.author = v)}
                        on_year_change={on_field_change(edit_fields.clone(), |f, v| f.publication_year = v)}
                        on_find={find_book}
                        on_update={update_book}
                        on_delete={delete_book}
                        on_borrow={borrow_book}
                        on_return={return_book}
                    />

                    <SearchPanel
                        author={(*author_query).clone()}
                        year_start={(*year_start).clone()}
                        year_end={(*year_end).clone()}
                        searching={*searching}
                        search_error={(*search_error).clone()}
                        on_author_change={on_value_change(author_query.clone())}
                        on_year_start_change={on_value_change(year_start.clone())}
                        on_year_end_change={on_value_change(year_end.clone())}
                        on_search_author={search_by_author}
                        on_search_years={search_by_years}
                        on_list_all={list_books}
                    />

                    <BookTable books={(*books).clone()} loading={*loading} />
                </div>
            </main>

            <PopupAlert message={(*popup).clone()} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
