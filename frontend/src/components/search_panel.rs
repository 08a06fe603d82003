use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    // Form state
    pub author: String,
    pub year_start: String,
    pub year_end: String,
    pub searching: bool,
    pub search_error: Option<String>,

    // Event handlers
    pub on_author_change: Callback<Event>,
    pub on_year_start_change: Callback<Event>,
    pub on_year_end_change: Callback<Event>,
    pub on_search_author: Callback<()>,
    pub on_search_years: Callback<()>,
    pub on_list_all: Callback<()>,
}

/// Search controls for the book list: author search, publication-year
/// range search, and a list-all refresh. Filtering itself happens on the
/// backend; this panel only relays field values.
#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let on_search_author = {
        let on_search_author = props.on_search_author.clone();
        Callback::from(move |_: MouseEvent| on_search_author.emit(()))
    };
    let on_search_years = {
        let on_search_years = props.on_search_years.clone();
        Callback::from(move |_: MouseEvent| on_search_years.emit(()))
    };
    let on_list_all = {
        let on_list_all = props.on_list_all.clone();
        Callback::from(move |_: MouseEvent| on_list_all.emit(()))
    };

    html! {
        <section class="search-section">
            <h2>{"Search"}</h2>

            <div class="form-group">
                <label for="search-author">{"Author"}</label>
                <input
                    type="text"
                    id="search-author"
                    placeholder="Jane Austen"
                    value={props.author.clone()}
                    onchange={props.on_author_change.clone()}
                    disabled={props.searching}
                />
                <button
                    class="btn search-author-btn"
                    onclick={on_search_author}
                    disabled={props.searching}
                >
                    {"Search by Author"}
                </button>
            </div>

            <div class="form-group">
                <label for="search-year-start">{"Publication Year Range"}</label>
                <input
                    type="number"
                    id="search-year-start"
                    placeholder="1990"
                    value={props.year_start.clone()}
                    onchange={props.on_year_start_change.clone()}
                    disabled={props.searching}
                />
                <input
                    type="number"
                    id="search-year-end"
                    placeholder="2020"
                    value={props.year_end.clone()}
                    onchange={props.on_year_end_change.clone()}
                    disabled={props.searching}
                />
                <button
                    class="btn search-years-btn"
                    onclick={on_search_years}
                    disabled={props.searching}
                >
                    {"Search by Year Range"}
                </button>
                {if let Some(error) = props.search_error.as_ref() {
                    html! { <div class="search-input-error" id="error-search-year">{error}</div> }
                } else { html! {} }}
            </div>

            <button
                class="btn list-all-btn"
                onclick={on_list_all}
                disabled={props.searching}
            >
                {"List All Books"}
            </button>
        </section>
    }
}
