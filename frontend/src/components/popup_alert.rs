use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PopupAlertProps {
    /// Current banner text; `None` hides the popup
    pub message: Option<String>,
}

/// Transient success banner. The owner sets the message and clears it
/// again after `state::SUCCESS_POPUP_MS`.
#[function_component(PopupAlert)]
pub fn popup_alert(props: &PopupAlertProps) -> Html {
    match props.message.as_ref() {
        Some(message) => html! {
            <div class="popup-alert success" id="popup-alert">
                <div class="popup-title">{"Success"}</div>
                <div class="popup-body">{message}</div>
            </div>
        },
        None => html! {},
    }
}
