use vehicle_form::AlertKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `"success"` or `"error"`. Anything else renders nothing.
    pub alert_type: AttrValue,
    pub message: AttrValue,
}

/// Full-width banner for the outcome of a submission.
#[function_component]
pub fn ShowAlert(props: &Props) -> Html {
    let palette = match AlertKind::parse(&props.alert_type) {
        Some(AlertKind::Success) => "bg-green-600 text-white",
        Some(AlertKind::Error) => "bg-red-600 text-white",
        None => return html! {},
    };

    html! {
        <div
            role="alert"
            data-alert={props.alert_type.clone()}
            class={classes!("w-full", "p-4", "rounded-md", "text-sm", "font-medium", palette)}
        >
            {props.message.clone()}
        </div>
    }
}
