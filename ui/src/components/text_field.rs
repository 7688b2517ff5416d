use payloads::FormField;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub field: FormField,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub on_input: Callback<(FormField, String)>,
}

/// Labelled input bound to one of the vehicle fields, with its validation
/// message underneath.
#[function_component]
pub fn TextField(props: &Props) -> Html {
    let field = props.field;
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    let border = if props.error.is_some() {
        "border-red-500 focus:ring-red-500"
    } else {
        "border-gray-300 focus:ring-gray-500"
    };

    html! {
        <div>
            <label for={field.name()} class="block text-sm font-medium text-gray-700 mb-2">
                {field.label()}
            </label>
            <input
                id={field.name()}
                name={field.name()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
                class={classes!(
                    "w-full", "px-3", "py-2", "border", "rounded-md", "shadow-sm",
                    "focus:outline-none", "focus:ring-2", border
                )}
            />
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600">{error.clone()}</p>
            }
        </div>
    }
}
