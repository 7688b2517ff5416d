use yew::prelude::*;

#[function_component]
pub fn Spinner() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="inline-block animate-spin rounded-full h-10 w-10 border-2 border-gray-900 border-t-transparent"></div>
        </div>
    }
}
