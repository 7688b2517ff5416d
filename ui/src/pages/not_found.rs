use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="text-gray-900 font-medium underline">
                {"Back to the listing form"}
            </Link<Route>>
        </div>
    }
}
