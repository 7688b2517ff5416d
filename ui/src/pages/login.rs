use payloads::UserId;
use vehicle_form::Session;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::session::SessionHandle;
use crate::utils::is_dev_mode;

const DEMO_USER_ID: &str = "demo-seller";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: SessionHandle,
}

/// Landing spot for users without a session. Signing in belongs to the
/// accounts flow; local builds can start a demo session instead.
#[function_component]
pub fn LoginPage(props: &Props) -> Html {
    let navigator = use_navigator();
    let user_id = use_state(|| DEMO_USER_ID.to_string());

    // Redirect to home if already signed in
    {
        let navigator = navigator.clone();
        let signed_in = props.session.provider().session().is_some();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in && let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_user_id_input = {
        let user_id = user_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_id.set(input.value());
        })
    };

    let on_continue = {
        let session = props.session.clone();
        let user_id = user_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = user_id.trim();
            if id.is_empty() {
                return;
            }
            let record = Session {
                user_id: UserId(id.to_string()),
            }
            .to_record();
            session.provider().store(&record);
            tracing::info!(user_id = %id, "Started demo session");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">{"Sign in required"}</h1>
                    <p class="text-gray-600">
                        {"Sign in to your seller account to list a vehicle."}
                    </p>
                </div>

                if is_dev_mode() {
                    <form onsubmit={on_continue} class="space-y-4">
                        <div>
                            <label for="demo-user-id" class="block text-sm font-medium text-gray-700 mb-2">
                                {"Seller id"}
                            </label>
                            <input
                                id="demo-user-id"
                                type="text"
                                value={(*user_id).clone()}
                                oninput={on_user_id_input}
                                class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm
                                       focus:outline-none focus:ring-2 focus:ring-gray-500"
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full py-2 px-4 rounded-md shadow-sm text-sm font-medium text-white
                                   bg-gray-900 hover:bg-gray-800 focus:outline-none focus:ring-2
                                   focus:ring-offset-2 focus:ring-gray-500"
                        >
                            {"Continue as demo seller"}
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
