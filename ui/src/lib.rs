use payloads::{APIClient, MediaClient, MediaConfig, media_client};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod preview;
mod session;
mod utils;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{LoginPage, NotFoundPage, VehicleFormPage};
use session::SessionHandle;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            // Fallback to same origin
            web_sys::window()?.location().origin().ok()
        })
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

/// Client for the media host, using the credentials baked in at build time.
pub fn get_media_client() -> MediaClient {
    let config = MediaConfig::new(
        option_env!("MEDIA_BASE_URL")
            .unwrap_or(media_client::DEFAULT_MEDIA_BASE_URL),
        option_env!("MEDIA_CLOUD_NAME").unwrap_or_default(),
        option_env!("MEDIA_UPLOAD_PRESET").unwrap_or_default(),
    );

    MediaClient {
        config,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white text-gray-900">
                    <Switch<Route> render={switch} />
                    <ToastContainer />
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let session = SessionHandle::local_storage();
    match routes {
        Route::Home => html! { <VehicleFormPage {session} /> },
        Route::Login => html! { <LoginPage {session} /> },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}
