use crate::{Route, session::SessionHandle};
use yew::prelude::*;
use yew_router::prelude::*;

/// Drop the stored session and send the user to the sign-in page.
#[hook]
pub fn use_logout(session: SessionHandle) -> Callback<MouseEvent> {
    let navigator = use_navigator();

    Callback::from(move |_| {
        session.provider().clear();
        tracing::info!("Signed out");
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
