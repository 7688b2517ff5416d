use payloads::FormField;
use std::rc::Rc;
use vehicle_form::{AlertKind, SubmitError, VehicleFormState};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ImagePreviewGrid, ShowAlert, Spinner, TextField};
use crate::contexts::toast::use_toast;
use crate::hooks::use_logout;
use crate::preview::SelectedImage;
use crate::session::SessionHandle;
use crate::{Route, get_api_client, get_media_client};

type FormState = VehicleFormState<Rc<SelectedImage>>;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: SessionHandle,
}

#[function_component]
pub fn VehicleFormPage(props: &Props) -> Html {
    let navigator = use_navigator();
    let toast = use_toast();
    let form = use_state(FormState::new);
    let on_logout = use_logout(props.session.clone());

    // Resolve the seller once; without a session there is nothing to submit
    // on behalf of.
    {
        let form = form.clone();
        let session = props.session.clone();
        use_effect_with((), move |_| {
            let mut next = (*form).clone();
            if !next.bootstrap(session.provider()) {
                tracing::info!("No session, redirecting to sign in");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            }
            form.set(next);
        });
    }

    let on_field_input = {
        let form = form.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let mut next = (*form).clone();
            next.edit_field(field, value);
            form.set(next);
        })
    };

    let on_max_images_input = {
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if let Some(warning) = next.set_max_images(&input.value()) {
                toast.warning(warning.to_string());
            }
            form.set(next);
        })
    };

    let on_files_selected = {
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files: Vec<File> = match input.files() {
                Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
                None => Vec::new(),
            };
            // Picking the same files again must fire another change event
            input.set_value("");

            let mut next = (*form).clone();
            match next.select_images(files, SelectedImage::new) {
                Ok(()) => form.set(next),
                Err(warning) => toast.warning(warning.to_string()),
            }
        })
    };

    let on_delete_image = {
        let form = form.clone();
        Callback::from(move |index: usize| {
            let mut next = (*form).clone();
            if next.delete_image(index) {
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            let pending = match next.begin_submit() {
                Ok(pending) => pending,
                Err(SubmitError::AlreadySubmitting) => return,
                Err(e) => {
                    tracing::debug!("Submission refused: {e}");
                    form.set(next);
                    return;
                }
            };
            form.set(next.clone());

            let form = form.clone();
            yew::platform::spawn_local(async move {
                let media = get_media_client();
                let backend = get_api_client();
                let result = pending.run(&media, &backend).await;
                next.finish_submit(&result);
                form.set(next);
            });
        })
    };

    if form.is_loading {
        return html! { <Spinner /> };
    }

    let field_input = |field: FormField, input_type: &'static str| {
        html! {
            <TextField
                {field}
                value={form.fields.get(field).to_string()}
                error={form.errors.message(field).map(AttrValue::Static)}
                input_type={input_type}
                on_input={on_field_input.clone()}
            />
        }
    };

    html! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold text-gray-900">{"Add Vehicle Information"}</h1>
                <button
                    type="button"
                    onclick={on_logout}
                    class="py-2 px-4 border border-gray-300 rounded-md text-sm font-medium
                           text-gray-700 bg-white hover:bg-gray-50"
                >
                    {"Logout"}
                </button>
            </div>

            <form onsubmit={on_submit} class="space-y-6 bg-white p-8 rounded-lg shadow-md">
                if let Some(message) = &form.success_message {
                    <ShowAlert alert_type={AlertKind::Success.as_str()} message={message.clone()} />
                }
                if let Some(message) = &form.api_error {
                    <ShowAlert alert_type={AlertKind::Error.as_str()} message={message.clone()} />
                }

                {field_input(FormField::CarModel, "text")}
                {field_input(FormField::Price, "number")}
                {field_input(FormField::PhoneNumber, "tel")}
                {field_input(FormField::City, "text")}

                <div>
                    <label for="maxImages" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Maximum Images"}
                    </label>
                    <input
                        id="maxImages"
                        name="maxImages"
                        type="number"
                        min="1"
                        max="10"
                        value={form.images.max_images().to_string()}
                        oninput={on_max_images_input}
                        class="w-32 px-3 py-2 border border-gray-300 rounded-md shadow-sm
                               focus:outline-none focus:ring-2 focus:ring-gray-500"
                    />
                </div>

                <div class="space-y-3">
                    <label for="images" class="block text-sm font-medium text-gray-700">
                        {format!(
                            "Images ({} of {})",
                            form.images.len(),
                            form.images.max_images()
                        )}
                    </label>
                    <input
                        id="images"
                        name="images"
                        type="file"
                        accept="image/*"
                        multiple={true}
                        onchange={on_files_selected}
                        class="block w-full text-sm text-gray-700"
                    />
                    <ImagePreviewGrid
                        images={form.images.as_slice().to_vec()}
                        on_delete={on_delete_image}
                    />
                </div>

                <button
                    type="submit"
                    disabled={form.submit_disabled()}
                    class="w-full flex justify-center py-2 px-4 border border-transparent
                           rounded-md shadow-sm text-sm font-medium text-white
                           bg-gray-900 hover:bg-gray-800
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-gray-500
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Submit"}
                </button>
            </form>
        </div>
    }
}
