use crate::preview::SelectedImage;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub images: Vec<Rc<SelectedImage>>,
    /// Emits the index of the preview whose delete control was pressed.
    pub on_delete: Callback<usize>,
}

#[function_component]
pub fn ImagePreviewGrid(props: &Props) -> Html {
    if props.images.is_empty() {
        return html! {};
    }

    html! {
        <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
            {for props.images.iter().enumerate().map(|(index, image)| {
                let on_delete = props.on_delete.reform(move |_: MouseEvent| index);
                html! {
                    <div class="relative aspect-square rounded-md overflow-hidden border border-gray-200">
                        <img
                            src={image.preview_src()}
                            alt={image.file.name()}
                            class="w-full h-full object-cover"
                        />
                        <button
                            type="button"
                            onclick={on_delete}
                            title="Remove image"
                            class="absolute top-1 right-1 h-6 w-6 rounded-full bg-black/60 text-white text-xs
                                   hover:bg-black/80 focus:outline-none"
                        >
                            {"✕"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
