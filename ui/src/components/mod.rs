pub mod image_preview_grid;
pub mod show_alert;
pub mod spinner;
pub mod text_field;
pub mod toast;

pub use image_preview_grid::ImagePreviewGrid;
pub use show_alert::ShowAlert;
pub use spinner::Spinner;
pub use text_field::TextField;
pub use toast::ToastContainer;
