//! State and workflow behind the vehicle listing form.
//!
//! Nothing in here touches the browser. The UI owns a [`VehicleFormState`],
//! feeds it user events, and hands the [`PendingSubmission`] it produces to the
//! media host and backend.

pub mod alert;
pub mod selection;
pub mod session;
pub mod state;
pub mod submit;

pub use alert::AlertKind;
pub use selection::{ImageSelection, SelectionWarning};
pub use session::{InMemorySession, Session, SessionProvider};
pub use state::VehicleFormState;
pub use submit::{
    MediaHost, PendingSubmission, SubmitError, UploadError, UploadSource,
    VehicleBackend, upload_all,
};
