use payloads::{
    FormField, UserId, ValidationErrors, VehicleFields, validate_vehicle_fields,
};

use crate::selection::{ImageSelection, SelectionWarning};
use crate::session::SessionProvider;
use crate::submit::{MediaHost, PendingSubmission, SubmitError, VehicleBackend};

pub const SUCCESS_MESSAGE: &str = "Vehicle information submitted successfully";

/// Everything the vehicle form holds between renders.
///
/// `T` is one selected image together with its preview handle.
#[derive(Debug, Clone)]
pub struct VehicleFormState<T> {
    pub fields: VehicleFields,
    pub user_id: Option<UserId>,
    pub images: ImageSelection<T>,
    pub errors: ValidationErrors,
    pub api_error: Option<String>,
    pub success_message: Option<String>,
    pub is_loading: bool,
}

impl<T> Default for VehicleFormState<T> {
    fn default() -> Self {
        Self {
            fields: VehicleFields::default(),
            user_id: None,
            images: ImageSelection::new(),
            errors: ValidationErrors::default(),
            api_error: None,
            success_message: None,
            is_loading: false,
        }
    }
}

impl<T> VehicleFormState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the signed-in user. Returns false when there is no session, in
    /// which case the caller should send the user to sign in.
    pub fn bootstrap(
        &mut self,
        sessions: &(impl SessionProvider + ?Sized),
    ) -> bool {
        match sessions.session() {
            Some(session) => {
                self.user_id = Some(session.user_id);
                true
            }
            None => {
                self.user_id = None;
                false
            }
        }
    }

    /// Store an edit. An error on that field is dropped without
    /// re-validating.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.clear_field(field);
    }

    /// Apply the max-images input. Text that isn't a whole number leaves the
    /// bound as it was.
    pub fn set_max_images(&mut self, input: &str) -> Option<SelectionWarning> {
        let requested = input.trim().parse::<i64>().ok()?;
        let requested = usize::try_from(requested.max(0)).unwrap_or(usize::MAX);
        self.images.set_max_images(requested)
    }

    pub fn select_images<F>(
        &mut self,
        batch: Vec<F>,
        derive: impl FnMut(F) -> T,
    ) -> Result<(), SelectionWarning> {
        if batch.is_empty() {
            return Ok(());
        }
        self.images.select(batch, derive)
    }

    pub fn delete_image(&mut self, index: usize) -> bool {
        self.images.remove(index).is_some()
    }

    /// Recompute every field error. Returns true when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_vehicle_fields(&self.fields);
        self.errors.is_empty()
    }

    /// Submitting needs at least one image, whatever the fields say.
    pub fn submit_disabled(&self) -> bool {
        self.images.is_empty()
    }

    /// Validate and enter the loading state, returning what needs to be
    /// sent. Validation failures leave the previous banners untouched.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission<T>, SubmitError>
    where
        T: Clone,
    {
        if self.is_loading {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.api_error = None;
        self.success_message = None;

        let Some(user_id) = self.user_id.clone() else {
            let error = SubmitError::MissingSession;
            self.api_error = Some(error.to_string());
            return Err(error);
        };

        self.is_loading = true;
        Ok(PendingSubmission {
            fields: self.fields.clone(),
            images: self.images.as_slice().to_vec(),
            user_id,
        })
    }

    /// Record the outcome of an attempt started with [`Self::begin_submit`].
    /// A failure keeps the fields and images as they were.
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.success_message = Some(SUCCESS_MESSAGE.to_string());
                self.fields = VehicleFields::default();
                self.images.clear();
                self.errors.clear();
            }
            Err(e) => {
                self.api_error = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Run a whole attempt against exclusively owned state.
    pub async fn submit<M, B>(
        &mut self,
        media: &M,
        backend: &B,
    ) -> Result<(), SubmitError>
    where
        T: Clone,
        M: MediaHost<T>,
        B: VehicleBackend,
    {
        let pending = self.begin_submit()?;
        let result = pending.run(media, backend).await;
        self.finish_submit(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::InMemorySession;
    use crate::submit::UploadError;
    use payloads::{ClientError, FieldError, requests::CreateVehicle};
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeMedia {
        fail_on: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl MediaHost<String> for FakeMedia {
        async fn upload(&self, image: &String) -> Result<String, UploadError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_on == Some(image.as_str()) {
                return Err(UploadError::Client(ClientError::APIError(
                    StatusCode::BAD_REQUEST,
                    "Upload failed: file too large".into(),
                )));
            }
            Ok(format!("https://img.test/{image}"))
        }
    }

    #[derive(Default)]
    struct FakeBackend {
        reject: Option<String>,
        received: RefCell<Vec<CreateVehicle>>,
    }

    impl VehicleBackend for FakeBackend {
        async fn create_vehicle(
            &self,
            record: &CreateVehicle,
        ) -> Result<(), ClientError> {
            self.received.borrow_mut().push(record.clone());
            match &self.reject {
                Some(message) => Err(ClientError::APIError(
                    StatusCode::BAD_REQUEST,
                    message.clone(),
                )),
                None => Ok(()),
            }
        }
    }

    fn filled_form(images: &[&str]) -> VehicleFormState<String> {
        let mut state = VehicleFormState::new();
        assert!(state.bootstrap(&InMemorySession::signed_in("user-1")));
        state.edit_field(FormField::CarModel, "Civic");
        state.edit_field(FormField::Price, "2500000");
        state.edit_field(FormField::PhoneNumber, "03211234567");
        state.edit_field(FormField::City, "Islamabad");
        state
            .select_images(images.to_vec(), |name| name.to_string())
            .unwrap();
        state
    }

    #[test]
    fn bootstrap_without_session_reports_missing() {
        let mut state = VehicleFormState::<String>::new();
        assert!(!state.bootstrap(&InMemorySession::signed_out()));
        assert_eq!(state.user_id, None);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = VehicleFormState::<String>::new();
        assert!(!state.validate());
        assert_eq!(state.errors.len(), 4);

        state.edit_field(FormField::City, "x");
        assert!(!state.errors.contains(FormField::City));
        assert_eq!(
            state.errors.get(FormField::CarModel),
            Some(FieldError::CarModelTooShort)
        );

        // Not re-validated: a still-invalid value does not bring it back.
        state.edit_field(FormField::CarModel, "a");
        assert!(!state.errors.contains(FormField::CarModel));
    }

    #[test]
    fn max_images_input_is_parsed_and_clamped() {
        let mut state = filled_form(&["a", "b", "c"]);
        assert_eq!(state.set_max_images("abc"), None);
        assert_eq!(state.images.max_images(), 10);

        assert_eq!(state.set_max_images("25"), None);
        assert_eq!(state.images.max_images(), 10);

        assert_eq!(
            state.set_max_images("-4"),
            Some(SelectionWarning::Truncated {
                max_images: 1,
                removed: 2
            })
        );
        assert_eq!(state.images.as_slice(), ["a"]);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut state = filled_form(&["a"]);
        state.set_max_images("1");
        assert_eq!(state.select_images(Vec::<&str>::new(), |n| n.into()), Ok(()));
        assert_eq!(state.images.len(), 1);
    }

    #[test]
    fn submit_disabled_tracks_image_count_only() {
        let mut state = VehicleFormState::<String>::new();
        assert!(state.submit_disabled());

        state
            .select_images(vec!["a"], |name| name.to_string())
            .unwrap();
        assert!(!state.submit_disabled(), "invalid fields do not disable");

        state.delete_image(0);
        assert!(state.submit_disabled());
    }

    #[tokio::test]
    async fn successful_submit_resets_the_form() {
        let mut state = filled_form(&["front.jpg", "back.jpg"]);
        state.api_error = Some("stale".into());
        let media = FakeMedia::default();
        let backend = FakeBackend::default();

        state.submit(&media, &backend).await.unwrap();

        assert_eq!(state.success_message.as_deref(), Some(SUCCESS_MESSAGE));
        assert_eq!(state.api_error, None);
        assert_eq!(state.fields, VehicleFields::default());
        assert!(state.images.is_empty());
        assert!(state.errors.is_empty());
        assert!(!state.is_loading);

        let received = backend.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].images,
            ["https://img.test/front.jpg", "https://img.test/back.jpg"]
        );
        assert_eq!(received[0].user_id, UserId("user-1".into()));
        assert_eq!(received[0].fields.city, "Islamabad");
    }

    #[tokio::test]
    async fn upload_failure_keeps_the_form_and_skips_backend() {
        let mut state = filled_form(&["broken.jpg"]);
        let media = FakeMedia {
            fail_on: Some("broken.jpg"),
            ..Default::default()
        };
        let backend = FakeBackend::default();

        let result = state.submit(&media, &backend).await;

        assert!(matches!(result, Err(SubmitError::Upload(_))));
        assert_eq!(
            state.api_error.as_deref(),
            Some("Upload failed: file too large")
        );
        assert_eq!(state.success_message, None);
        assert!(!state.is_loading);
        assert_eq!(state.fields.car_model, "Civic");
        assert_eq!(state.images.as_slice(), ["broken.jpg"]);
        assert!(backend.received.borrow().is_empty());
    }

    #[tokio::test]
    async fn backend_message_is_surfaced() {
        let mut state = filled_form(&["a.jpg"]);
        let media = FakeMedia::default();
        let backend = FakeBackend {
            reject: Some("city not served".into()),
            ..Default::default()
        };

        let result = state.submit(&media, &backend).await;

        assert!(matches!(result, Err(SubmitError::Backend(_))));
        assert_eq!(state.api_error.as_deref(), Some("city not served"));
        assert_eq!(state.success_message, None);
        assert_eq!(state.images.len(), 1);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let mut state = filled_form(&["a.jpg"]);
        state.edit_field(FormField::PhoneNumber, "12345");
        state.success_message = Some("from last time".into());
        let media = FakeMedia::default();
        let backend = FakeBackend::default();

        let result = state.submit(&media, &backend).await;

        match result {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains(FormField::PhoneNumber));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
        assert_eq!(media.calls.get(), 0);
        assert!(backend.received.borrow().is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.success_message.as_deref(), Some("from last time"));
    }

    #[test]
    fn cannot_begin_twice() {
        let mut state = filled_form(&["a.jpg"]);
        let pending = state.begin_submit().unwrap();
        assert!(state.is_loading);
        assert_eq!(pending.images, ["a.jpg"]);
        assert!(matches!(
            state.begin_submit(),
            Err(SubmitError::AlreadySubmitting)
        ));
    }

    #[test]
    fn missing_user_is_reported() {
        let mut state = filled_form(&["a.jpg"]);
        state.user_id = None;
        assert!(matches!(
            state.begin_submit(),
            Err(SubmitError::MissingSession)
        ));
        assert!(!state.is_loading);
        assert_eq!(
            state.api_error.as_deref(),
            Some("You must be signed in to submit a vehicle")
        );
    }
}
