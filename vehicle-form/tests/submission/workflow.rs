use payloads::{APIClient, FormField, UserId, VehicleFields};
use reqwest::StatusCode;
use std::time::Duration;
use test_helpers::{TEST_USER_ID, TestApp, session_record, spawn_app};
use vehicle_form::{
    InMemorySession, SessionProvider, SubmitError, VehicleFormState,
    state::SUCCESS_MESSAGE,
};

use super::{TestImage, image};

/// A signed-in form with every field filled in and `images` selected.
fn ready_form(images: &[&'static str]) -> VehicleFormState<TestImage> {
    let sessions = InMemorySession::default();
    sessions.store(&session_record(TEST_USER_ID));

    let mut form = VehicleFormState::new();
    assert!(form.bootstrap(&sessions));
    let fields = test_helpers::valid_fields();
    for field in FormField::ALL {
        form.edit_field(field, fields.get(field));
    }
    form.select_images(images.to_vec(), image).unwrap();
    form
}

async fn submit(
    app: &TestApp,
    form: &mut VehicleFormState<TestImage>,
) -> Result<(), SubmitError> {
    form.submit(&app.media_client, &app.api_client).await
}

#[tokio::test]
async fn two_images_submit_and_reset() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = ready_form(&["front.jpg", "interior.jpg"]);

    submit(&app, &mut form).await?;

    assert_eq!(form.success_message.as_deref(), Some(SUCCESS_MESSAGE));
    assert_eq!(form.api_error, None);
    assert_eq!(form.fields, VehicleFields::default());
    assert!(form.images.is_empty());
    assert!(form.errors.is_empty());
    assert!(!form.is_loading);
    assert!(form.submit_disabled());

    let vehicles = app.stand_in.vehicles();
    assert_eq!(vehicles.len(), 1);
    let vehicle = &vehicles[0];
    assert_eq!(vehicle.fields, test_helpers::valid_fields());
    assert_eq!(vehicle.user_id, UserId(TEST_USER_ID.into()));
    assert_eq!(vehicle.images.len(), 2);
    assert!(vehicle.images[0].ends_with("/front.jpg"));
    assert!(vehicle.images[1].ends_with("/interior.jpg"));
    assert_eq!(app.stand_in.uploads().len(), 2);
    Ok(())
}

#[tokio::test]
async fn urls_follow_selection_order_not_completion_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in
        .delay_upload("first.jpg", Duration::from_millis(300));
    let mut form = ready_form(&["first.jpg", "second.jpg", "third.jpg"]);

    submit(&app, &mut form).await?;

    // The slow upload lands last at the host...
    let completed: Vec<_> = app
        .stand_in
        .uploads()
        .into_iter()
        .filter_map(|upload| upload.file_name)
        .collect();
    assert_eq!(completed.last().map(String::as_str), Some("first.jpg"));

    // ...but keeps its place in the record.
    let images = &app.stand_in.vehicles()[0].images;
    assert!(images[0].ends_with("/first.jpg"));
    assert!(images[1].ends_with("/second.jpg"));
    assert!(images[2].ends_with("/third.jpg"));
    Ok(())
}

#[tokio::test]
async fn failed_upload_aborts_without_posting() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in
        .fail_upload("front.jpg", "Upload service unavailable");
    let mut form = ready_form(&["front.jpg"]);

    let result = submit(&app, &mut form).await;

    assert!(matches!(result, Err(SubmitError::Upload(_))));
    assert_eq!(
        form.api_error.as_deref(),
        Some("Upload service unavailable")
    );
    assert_eq!(form.success_message, None);
    assert!(!form.is_loading);
    assert_eq!(form.fields, test_helpers::valid_fields());
    assert_eq!(form.images.as_slice(), [image("front.jpg")]);
    assert!(app.stand_in.vehicles().is_empty());
    Ok(())
}

#[tokio::test]
async fn one_failure_among_many_fails_the_batch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in.fail_upload("b.jpg", "Invalid image file");
    let mut form = ready_form(&["a.jpg", "b.jpg", "c.jpg"]);

    let result = submit(&app, &mut form).await;

    assert!(result.is_err());
    assert_eq!(form.api_error.as_deref(), Some("Invalid image file"));
    assert_eq!(form.images.len(), 3);
    assert!(app.stand_in.vehicles().is_empty());
    Ok(())
}

#[tokio::test]
async fn backend_rejection_message_is_shown() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in
        .reject_vehicles(StatusCode::BAD_REQUEST, r#"{"message":"city not served"}"#);
    let mut form = ready_form(&["front.jpg"]);

    let result = submit(&app, &mut form).await;

    assert!(matches!(result, Err(SubmitError::Backend(_))));
    assert_eq!(form.api_error.as_deref(), Some("city not served"));
    assert_eq!(form.success_message, None);
    assert_eq!(form.images.len(), 1);
    // the image made it to the host before the backend said no
    assert_eq!(app.stand_in.uploads().len(), 1);
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_reports_network_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let closed = std::net::TcpListener::bind("127.0.0.1:0")?;
    let address = format!("http://{}", closed.local_addr()?);
    drop(closed);
    let backend = APIClient {
        address,
        inner_client: reqwest::Client::new(),
    };
    let mut form = ready_form(&["front.jpg"]);

    let result = form.submit(&app.media_client, &backend).await;

    assert!(result.is_err());
    assert_eq!(
        form.api_error.as_deref(),
        Some("Network error. Please check your connection.")
    );
    assert!(!form.is_loading);
    Ok(())
}

#[tokio::test]
async fn invalid_form_does_not_upload() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut form = ready_form(&["front.jpg"]);
    form.edit_field(FormField::Price, "a lot");
    form.edit_field(FormField::CarModel, "VW");

    let result = submit(&app, &mut form).await;

    match result {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(
                errors.message(FormField::Price),
                Some("Price must be a valid number")
            );
        }
        other => panic!("Expected Invalid, got {other:?}"),
    }
    assert_eq!(form.errors.len(), 2);
    assert!(app.stand_in.uploads().is_empty());
    assert!(app.stand_in.vehicles().is_empty());
    Ok(())
}

#[tokio::test]
async fn resubmitting_after_a_failure_succeeds() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in.fail_upload("blurry.jpg", "Invalid image file");
    let mut form = ready_form(&["blurry.jpg", "sharp.jpg"]);

    assert!(submit(&app, &mut form).await.is_err());
    assert!(form.api_error.is_some());

    form.delete_image(0);
    submit(&app, &mut form).await?;

    assert_eq!(form.api_error, None);
    assert_eq!(form.success_message.as_deref(), Some(SUCCESS_MESSAGE));
    let vehicles = app.stand_in.vehicles();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].images.len(), 1);
    assert!(vehicles[0].images[0].ends_with("/sharp.jpg"));
    Ok(())
}
