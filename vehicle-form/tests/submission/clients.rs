use payloads::{ClientError, UserId, requests::CreateVehicle};
use reqwest::StatusCode;
use test_helpers::{
    TEST_CLOUD_NAME, TEST_UPLOAD_PRESET, TEST_USER_ID, assert_status_code,
    spawn_app, valid_fields,
};

fn vehicle() -> CreateVehicle {
    CreateVehicle {
        fields: valid_fields(),
        images: vec!["https://media.test/a.jpg".into()],
        user_id: UserId(TEST_USER_ID.into()),
    }
}

#[tokio::test]
async fn create_vehicle_posts_record() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.api_client.create_vehicle(&vehicle()).await?;

    assert_eq!(app.stand_in.vehicles(), vec![vehicle()]);
    Ok(())
}

#[tokio::test]
async fn create_vehicle_surfaces_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in
        .reject_vehicles(StatusCode::BAD_REQUEST, r#"{"message":"city not served"}"#);

    let result = app.api_client.create_vehicle(&vehicle()).await;

    match result {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "city not served");
        }
        _ => {
            panic!("Expected APIError");
        }
    }
    assert!(app.stand_in.vehicles().is_empty());
    Ok(())
}

#[tokio::test]
async fn create_vehicle_falls_back_without_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in
        .reject_vehicles(StatusCode::SERVICE_UNAVAILABLE, "upstream timed out");

    let result = app.api_client.create_vehicle(&vehicle()).await;

    assert_eq!(
        result.as_ref().unwrap_err().to_string(),
        "Failed to submit the form"
    );
    assert_status_code(result, StatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn upload_sends_file_and_credentials() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let data = super::image("front.jpg").data;

    let url = app
        .media_client
        .upload_image("front.jpg", data.clone())
        .await?;

    let uploads = app.stand_in.uploads();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.secure_url, url);
    assert_eq!(upload.cloud_name, TEST_CLOUD_NAME);
    assert_eq!(upload.form_cloud_name.as_deref(), Some(TEST_CLOUD_NAME));
    assert_eq!(upload.upload_preset.as_deref(), Some(TEST_UPLOAD_PRESET));
    assert_eq!(upload.file_name.as_deref(), Some("front.jpg"));
    assert_eq!(upload.size, data.len());
    assert!(url.starts_with("https://"));
    Ok(())
}

#[tokio::test]
async fn upload_with_unknown_preset_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.media_client_with_preset("not-a-preset");

    let result = client.upload_image("front.jpg", vec![1, 2, 3]).await;

    match result {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "Upload preset not found");
        }
        _ => panic!("Expected APIError"),
    }
    assert!(app.stand_in.uploads().is_empty());
    Ok(())
}

#[tokio::test]
async fn upload_failure_carries_host_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.stand_in.fail_upload("huge.jpg", "File size too large");

    let result = app.media_client.upload_image("huge.jpg", vec![0; 64]).await;

    assert_eq!(result.as_ref().unwrap_err().to_string(), "File size too large");
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
