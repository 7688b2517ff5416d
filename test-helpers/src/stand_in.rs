//! In-process stand-in for the backend vehicle endpoint and the media host.
//!
//! Both services are external to this repository. The stand-in speaks the
//! same wire format so the real clients can be exercised, records what it
//! receives, and can be scripted to fail.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use payloads::requests::CreateVehicle;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// One multipart upload as the media host saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedUpload {
    pub cloud_name: String,
    pub file_name: Option<String>,
    pub size: usize,
    pub upload_preset: Option<String>,
    pub form_cloud_name: Option<String>,
    pub secure_url: String,
}

#[derive(Default)]
struct Script {
    failing_uploads: HashMap<String, String>,
    upload_delays: HashMap<String, Duration>,
    vehicle_rejection: Option<(StatusCode, String)>,
}

#[derive(Default)]
struct Recorded {
    vehicles: Vec<CreateVehicle>,
    uploads: Vec<ReceivedUpload>,
}

struct Inner {
    upload_preset: String,
    script: Mutex<Script>,
    recorded: Mutex<Recorded>,
}

/// Shared handle to the stand-in's script and recordings.
#[derive(Clone)]
pub struct StandIn {
    inner: Arc<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a panicking test handler shouldn't poison every other assertion
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl StandIn {
    /// Accepts unsigned uploads only with `upload_preset`.
    pub fn new(upload_preset: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                upload_preset: upload_preset.into(),
                script: Mutex::new(Script::default()),
                recorded: Mutex::new(Recorded::default()),
            }),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/vehicles", post(create_vehicle))
            .route("/v1_1/:cloud_name/image/upload", post(upload_image))
            .layer(CorsLayer::permissive())
            .with_state(self.clone())
    }

    /// Make uploads of `file_name` fail with `message`.
    pub fn fail_upload(&self, file_name: &str, message: &str) {
        lock(&self.inner.script)
            .failing_uploads
            .insert(file_name.to_string(), message.to_string());
    }

    /// Hold the response for `file_name` back by `delay`.
    pub fn delay_upload(&self, file_name: &str, delay: Duration) {
        lock(&self.inner.script)
            .upload_delays
            .insert(file_name.to_string(), delay);
    }

    /// Reject every vehicle with `status` and the raw `body`.
    pub fn reject_vehicles(&self, status: StatusCode, body: impl Into<String>) {
        lock(&self.inner.script).vehicle_rejection =
            Some((status, body.into()));
    }

    pub fn vehicles(&self) -> Vec<CreateVehicle> {
        lock(&self.inner.recorded).vehicles.clone()
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        lock(&self.inner.recorded).uploads.clone()
    }
}

async fn create_vehicle(
    State(stand_in): State<StandIn>,
    Json(vehicle): Json<CreateVehicle>,
) -> Response {
    let rejection = lock(&stand_in.inner.script).vehicle_rejection.clone();
    if let Some((status, body)) = rejection {
        tracing::info!(%status, "Rejecting vehicle {}", vehicle.fields.car_model);
        return (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response();
    }

    let id = Uuid::new_v4().simple().to_string();
    tracing::info!(
        id = %id,
        images = vehicle.images.len(),
        "Received vehicle {} ({}) from user {}",
        vehicle.fields.car_model,
        vehicle.fields.city,
        vehicle.user_id
    );
    lock(&stand_in.inner.recorded).vehicles.push(vehicle);

    (StatusCode::CREATED, Json(json!({ "_id": id }))).into_response()
}

fn upload_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}

async fn upload_image(
    State(stand_in): State<StandIn>,
    Path(cloud_name): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let mut file: Option<(Option<String>, usize)> = None;
    let mut upload_preset = None;
    let mut form_cloud_name = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return upload_error(StatusCode::BAD_REQUEST, &e.to_string());
            }
        };
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => file = Some((file_name, bytes.len())),
                    Err(e) => {
                        return upload_error(
                            StatusCode::BAD_REQUEST,
                            &e.to_string(),
                        );
                    }
                }
            }
            "upload_preset" => upload_preset = field.text().await.ok(),
            "cloud_name" => form_cloud_name = field.text().await.ok(),
            _ => {}
        }
    }

    let Some((file_name, size)) = file else {
        return upload_error(StatusCode::BAD_REQUEST, "Missing required parameter - file");
    };
    if upload_preset.as_deref() != Some(stand_in.inner.upload_preset.as_str()) {
        return upload_error(StatusCode::BAD_REQUEST, "Upload preset not found");
    }

    let key = file_name.clone().unwrap_or_default();
    let (failure, delay) = {
        let script = lock(&stand_in.inner.script);
        (
            script.failing_uploads.get(&key).cloned(),
            script.upload_delays.get(&key).copied(),
        )
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(message) = failure {
        tracing::info!("Failing upload of {key}");
        return upload_error(StatusCode::INTERNAL_SERVER_ERROR, &message);
    }

    let public_id = Uuid::new_v4().simple().to_string();
    let secure_url = format!(
        "https://media.stand-in.test/{cloud_name}/image/upload/{public_id}/{key}"
    );
    lock(&stand_in.inner.recorded).uploads.push(ReceivedUpload {
        cloud_name,
        file_name,
        size,
        upload_preset,
        form_cloud_name,
        secure_url: secure_url.clone(),
    });

    let body: Value = json!({ "public_id": public_id, "secure_url": secure_url });
    (StatusCode::OK, Json(body)).into_response()
}
