pub mod stand_in;
pub mod telemetry;

use payloads::{APIClient, MediaClient, MediaConfig, VehicleFields};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub use stand_in::{ReceivedUpload, StandIn};

pub const TEST_CLOUD_NAME: &str = "stand-in-cloud";
pub const TEST_UPLOAD_PRESET: &str = "unsigned-listing-images";
pub const TEST_USER_ID: &str = "64f0c2a9e1b7d3f4a5c6b7d8";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub address: String,
    pub stand_in: StandIn,
    pub api_client: APIClient,
    pub media_client: MediaClient,
}

impl TestApp {
    /// A media client pointed at the stand-in but using a different preset.
    pub fn media_client_with_preset(&self, upload_preset: &str) -> MediaClient {
        MediaClient {
            config: MediaConfig::new(
                &self.address,
                TEST_CLOUD_NAME,
                upload_preset,
            ),
            inner_client: reqwest::Client::new(),
        }
    }
}

/// Start the stand-in on `port` (0 for an OS-assigned port).
pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let stand_in = StandIn::new(TEST_UPLOAD_PRESET);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .expect("Failed to bind stand-in listener");
    let port = listener.local_addr().unwrap().port();

    let router = stand_in.router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            telemetry::log_error(e);
        }
    });

    let address = format!("http://127.0.0.1:{port}");
    TestApp {
        port,
        address: address.clone(),
        stand_in,
        api_client: APIClient {
            address: address.clone(),
            inner_client: reqwest::Client::new(),
        },
        media_client: MediaClient {
            config: MediaConfig::new(
                &address,
                TEST_CLOUD_NAME,
                TEST_UPLOAD_PRESET,
            ),
            inner_client: reqwest::Client::new(),
        },
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

/// Form contents that pass validation.
pub fn valid_fields() -> VehicleFields {
    VehicleFields {
        car_model: "Toyota Corolla 2019".into(),
        price: "4350000".into(),
        phone_number: "03001234567".into(),
        city: "Lahore".into(),
    }
}

/// A persisted session record as the accounts flow writes it.
pub fn session_record(user_id: &str) -> String {
    serde_json::json!({
        "message": "Login successful",
        "data": { "_id": user_id, "email": "seller@example.com" },
    })
    .to_string()
}
