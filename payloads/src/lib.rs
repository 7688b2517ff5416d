pub mod api_client;
pub mod media_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use media_client::{MediaClient, MediaConfig};
pub use requests::{
    FieldError, FormField, ValidationErrors, VehicleFields,
    validate_vehicle_fields,
};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier of the signed-in user, as issued by the accounts backend.
///
/// Opaque to this client; it is only echoed back when submitting a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);
