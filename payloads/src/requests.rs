use crate::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CAR_MODEL_MIN_LEN: usize = 3;
pub const PHONE_NUMBER_DIGITS: usize = 11;

/// The editable fields of the vehicle form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CarModel,
    Price,
    PhoneNumber,
    City,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::CarModel,
        FormField::Price,
        FormField::PhoneNumber,
        FormField::City,
    ];

    /// Name used on the wire and for the `name` attribute of the input.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CarModel => "carModel",
            Self::Price => "price",
            Self::PhoneNumber => "phoneNumber",
            Self::City => "city",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CarModel => "Car Model",
            Self::Price => "Price",
            Self::PhoneNumber => "Phone Number",
            Self::City => "City",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFields {
    pub car_model: String,
    /// Kept as typed so the backend receives exactly what the user entered.
    pub price: String,
    pub phone_number: String,
    pub city: String,
}

impl VehicleFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CarModel => &self.car_model,
            FormField::Price => &self.price,
            FormField::PhoneNumber => &self.phone_number,
            FormField::City => &self.city,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::CarModel => &mut self.car_model,
            FormField::Price => &mut self.price,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::City => &mut self.city,
        };
        *slot = value.into();
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    CarModelTooShort,
    PriceNotANumber,
    PhoneNumberInvalid,
    CityMissing,
}

impl FieldError {
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::CarModelTooShort => {
                "Car model must be at least 3 characters long"
            }
            Self::PriceNotANumber => "Price must be a valid number",
            Self::PhoneNumberInvalid => "Phone number must be exactly 11 digits",
            Self::CityMissing => "City is required",
        }
    }
}

/// Per-field validation errors. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// The message to show under the input, if the field has an error.
    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.get(field).map(|error| error.error_message())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true if an error was present.
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

pub fn validate_car_model(car_model: &str) -> Option<FieldError> {
    (car_model.chars().count() < CAR_MODEL_MIN_LEN)
        .then_some(FieldError::CarModelTooShort)
}

/// Accepts anything that reads as a finite number, including exponent
/// notation and values of any magnitude. Surrounding whitespace is ignored.
pub fn validate_price(price: &str) -> Option<FieldError> {
    let numeric = price
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite());
    (!numeric).then_some(FieldError::PriceNotANumber)
}

pub fn validate_phone_number(phone_number: &str) -> Option<FieldError> {
    let valid = phone_number.len() == PHONE_NUMBER_DIGITS
        && phone_number.bytes().all(|b| b.is_ascii_digit());
    (!valid).then_some(FieldError::PhoneNumberInvalid)
}

pub fn validate_city(city: &str) -> Option<FieldError> {
    city.is_empty().then_some(FieldError::CityMissing)
}

/// Validate every field, collecting all failures rather than stopping at the
/// first one.
pub fn validate_vehicle_fields(fields: &VehicleFields) -> ValidationErrors {
    let checks = [
        (FormField::CarModel, validate_car_model(&fields.car_model)),
        (FormField::Price, validate_price(&fields.price)),
        (FormField::PhoneNumber, validate_phone_number(&fields.phone_number)),
        (FormField::City, validate_city(&fields.city)),
    ];

    ValidationErrors(
        checks
            .into_iter()
            .filter_map(|(field, error)| error.map(|error| (field, error)))
            .collect(),
    )
}

/// Body of `POST /api/vehicles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    #[serde(flatten)]
    pub fields: VehicleFields,
    /// Public URLs returned by the media host, in selection order.
    pub images: Vec<String>,
    pub user_id: UserId,
}
