pub mod login;
pub mod not_found;
pub mod vehicle_form;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use vehicle_form::VehicleFormPage;
