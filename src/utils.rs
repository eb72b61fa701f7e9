pub mod catalog;
pub mod form_store;
pub mod validation;

pub use catalog::PortCatalog;
pub use form_store::FormStore;
pub use validation::{FieldErrors, validate_step};
