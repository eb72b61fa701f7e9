// Public library interface for interconnect-wizard
//
// Exposes the domain models and the port catalog client so the utility
// binaries can reuse them alongside the application.

pub mod models;
pub mod style;
pub mod ui;
pub mod utils;

pub use utils::catalog::PortCatalog;
pub use utils::form_store::FormStore;
