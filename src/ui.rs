pub mod application;
pub mod create_workflow;
pub mod messages;
pub mod start_screen;

pub use application::InterconnectWizard;
pub use messages::Message;
