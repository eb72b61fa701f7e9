use crate::models::{FormField, PortDirection, PortOption};

#[derive(Debug, Clone)]
pub enum CreateMessage {
    // Ports step
    LoadPorts(PortDirection),
    PortsLoaded(PortDirection, Vec<PortOption>),
    PortsLoadFailed(PortDirection, String),
    UpdateFormValue(FormField, String),
    NextStep,

    // Connection step
    SetConnectionName(String),
    BackToPorts,
    Submit,
}
