use serde::{Deserialize, Serialize};

/// Step key for the port-selection step of the create workflow.
pub const PORTS_STEP: &str = "ports";

/// Step key for the connection-details step.
pub const CONNECTION_STEP: &str = "connection";

/// Field key for the connection name on the connection-details step.
pub const CONNECTION_NAME_KEY: &str = "connection_name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Connection search and entry screen.
    Search,
    /// The create-connection wizard.
    Create,
}

/// One selectable interconnection endpoint, as served by the port catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortOption {
    pub port_id: String,
    pub port_name: String,
    pub available_bandwidth: String,
    pub port_location: String,
    pub payment_type: PaymentType,
}

// Implement Display trait so pick_list can properly show the port
impl std::fmt::Display for PortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.port_name, self.port_location, self.available_bandwidth
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Plan,
    CreditCard,
    Invoice,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentType::Plan => write!(f, "Plan"),
            PaymentType::CreditCard => write!(f, "Credit card"),
            PaymentType::Invoice => write!(f, "Invoice"),
        }
    }
}

/// Which end of the interconnection a port list belongs to. The two lists
/// load independently and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Source,
    Destination,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Source => "source",
            PortDirection::Destination => "destination",
        }
    }
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form fields of the port-selection step, keyed the way the form store and
/// the validator key them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SrcPortId,
    DestPortId,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::SrcPortId => "src_port_id",
            FormField::DestPortId => "dest_port_id",
        }
    }
}
