use crate::models::{FormField, PortOption};
use crate::utils::validation::FieldErrors;

/// Load state of one port dropdown's option list. The application holds one
/// of these per direction; only load messages ever change it.
#[derive(Debug, Clone)]
pub struct PortListState {
    pub items: Vec<PortOption>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl PortListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn find(&self, port_id: &str) -> Option<&PortOption> {
        if port_id.is_empty() {
            return None;
        }
        self.items.iter().find(|p| p.port_id == port_id)
    }
}

impl Default for PortListState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateWorkflowState {
    SelectPorts,
    ConfigureConnection,
    Completion { connection_name: String },
}

#[derive(Debug, Clone)]
pub struct CreateState {
    pub workflow_state: CreateWorkflowState,
    /// Set on the first failed submit of the ports step; dropdowns are
    /// error-highlighted only after that.
    pub show_error: bool,
}

impl CreateState {
    pub fn new() -> Self {
        Self {
            workflow_state: CreateWorkflowState::SelectPorts,
            show_error: false,
        }
    }
}

/// Everything the ports step renders, selected from the application state.
#[derive(Debug, Clone, Copy)]
pub struct PortsViewModel<'a> {
    pub touched: bool,
    pub src_ports: &'a PortListState,
    pub dest_ports: &'a PortListState,
    pub src_port_id: &'a str,
    pub dest_port_id: &'a str,
    pub errors: Option<&'a FieldErrors>,
    pub show_error: bool,
}

impl PortsViewModel<'_> {
    /// A dropdown is error-highlighted only when the step has errors, submit
    /// was attempted, and this field itself is flagged.
    pub fn field_has_error(&self, field: FormField) -> bool {
        self.show_error
            && self
                .errors
                .map(|e| e.contains_key(field.key()))
                .unwrap_or(false)
    }
}
