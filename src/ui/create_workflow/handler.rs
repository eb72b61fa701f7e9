use std::collections::HashMap;

use iced::Task;
use tracing::{debug, error, info};

use super::{CreateMessage, CreateState, CreateWorkflowState, PortListState};
use crate::models::{CONNECTION_NAME_KEY, CONNECTION_STEP, FormField, PORTS_STEP, PortDirection};
use crate::utils::catalog::PortCatalog;
use crate::utils::form_store::FormStore;
use crate::utils::validation::{FieldErrors, validate_step};

/// Start an asynchronous load of one direction's port list. The fetch is
/// fire-and-forget; the result comes back as a PortsLoaded or
/// PortsLoadFailed message.
pub fn load_ports(
    list: &mut PortListState,
    catalog: &PortCatalog,
    direction: PortDirection,
) -> Task<crate::ui::messages::Message> {
    list.is_loading = true;
    list.error = None;
    debug!("Loading {} ports", direction);

    let catalog = catalog.clone();
    Task::perform(
        async move { catalog.fetch_ports(direction).await },
        move |result| match result {
            Ok(ports) => crate::ui::messages::Message::Create(CreateMessage::PortsLoaded(
                direction, ports,
            )),
            Err(error) => crate::ui::messages::Message::Create(CreateMessage::PortsLoadFailed(
                direction, error,
            )),
        },
    )
}

pub fn handle_message(
    state: &mut CreateState,
    src_ports: &mut PortListState,
    dest_ports: &mut PortListState,
    form_store: &mut Option<FormStore>,
    errors: &mut HashMap<String, FieldErrors>,
    catalog: &PortCatalog,
    message: CreateMessage,
) -> Task<crate::ui::messages::Message> {
    match message {
        CreateMessage::LoadPorts(direction) => {
            let list = match direction {
                PortDirection::Source => src_ports,
                PortDirection::Destination => dest_ports,
            };
            load_ports(list, catalog, direction)
        }

        CreateMessage::PortsLoaded(direction, ports) => {
            let list = match direction {
                PortDirection::Source => src_ports,
                PortDirection::Destination => dest_ports,
            };
            list.items = ports;
            list.is_loading = false;
            list.error = None;
            info!("Loaded {} {} ports", list.items.len(), direction);
            Task::none()
        }

        CreateMessage::PortsLoadFailed(direction, error) => {
            let list = match direction {
                PortDirection::Source => src_ports,
                PortDirection::Destination => dest_ports,
            };
            list.is_loading = false;
            list.error = Some(error.clone());
            error!("Failed to load {} ports: {}", direction, error);
            Task::none()
        }

        CreateMessage::UpdateFormValue(field, value) => {
            if let Some(form) = form_store {
                if let Err(e) = form.set_value(PORTS_STEP, field.key(), value) {
                    error!("Failed to persist form value: {}", e);
                }
                match validate_step(PORTS_STEP, form) {
                    Some(step_errors) => {
                        errors.insert(PORTS_STEP.to_string(), step_errors);
                    }
                    None => {
                        errors.remove(PORTS_STEP);
                    }
                }
            }
            debug!("Updated form value for {}", field.key());
            Task::none()
        }

        CreateMessage::NextStep => {
            let (src_id, dest_id) = match form_store {
                Some(form) => (
                    form.value(PORTS_STEP, FormField::SrcPortId.key()).to_string(),
                    form.value(PORTS_STEP, FormField::DestPortId.key()).to_string(),
                ),
                None => (String::new(), String::new()),
            };

            // Both guards must pass: a selection for each end, and a clean
            // validation state for the step.
            if src_id.is_empty() || dest_id.is_empty() {
                state.show_error = true;
                debug!("Next step blocked: missing port selection");
                return Task::none();
            }
            if errors.contains_key(PORTS_STEP) {
                debug!("Next step blocked: ports step has validation errors");
                return Task::none();
            }

            info!(
                "Ports selected ({} -> {}), advancing to connection step",
                src_id, dest_id
            );
            state.workflow_state = CreateWorkflowState::ConfigureConnection;
            Task::none()
        }

        CreateMessage::SetConnectionName(name) => {
            if let Some(form) = form_store {
                if let Err(e) = form.set_value(CONNECTION_STEP, CONNECTION_NAME_KEY, name) {
                    error!("Failed to persist connection name: {}", e);
                }
            }
            Task::none()
        }

        CreateMessage::BackToPorts => {
            state.workflow_state = CreateWorkflowState::SelectPorts;
            state.show_error = false;
            debug!("Returned to port selection");
            Task::none()
        }

        CreateMessage::Submit => {
            let name = form_store
                .as_ref()
                .map(|f| f.value(CONNECTION_STEP, CONNECTION_NAME_KEY).to_string())
                .unwrap_or_default();

            if name.trim().is_empty() {
                debug!("Submit ignored: connection name is empty");
                return Task::none();
            }

            // The wizard is done with the draft once the request is in.
            if let Some(form) = form_store {
                if let Err(e) = form.clear() {
                    error!("Failed to clear draft after submit: {}", e);
                }
            }
            errors.remove(PORTS_STEP);

            info!("Connection request '{}' submitted", name);
            state.workflow_state = CreateWorkflowState::Completion {
                connection_name: name,
            };
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaymentType, PortOption};
    use crate::utils::form_store::DRAFT_FILE;
    use tempfile::TempDir;

    struct Ctx {
        state: CreateState,
        src_ports: PortListState,
        dest_ports: PortListState,
        form_store: Option<FormStore>,
        errors: HashMap<String, FieldErrors>,
        catalog: PortCatalog,
        dir: TempDir,
    }

    impl Ctx {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            Self {
                state: CreateState::new(),
                src_ports: PortListState::new(),
                dest_ports: PortListState::new(),
                form_store: Some(FormStore::with_config_dir(dir.path().to_path_buf())),
                errors: HashMap::new(),
                catalog: PortCatalog::new(),
                dir,
            }
        }

        fn handle(&mut self, message: CreateMessage) {
            let _ = handle_message(
                &mut self.state,
                &mut self.src_ports,
                &mut self.dest_ports,
                &mut self.form_store,
                &mut self.errors,
                &self.catalog,
                message,
            );
        }

        fn select_both_ports(&mut self) {
            self.handle(CreateMessage::UpdateFormValue(
                FormField::SrcPortId,
                "port-1".to_string(),
            ));
            self.handle(CreateMessage::UpdateFormValue(
                FormField::DestPortId,
                "port-2".to_string(),
            ));
        }
    }

    fn sample_ports() -> Vec<PortOption> {
        vec![PortOption {
            port_id: "port-1".to_string(),
            port_name: "fra1-edge-01".to_string(),
            available_bandwidth: "10 Gbps".to_string(),
            port_location: "Frankfurt".to_string(),
            payment_type: PaymentType::Plan,
        }]
    }

    #[test]
    fn test_next_step_blocked_without_any_selection() {
        let mut ctx = Ctx::new();

        ctx.handle(CreateMessage::NextStep);

        assert!(ctx.state.show_error);
        assert_eq!(ctx.state.workflow_state, CreateWorkflowState::SelectPorts);
    }

    #[test]
    fn test_next_step_blocked_with_missing_destination() {
        let mut ctx = Ctx::new();
        ctx.handle(CreateMessage::UpdateFormValue(
            FormField::SrcPortId,
            "port-1".to_string(),
        ));

        ctx.handle(CreateMessage::NextStep);

        assert!(ctx.state.show_error);
        assert_eq!(ctx.state.workflow_state, CreateWorkflowState::SelectPorts);
    }

    #[test]
    fn test_next_step_blocked_by_step_errors() {
        let mut ctx = Ctx::new();
        ctx.select_both_ports();

        // Errors supplied from outside the step block navigation even with
        // both ports selected.
        let mut step_errors = FieldErrors::new();
        step_errors.insert("src_port_id".to_string(), "port unavailable".to_string());
        ctx.errors.insert(PORTS_STEP.to_string(), step_errors);

        ctx.handle(CreateMessage::NextStep);

        assert_eq!(ctx.state.workflow_state, CreateWorkflowState::SelectPorts);
    }

    #[test]
    fn test_next_step_advances_when_complete() {
        let mut ctx = Ctx::new();
        ctx.select_both_ports();

        ctx.handle(CreateMessage::NextStep);

        assert!(!ctx.state.show_error);
        assert_eq!(
            ctx.state.workflow_state,
            CreateWorkflowState::ConfigureConnection
        );
    }

    #[test]
    fn test_update_form_value_recomputes_step_errors() {
        let mut ctx = Ctx::new();

        ctx.handle(CreateMessage::UpdateFormValue(
            FormField::SrcPortId,
            "port-1".to_string(),
        ));
        let step_errors = ctx.errors.get(PORTS_STEP).unwrap();
        assert!(!step_errors.contains_key(FormField::SrcPortId.key()));
        assert!(step_errors.contains_key(FormField::DestPortId.key()));

        ctx.handle(CreateMessage::UpdateFormValue(
            FormField::DestPortId,
            "port-2".to_string(),
        ));
        assert!(!ctx.errors.contains_key(PORTS_STEP));
    }

    #[test]
    fn test_update_form_value_leaves_port_lists_alone() {
        let mut ctx = Ctx::new();
        ctx.handle(CreateMessage::PortsLoaded(
            PortDirection::Source,
            sample_ports(),
        ));

        ctx.handle(CreateMessage::UpdateFormValue(
            FormField::SrcPortId,
            "port-1".to_string(),
        ));

        assert!(!ctx.src_ports.is_loading);
        assert!(!ctx.dest_ports.is_loading);
        assert_eq!(ctx.src_ports.items.len(), 1);
    }

    #[test]
    fn test_load_ports_marks_list_loading() {
        let mut ctx = Ctx::new();
        ctx.src_ports.error = Some("stale error".to_string());

        ctx.handle(CreateMessage::LoadPorts(PortDirection::Source));

        assert!(ctx.src_ports.is_loading);
        assert!(ctx.src_ports.error.is_none());
        assert!(!ctx.dest_ports.is_loading);
    }

    #[test]
    fn test_ports_loaded_populates_the_right_list() {
        let mut ctx = Ctx::new();
        ctx.src_ports.is_loading = true;

        ctx.handle(CreateMessage::PortsLoaded(
            PortDirection::Source,
            sample_ports(),
        ));

        assert!(!ctx.src_ports.is_loading);
        assert!(ctx.src_ports.error.is_none());
        assert_eq!(ctx.src_ports.items.len(), 1);
        assert!(ctx.dest_ports.items.is_empty());
    }

    #[test]
    fn test_ports_load_failed_records_error() {
        let mut ctx = Ctx::new();
        ctx.dest_ports.is_loading = true;

        ctx.handle(CreateMessage::PortsLoadFailed(
            PortDirection::Destination,
            "connection refused".to_string(),
        ));

        assert!(!ctx.dest_ports.is_loading);
        assert_eq!(
            ctx.dest_ports.error.as_deref(),
            Some("connection refused")
        );
    }

    #[test]
    fn test_back_to_ports_resets_show_error() {
        let mut ctx = Ctx::new();
        ctx.select_both_ports();
        ctx.handle(CreateMessage::NextStep);
        ctx.state.show_error = true;

        ctx.handle(CreateMessage::BackToPorts);

        assert_eq!(ctx.state.workflow_state, CreateWorkflowState::SelectPorts);
        assert!(!ctx.state.show_error);
    }

    #[test]
    fn test_submit_requires_a_name() {
        let mut ctx = Ctx::new();
        ctx.select_both_ports();
        ctx.handle(CreateMessage::NextStep);

        ctx.handle(CreateMessage::Submit);

        assert_eq!(
            ctx.state.workflow_state,
            CreateWorkflowState::ConfigureConnection
        );
    }

    #[test]
    fn test_submit_clears_draft_and_completes() {
        let mut ctx = Ctx::new();
        ctx.select_both_ports();
        ctx.handle(CreateMessage::NextStep);
        ctx.handle(CreateMessage::SetConnectionName("ibm-link".to_string()));
        assert!(ctx.dir.path().join(DRAFT_FILE).exists());

        ctx.handle(CreateMessage::Submit);

        assert_eq!(
            ctx.state.workflow_state,
            CreateWorkflowState::Completion {
                connection_name: "ibm-link".to_string()
            }
        );
        assert!(!ctx.dir.path().join(DRAFT_FILE).exists());
    }
}
