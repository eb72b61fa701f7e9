use std::collections::HashMap;

use iced::{Element, Task};
use tracing::{error, info, warn};

use crate::models::{
    AppMode, CONNECTION_NAME_KEY, CONNECTION_STEP, FormField, PORTS_STEP, PortDirection,
};
use crate::ui::create_workflow::{
    self, CreateState, CreateWorkflowState, PortListState, PortsViewModel,
};
use crate::ui::messages::Message;
use crate::ui::start_screen;
use crate::utils::catalog::PortCatalog;
use crate::utils::form_store::FormStore;
use crate::utils::validation::{FieldErrors, validate_step};

pub struct InterconnectWizard {
    pub mode: AppMode,
    pub create_workflow: Option<CreateState>,

    // Port lists live at the application level, not inside the step
    pub src_ports: PortListState,
    pub dest_ports: PortListState,

    // Shared resources
    pub form_store: Option<FormStore>,
    pub errors: HashMap<String, FieldErrors>,
    pub catalog: PortCatalog,
    pub error_message: Option<String>,
}

impl InterconnectWizard {
    pub fn new() -> Self {
        let form_store = match FormStore::new() {
            Ok(mut store) => {
                if let Err(e) = store.load_draft() {
                    warn!("Failed to load saved draft: {}", e);
                }
                Some(store)
            }
            Err(e) => {
                error!("Failed to initialize form store: {}", e);
                None
            }
        };

        let error_message = if form_store.is_none() {
            Some("Saved drafts are unavailable; form state will not persist.".to_string())
        } else {
            None
        };

        Self {
            mode: AppMode::Search,
            create_workflow: None,
            src_ports: PortListState::new(),
            dest_ports: PortListState::new(),
            form_store,
            errors: HashMap::new(),
            catalog: PortCatalog::new(),
            error_message,
        }
    }

    pub fn title(&self) -> String {
        String::from("Cloud Interconnect Wizard")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartCreate => {
                self.mode = AppMode::Create;
                self.create_workflow = Some(CreateState::new());

                // Start from an accurate error mapping when a draft was
                // restored
                if let Some(form) = &self.form_store {
                    match validate_step(PORTS_STEP, form) {
                        Some(step_errors) => {
                            self.errors.insert(PORTS_STEP.to_string(), step_errors);
                        }
                        None => {
                            self.errors.remove(PORTS_STEP);
                        }
                    }
                }

                info!("Entering create workflow");

                // Both lists reload unconditionally on entry, even when
                // options are already present
                Task::batch([
                    create_workflow::handler::load_ports(
                        &mut self.src_ports,
                        &self.catalog,
                        PortDirection::Source,
                    ),
                    create_workflow::handler::load_ports(
                        &mut self.dest_ports,
                        &self.catalog,
                        PortDirection::Destination,
                    ),
                ])
            }

            Message::CancelCreate => {
                if let Some(form) = &mut self.form_store {
                    if let Err(e) = form.clear() {
                        error!("Failed to clear saved draft: {}", e);
                    }
                }
                self.errors.remove(PORTS_STEP);
                self.create_workflow = None;
                self.mode = AppMode::Search;
                info!("Create workflow cancelled, returning to search");
                Task::none()
            }

            Message::BackToSearch => {
                self.create_workflow = None;
                self.mode = AppMode::Search;
                Task::none()
            }

            Message::Create(create_msg) => {
                if let Some(create_state) = &mut self.create_workflow {
                    create_workflow::handler::handle_message(
                        create_state,
                        &mut self.src_ports,
                        &mut self.dest_ports,
                        &mut self.form_store,
                        &mut self.errors,
                        &self.catalog,
                        create_msg,
                    )
                } else {
                    Task::none()
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.mode {
            AppMode::Search => {
                let has_draft = self
                    .form_store
                    .as_ref()
                    .map(|f| f.has_draft())
                    .unwrap_or(false);
                start_screen::view_search_screen(has_draft, self.error_message.as_deref())
            }
            AppMode::Create => match &self.create_workflow {
                Some(create) => match &create.workflow_state {
                    CreateWorkflowState::SelectPorts => {
                        create_workflow::view_select_ports(self.ports_view_model(create))
                    }
                    CreateWorkflowState::ConfigureConnection => {
                        create_workflow::view_configure_connection(
                            self.form_value(CONNECTION_STEP, CONNECTION_NAME_KEY),
                            self.src_ports
                                .find(self.form_value(PORTS_STEP, FormField::SrcPortId.key())),
                            self.dest_ports
                                .find(self.form_value(PORTS_STEP, FormField::DestPortId.key())),
                        )
                    }
                    CreateWorkflowState::Completion { connection_name } => {
                        create_workflow::view_completion(connection_name)
                    }
                },
                None => {
                    let has_draft = self
                        .form_store
                        .as_ref()
                        .map(|f| f.has_draft())
                        .unwrap_or(false);
                    start_screen::view_search_screen(has_draft, self.error_message.as_deref())
                }
            },
        }
    }

    /// Select the ports step's view model from the application state. This
    /// is the typed counterpart of the portal's state-to-props adapter.
    fn ports_view_model<'a>(&'a self, create: &'a CreateState) -> PortsViewModel<'a> {
        let (touched, src_port_id, dest_port_id) = match &self.form_store {
            Some(form) => (
                form.is_touched(PORTS_STEP),
                form.value(PORTS_STEP, FormField::SrcPortId.key()),
                form.value(PORTS_STEP, FormField::DestPortId.key()),
            ),
            None => (false, "", ""),
        };

        PortsViewModel {
            touched,
            src_ports: &self.src_ports,
            dest_ports: &self.dest_ports,
            src_port_id,
            dest_port_id,
            errors: self.errors.get(PORTS_STEP),
            show_error: create.show_error,
        }
    }

    fn form_value(&self, step: &str, key: &str) -> &str {
        self.form_store
            .as_ref()
            .map(|f| f.value(step, key))
            .unwrap_or("")
    }
}

impl Default for InterconnectWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::create_workflow::CreateMessage;
    use crate::utils::form_store::DRAFT_FILE;
    use tempfile::TempDir;

    fn test_app() -> (InterconnectWizard, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let app = InterconnectWizard {
            mode: AppMode::Search,
            create_workflow: None,
            src_ports: PortListState::new(),
            dest_ports: PortListState::new(),
            form_store: Some(FormStore::with_config_dir(dir.path().to_path_buf())),
            errors: HashMap::new(),
            catalog: PortCatalog::new(),
            error_message: None,
        };
        (app, dir)
    }

    fn select_both_ports(app: &mut InterconnectWizard) {
        let _ = app.update(Message::Create(CreateMessage::UpdateFormValue(
            FormField::SrcPortId,
            "port-1".to_string(),
        )));
        let _ = app.update(Message::Create(CreateMessage::UpdateFormValue(
            FormField::DestPortId,
            "port-2".to_string(),
        )));
    }

    #[test]
    fn test_start_create_loads_both_port_lists() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::StartCreate);

        assert_eq!(app.mode, AppMode::Create);
        assert!(app.create_workflow.is_some());
        assert!(app.src_ports.is_loading);
        assert!(app.dest_ports.is_loading);
    }

    #[test]
    fn test_form_updates_do_not_retrigger_loads() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::StartCreate);

        let _ = app.update(Message::Create(CreateMessage::PortsLoaded(
            PortDirection::Source,
            vec![],
        )));
        let _ = app.update(Message::Create(CreateMessage::PortsLoaded(
            PortDirection::Destination,
            vec![],
        )));
        select_both_ports(&mut app);

        assert!(!app.src_ports.is_loading);
        assert!(!app.dest_ports.is_loading);
    }

    #[test]
    fn test_start_create_validates_restored_draft() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::StartCreate);

        // An empty draft means both fields are flagged from the start
        let step_errors = app.errors.get(PORTS_STEP).unwrap();
        assert_eq!(step_errors.len(), 2);
    }

    #[test]
    fn test_full_flow_reaches_connection_step() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::StartCreate);
        select_both_ports(&mut app);

        let _ = app.update(Message::Create(CreateMessage::NextStep));

        let create = app.create_workflow.as_ref().unwrap();
        assert_eq!(
            create.workflow_state,
            CreateWorkflowState::ConfigureConnection
        );
    }

    #[test]
    fn test_cancel_clears_draft_and_returns_to_search() {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::StartCreate);
        select_both_ports(&mut app);
        assert!(dir.path().join(DRAFT_FILE).exists());

        let _ = app.update(Message::CancelCreate);

        assert_eq!(app.mode, AppMode::Search);
        assert!(app.create_workflow.is_none());
        assert!(!dir.path().join(DRAFT_FILE).exists());
        assert!(!app.errors.contains_key(PORTS_STEP));
    }

    #[test]
    fn test_create_messages_ignored_outside_workflow() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::Create(CreateMessage::NextStep));

        assert_eq!(app.mode, AppMode::Search);
        assert!(app.create_workflow.is_none());
    }
}
