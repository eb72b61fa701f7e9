use crate::ui::create_workflow::CreateMessage;

#[derive(Debug, Clone)]
pub enum Message {
    // App-level navigation
    StartCreate,
    CancelCreate,
    BackToSearch,

    // Create-workflow messages
    Create(CreateMessage),
}
