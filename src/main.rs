use directories::ProjectDirs;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use interconnect_wizard::style;
use interconnect_wizard::ui::application::InterconnectWizard;

pub fn main() -> iced::Result {
    let _guard = init_logging();

    iced::application(
        InterconnectWizard::new,
        InterconnectWizard::update,
        InterconnectWizard::view,
    )
    .title(InterconnectWizard::title)
    .window_size(iced::Size::new(560f32, 720f32))
    .theme(|_| style::custom_theme())
    .centered()
    .run()
}

/// Log to a file under the user data directory; fall back to stderr when
/// the directory cannot be determined.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match ProjectDirs::from("net", "interconnect-portal", "interconnect-wizard") {
        Some(dirs) => {
            let log_dir = dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let appender = tracing_appender::rolling::daily(log_dir, "interconnect-wizard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            warn!("Could not determine data directory; logging to stderr");
            None
        }
    }
}
