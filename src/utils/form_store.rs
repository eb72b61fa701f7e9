use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// File name of the saved wizard draft. This is the single durable entry the
/// create workflow owns; cancelling the wizard deletes it.
pub const DRAFT_FILE: &str = "connection-create-form.toml";

/// Form state of one wizard step: the fields the user has filled in so far
/// and whether the step was interacted with at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepForm {
    #[serde(default)]
    pub touched: bool,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl StepForm {
    /// Field value, empty string when the field was never set.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }
}

#[derive(Serialize, Deserialize)]
struct DraftToml {
    saved_at: DateTime<Utc>,
    steps: HashMap<String, StepForm>,
}

/// Struct to hold per-step form state and manage its persistence
pub struct FormStore {
    steps: HashMap<String, StepForm>,
    config_dir: PathBuf,
}

impl FormStore {
    /// Create a new FormStore backed by the user config directory
    pub fn new() -> Result<Self, String> {
        let project_dirs = ProjectDirs::from("net", "interconnect-portal", "interconnect-wizard")
            .ok_or_else(|| "Failed to determine project directories".to_string())?;

        let config_dir = project_dirs.config_dir().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        Ok(Self {
            steps: HashMap::new(),
            config_dir,
        })
    }

    /// Create a FormStore backed by an explicit directory
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            steps: HashMap::new(),
            config_dir,
        }
    }

    /// Load a previously saved draft, if one exists
    pub fn load_draft(&mut self) -> Result<(), String> {
        let draft_path = self.draft_path();

        if !draft_path.exists() {
            return Ok(());
        }

        let mut file =
            File::open(&draft_path).map_err(|e| format!("Failed to open draft file: {}", e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| format!("Failed to read draft file: {}", e))?;

        let draft: DraftToml =
            toml::from_str(&content).map_err(|e| format!("Failed to parse draft TOML: {}", e))?;

        self.steps = draft.steps;

        Ok(())
    }

    pub fn step(&self, step: &str) -> Option<&StepForm> {
        self.steps.get(step)
    }

    /// Field value for a step, empty string when unset.
    pub fn value(&self, step: &str, key: &str) -> &str {
        self.steps.get(step).map(|s| s.value(key)).unwrap_or("")
    }

    pub fn is_touched(&self, step: &str) -> bool {
        self.steps.get(step).map(|s| s.touched).unwrap_or(false)
    }

    /// Whether any step holds user input worth restoring.
    pub fn has_draft(&self) -> bool {
        self.steps.values().any(|s| s.touched)
    }

    /// Record a field edit. Marks the step touched and persists the draft.
    pub fn set_value(&mut self, step: &str, key: &str, value: String) -> Result<(), String> {
        let entry = self.steps.entry(step.to_string()).or_default();
        entry.touched = true;
        entry.values.insert(key.to_string(), value);

        self.save_draft()
    }

    /// Delete the draft, both in memory and on disk.
    pub fn clear(&mut self) -> Result<(), String> {
        self.steps.clear();

        let draft_path = self.draft_path();
        if draft_path.exists() {
            fs::remove_file(&draft_path)
                .map_err(|e| format!("Failed to remove draft file: {}", e))?;
        }

        Ok(())
    }

    fn save_draft(&self) -> Result<(), String> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let draft = DraftToml {
            saved_at: Utc::now(),
            steps: self.steps.clone(),
        };

        let toml_content = toml::to_string(&draft)
            .map_err(|e| format!("Failed to serialize draft to TOML: {}", e))?;

        let mut file = File::create(self.draft_path())
            .map_err(|e| format!("Failed to create draft file: {}", e))?;

        file.write_all(toml_content.as_bytes())
            .map_err(|e| format!("Failed to write draft file: {}", e))?;

        Ok(())
    }

    fn draft_path(&self) -> PathBuf {
        self.config_dir.join(DRAFT_FILE)
    }
}
