use std::collections::HashMap;

use crate::models::{FormField, PORTS_STEP};
use crate::utils::form_store::FormStore;

/// Field name to error message, for one wizard step.
pub type FieldErrors = HashMap<String, String>;

/// Validate one wizard step against the form store. Returns None when the
/// step has no errors; the view layer only decides whether to display the
/// messages, never interprets them.
pub fn validate_step(step: &str, form: &FormStore) -> Option<FieldErrors> {
    match step {
        PORTS_STEP => validate_ports_step(form),
        _ => None,
    }
}

fn validate_ports_step(form: &FormStore) -> Option<FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.value(PORTS_STEP, FormField::SrcPortId.key()).is_empty() {
        errors.insert(
            FormField::SrcPortId.key().to_string(),
            "Select a source port".to_string(),
        );
    }

    if form.value(PORTS_STEP, FormField::DestPortId.key()).is_empty() {
        errors.insert(
            FormField::DestPortId.key().to_string(),
            "Select a destination port".to_string(),
        );
    }

    if errors.is_empty() { None } else { Some(errors) }
}
