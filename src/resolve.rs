//! Field resolution
//!
//! Turns caller overrides, computed defaults, and (optionally) interactive
//! answers into the context the renderer consumes. Precedence per field:
//! a non-blank override wins outright, then the computed default, then the
//! prompt answer or the field's placeholder. Required fields never resolve
//! to an empty string.

use crate::error::LicenseError;
use crate::identity::IdentityProvider;
use crate::prompt::{Answer, Prompter};
use crate::registry::{Context, FieldSpec, LicenseSpec};

/// Split a `KEY=VALUE` override expression on the first `=`
pub fn parse_override(assignment: &str) -> Result<(String, String), LicenseError> {
    let Some((key, value)) = assignment.split_once('=') else {
        return Err(LicenseError::InvalidOverride {
            assignment: assignment.to_string(),
            reason: "expected KEY=VALUE",
        });
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(LicenseError::InvalidOverride {
            assignment: assignment.to_string(),
            reason: "key must not be empty",
        });
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Resolve every field of `spec`. Without a prompter the resolver runs in
/// batch mode and fills unanswerable fields from defaults or placeholders.
pub fn collect_fields(
    spec: &LicenseSpec,
    overrides: &Context,
    identity: &dyn IdentityProvider,
    mut prompter: Option<&mut dyn Prompter>,
) -> Context {
    let mut values = Context::new();
    for (key, value) in overrides {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            values.insert(key.clone(), trimmed.to_string());
        }
    }

    for field in spec.fields {
        // Blank overrides were dropped above, so presence means a real value
        if values.contains_key(field.key) {
            continue;
        }
        let default = field
            .default
            .and_then(|source| source.compute(identity, &values))
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        let value = match prompter.as_deref_mut() {
            None => batch_value(field, &default),
            Some(prompter) => ask_until_valid(field, &default, prompter),
        };
        values.insert(field.key.to_string(), value);
    }

    if let Some(step) = spec.post_process {
        step.apply(&mut values);
    }
    values
}

/// Resolution used when prompting is off: the default, or the empty string
/// for optional fields, or the placeholder
fn batch_value(field: &FieldSpec, default: &str) -> String {
    if !default.is_empty() {
        default.to_string()
    } else if field.optional {
        String::new()
    } else {
        field.placeholder_text()
    }
}

fn ask_until_valid(field: &FieldSpec, default: &str, prompter: &mut dyn Prompter) -> String {
    let fallback = batch_value(field, default);
    let fallback = (!fallback.is_empty()).then_some(fallback);
    loop {
        match prompter.ask(field.prompt, fallback.as_deref()) {
            // End of input answers this field the way batch mode would,
            // which also bounds the retry loop on a closed stream
            Answer::Eof => return fallback.unwrap_or_default(),
            Answer::Text(text) => {
                let text = text.trim();
                let text = if text.is_empty() {
                    fallback.as_deref().unwrap_or("")
                } else {
                    text
                };
                if !text.is_empty() || field.optional {
                    return text.to_string();
                }
                eprintln!("This field is required.");
            }
        }
    }
}
