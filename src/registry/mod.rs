//! License registry
//!
//! This module owns the built-in catalog and the identifier index over it.
//! Lookup is forgiving: identifiers are normalized before comparison, so
//! `Apache-2.0`, `apache2.0`, and `APACHE 2.0` all name the same license.

mod catalog;
mod spec;

pub use spec::{
    Context, FieldDefault, FieldSpec, LicenseSpec, PostProcess, Replacement, ReplacementValue,
    NOTICE_KEY,
};

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::LicenseError;

/// Lowercase the identifier and keep only alphanumeric characters
pub fn normalize(identifier: &str) -> String {
    identifier
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

// Keys are indexed before aliases, and registration order decides ties:
// the last entry wins. The only cross-license tie is the `lgpl21` family
// of shorthands, which lands on LGPL-2.1-only.
static INDEX: Lazy<HashMap<String, &'static LicenseSpec>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for spec in catalog::CATALOG {
        index.insert(normalize(spec.key), spec);
    }
    for spec in catalog::CATALOG {
        for alias in spec.aliases {
            index.insert(normalize(alias), spec);
        }
    }
    index
});

/// Look up a license by canonical identifier or alias
pub fn resolve(identifier: &str) -> Result<&'static LicenseSpec, LicenseError> {
    INDEX
        .get(&normalize(identifier))
        .copied()
        .ok_or_else(|| LicenseError::UnknownLicense {
            identifier: identifier.to_string(),
        })
}

/// All supported licenses in listing order
pub fn all() -> &'static [LicenseSpec] {
    catalog::CATALOG
}
