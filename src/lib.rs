//! licenseme - Generate popular open source licenses from SPDX templates
//!
//! This library resolves a license identifier to its definition, collects
//! the fields the license needs, and renders the filled-in text. The
//! `licenseme` binary layers argument parsing, interactive prompting, and
//! file output on top.
//!
//! # Example
//!
//! ```rust
//! use licenseme::{generate, Config, Context, SystemIdentity};
//!
//! let identity = SystemIdentity::new(Config::default());
//! let mut overrides = Context::new();
//! overrides.insert("year".to_string(), "2024".to_string());
//! overrides.insert("copyright_holder".to_string(), "Ann Example".to_string());
//!
//! let text = generate("mit", &overrides, &identity).unwrap();
//! assert!(text.contains("MIT License"));
//! assert!(text.contains("2024 Ann Example"));
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod notice;
pub mod prompt;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod templates;

pub use config::{Config, ConfigError};
pub use error::LicenseError;
pub use identity::{IdentityProvider, SystemIdentity};
pub use prompt::{Answer, Prompter, TerminalPrompter};
pub use registry::{Context, LicenseSpec};

/// Resolve a license, fill its fields without prompting, and render it.
///
/// This is the batch entry point for callers that already know their
/// overrides. Fields the overrides and `identity` cannot answer fall back
/// to placeholders, so the call never blocks.
pub fn generate(
    identifier: &str,
    overrides: &Context,
    identity: &dyn IdentityProvider,
) -> Result<String, LicenseError> {
    let spec = registry::resolve(identifier)?;
    let context = resolve::collect_fields(spec, overrides, identity, None);
    render::render(spec, &context)
}
