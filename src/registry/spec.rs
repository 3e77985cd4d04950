//! Static data model for license definitions
//!
//! A [`LicenseSpec`] describes everything needed to render one license:
//! which fields to collect, how to compute their defaults, and either a
//! set of token [`Replacement`]s applied to the template body or a
//! preamble template prepended to it. Computed behavior is expressed as
//! closed enums ([`FieldDefault`], [`ReplacementValue`], [`PostProcess`])
//! interpreted at render time, so the whole catalog stays `'static` data.

use std::collections::HashMap;

use crate::identity::IdentityProvider;
use crate::notice;

/// Resolved field values keyed by field name
pub type Context = HashMap<String, String>;

/// Context key that the notice post-processing steps fill in
pub const NOTICE_KEY: &str = "license_notice";

/// Source of a field's computed default value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Current calendar year
    CurrentYear,
    /// Author name guessed from the environment or git config
    AuthorName,
    /// Author email guessed from the environment or git config
    AuthorEmail,
    /// Name of the current working directory
    WorkingDirName,
}

impl FieldDefault {
    /// Compute the default, if one is available. The partially built
    /// context is passed so defaults may read earlier-resolved fields.
    pub fn compute(&self, identity: &dyn IdentityProvider, _context: &Context) -> Option<String> {
        match self {
            FieldDefault::CurrentYear => Some(identity.current_year()),
            FieldDefault::AuthorName => identity.full_name(),
            FieldDefault::AuthorEmail => identity.email(),
            FieldDefault::WorkingDirName => identity.working_dir_name(),
        }
    }
}

/// One field a license needs before it can be rendered
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Context key, unique within a spec
    pub key: &'static str,
    /// Human prompt shown in interactive mode
    pub prompt: &'static str,
    /// Optional computed default
    pub default: Option<FieldDefault>,
    /// Optional fields accept empty input; required fields never stay empty
    pub optional: bool,
    /// Fallback literal used when no default exists and prompts are skipped
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    /// The placeholder literal for this field, derived from the key when
    /// not set explicitly (`program_name` becomes `<program name>`).
    pub fn placeholder_text(&self) -> String {
        match self.placeholder {
            Some(text) => text.to_string(),
            None => format!("<{}>", self.key.replace('_', " ")),
        }
    }
}

/// Substitution string for a [`Replacement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementValue {
    /// Dereference a context key; an absent key falls back to the key
    /// text itself so the template keeps a visible marker
    Key(&'static str),
    /// `"holder <email>"` joined from the named holder key and `email`
    HolderWithEmail { holder_key: &'static str },
    /// One-line program tagline built from name/description/URL/email
    ProgramTagline,
}

impl ReplacementValue {
    pub fn evaluate(&self, context: &Context) -> String {
        match self {
            ReplacementValue::Key(key) => context
                .get(*key)
                .cloned()
                .unwrap_or_else(|| (*key).to_string()),
            ReplacementValue::HolderWithEmail { holder_key } => {
                notice::holder_with_email(context, holder_key, "email")
            }
            ReplacementValue::ProgramTagline => notice::program_tagline(context),
        }
    }
}

/// A token-substitution rule applied to the raw template text
#[derive(Debug, Clone)]
pub struct Replacement {
    /// Literal substrings to find in the template
    pub tokens: &'static [&'static str],
    /// What to substitute for every occurrence
    pub value: ReplacementValue,
}

/// Derived-value step run after all fields are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// One-line GPLv2-style notice stored under [`NOTICE_KEY`]
    ProgramNoticeLine,
    /// Two-line LGPLv2.1-style notice stored under [`NOTICE_KEY`]
    LibraryNoticeBlock,
}

impl PostProcess {
    /// Inject the derived value. An override that already supplied a
    /// non-empty notice wins, keeping `--set` the highest precedence.
    pub fn apply(&self, context: &mut Context) {
        if context.get(NOTICE_KEY).is_some_and(|v| !v.is_empty()) {
            return;
        }
        let value = match self {
            PostProcess::ProgramNoticeLine => notice::program_notice_line(context),
            PostProcess::LibraryNoticeBlock => notice::library_notice_block(context),
        };
        context.insert(NOTICE_KEY.to_string(), value);
    }
}

/// Immutable definition of one supported license
#[derive(Debug, Clone)]
pub struct LicenseSpec {
    /// Canonical SPDX-style identifier
    pub key: &'static str,
    /// Display name for listings
    pub name: &'static str,
    /// Embedded template resource name
    pub filename: &'static str,
    /// Alternate identifiers accepted by lookup
    pub aliases: &'static [&'static str],
    /// Fields in collection order
    pub fields: &'static [FieldSpec],
    /// Token-substitution rules, applied in order
    pub replacements: &'static [Replacement],
    /// Preamble format string prepended instead of in-place substitution
    pub preamble: Option<&'static str>,
    /// Optional derived-value step
    pub post_process: Option<PostProcess>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_text_prefers_explicit_literal() {
        let field = FieldSpec {
            key: "year",
            prompt: "Copyright year",
            default: None,
            optional: false,
            placeholder: Some("<year>"),
        };
        assert_eq!(field.placeholder_text(), "<year>");
    }

    #[test]
    fn test_placeholder_text_derived_from_key() {
        let field = FieldSpec {
            key: "program_name",
            prompt: "Program name",
            default: None,
            optional: false,
            placeholder: None,
        };
        assert_eq!(field.placeholder_text(), "<program name>");
    }

    #[test]
    fn test_key_value_dereferences_context() {
        let mut context = Context::new();
        context.insert("year".to_string(), "2024".to_string());
        assert_eq!(ReplacementValue::Key("year").evaluate(&context), "2024");
    }

    #[test]
    fn test_key_value_falls_back_to_literal() {
        let context = Context::new();
        assert_eq!(ReplacementValue::Key("year").evaluate(&context), "year");
    }

    #[test]
    fn test_post_process_keeps_existing_notice() {
        let mut context = Context::new();
        context.insert(NOTICE_KEY.to_string(), "     custom notice".to_string());
        PostProcess::ProgramNoticeLine.apply(&mut context);
        assert_eq!(context[NOTICE_KEY], "     custom notice");
    }

    #[test]
    fn test_post_process_builds_notice_line() {
        let mut context = Context::new();
        context.insert("year".to_string(), "2024".to_string());
        context.insert("copyright_holder".to_string(), "Ann".to_string());
        context.insert("program_name".to_string(), "frob".to_string());
        PostProcess::ProgramNoticeLine.apply(&mut context);
        assert_eq!(context[NOTICE_KEY], "     frob. Copyright (C) 2024 Ann");
    }
}
