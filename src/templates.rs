//! Embedded license templates
//!
//! Template bodies are compiled into the binary so the tool works without
//! an installation directory. Each body is normalized to end with exactly
//! one newline.

use crate::error::LicenseError;

static TEMPLATES: &[(&str, &str)] = &[
    (
        "AGPL-3.0-only.txt",
        include_str!("../templates/AGPL-3.0-only.txt"),
    ),
    (
        "AGPL-3.0-or-later.txt",
        include_str!("../templates/AGPL-3.0-or-later.txt"),
    ),
    ("Apache-2.0.txt", include_str!("../templates/Apache-2.0.txt")),
    (
        "BSD-2-Clause.txt",
        include_str!("../templates/BSD-2-Clause.txt"),
    ),
    (
        "BSD-3-Clause.txt",
        include_str!("../templates/BSD-3-Clause.txt"),
    ),
    ("BSL-1.0.txt", include_str!("../templates/BSL-1.0.txt")),
    ("CC0-1.0.txt", include_str!("../templates/CC0-1.0.txt")),
    ("EPL-2.0.txt", include_str!("../templates/EPL-2.0.txt")),
    (
        "GPL-2.0-only.txt",
        include_str!("../templates/GPL-2.0-only.txt"),
    ),
    (
        "GPL-2.0-or-later.txt",
        include_str!("../templates/GPL-2.0-or-later.txt"),
    ),
    (
        "GPL-3.0-only.txt",
        include_str!("../templates/GPL-3.0-only.txt"),
    ),
    (
        "GPL-3.0-or-later.txt",
        include_str!("../templates/GPL-3.0-or-later.txt"),
    ),
    ("ISC.txt", include_str!("../templates/ISC.txt")),
    (
        "LGPL-2.1-only.txt",
        include_str!("../templates/LGPL-2.1-only.txt"),
    ),
    (
        "LGPL-2.1-or-later.txt",
        include_str!("../templates/LGPL-2.1-or-later.txt"),
    ),
    (
        "LGPL-3.0-or-later.txt",
        include_str!("../templates/LGPL-3.0-or-later.txt"),
    ),
    ("MIT.txt", include_str!("../templates/MIT.txt")),
    ("MPL-2.0.txt", include_str!("../templates/MPL-2.0.txt")),
    ("Unlicense.txt", include_str!("../templates/Unlicense.txt")),
    ("WTFPL.txt", include_str!("../templates/WTFPL.txt")),
];

/// Fetch an embedded template body by resource name
pub fn load(filename: &str) -> Result<&'static str, LicenseError> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, body)| *body)
        .ok_or_else(|| LicenseError::TemplateNotFound {
            filename: filename.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_every_catalog_template_is_embedded() {
        for spec in registry::all() {
            assert!(load(spec.filename).is_ok(), "missing {}", spec.filename);
        }
    }

    #[test]
    fn test_unknown_template_errors() {
        let err = load("GFDL-1.3.txt").expect_err("not embedded");
        assert!(err.to_string().contains("GFDL-1.3.txt"));
    }

    #[test]
    fn test_bodies_end_with_single_newline() {
        for (name, body) in TEMPLATES {
            assert!(body.ends_with('\n'), "{name} lacks trailing newline");
            assert!(!body.ends_with("\n\n"), "{name} has extra trailing newlines");
        }
    }

    #[test]
    fn test_substitution_tokens_present() {
        let mit = load("MIT.txt").expect("embedded");
        assert!(mit.contains("<year>"));
        assert!(mit.contains("<copyright holders>"));

        let apache = load("Apache-2.0.txt").expect("embedded");
        assert!(apache.contains("[yyyy]"));
        assert!(apache.contains("[name of copyright owner]"));

        let gpl2 = load("GPL-2.0-only.txt").expect("embedded");
        assert!(gpl2.contains(
            "     one line to give the program's name and an idea of what it does. Copyright (C) yyyy name of author"
        ));

        let lgpl21 = load("LGPL-2.1-only.txt").expect("embedded");
        assert!(lgpl21.contains(
            "     one line to give the library's name and an idea of what it does.\n     Copyright (C) year  name of author"
        ));
    }

    #[test]
    fn test_lgpl3_supplement_has_no_appendix_tokens() {
        // The LGPLv3 text we ship is the bare supplement to GPLv3; its
        // rendering rules must find nothing to replace.
        let body = load("LGPL-3.0-or-later.txt").expect("embedded");
        assert!(!body.contains("<year>"));
        assert!(!body.contains("<name of author>"));
        assert!(!body.contains("one line to give"));
    }
}
