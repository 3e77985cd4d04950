//! Template rendering
//!
//! Turns a [`LicenseSpec`] plus a resolved field context into the final
//! license text. Substitution licenses replace literal tokens inside the
//! body; preamble licenses prepend a short formatted header instead. The
//! output always ends with exactly one newline.

use crate::error::LicenseError;
use crate::registry::{Context, LicenseSpec};
use crate::templates;

/// Render a license from its resolved field values
pub fn render(spec: &LicenseSpec, context: &Context) -> Result<String, LicenseError> {
    let mut text = templates::load(spec.filename)?.to_string();

    for replacement in spec.replacements {
        let value = replacement.value.evaluate(context);
        for token in replacement.tokens {
            text = text.replace(token, &value);
        }
    }

    if let Some(preamble) = spec.preamble {
        let rendered = format_preamble(preamble, context)?;
        let rendered = rendered.trim();
        if !rendered.is_empty() {
            text = format!("{rendered}\n\n{text}");
        }
    }

    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Minimal `{key}` substitution with `{{` / `}}` escapes. An unknown key,
/// or a `{` that never closes, fails with the key text seen so far.
fn format_preamble(template: &str, context: &Context) -> Result<String, LicenseError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let mut key = String::new();
                let mut closed = false;
                for next in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    key.push(next);
                }
                let value = if closed { context.get(&key) } else { None };
                match value {
                    Some(value) => output.push_str(value),
                    None => return Err(LicenseError::MissingField { key }),
                }
            }
            _ => output.push(c),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{self, PostProcess};
    use insta::assert_snapshot;

    fn context_of(pairs: &[(&str, &str)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mit_substitutes_year_and_holder() {
        let spec = registry::resolve("mit").expect("known license");
        let context = context_of(&[
            ("year", "2024"),
            ("copyright_holder", "Ann Example"),
            ("email", "ann@example.com"),
        ]);
        let rendered = render(spec, &context).expect("renders");
        assert!(rendered.contains("Copyright (c) 2024 Ann Example <ann@example.com>"));
        assert!(!rendered.contains("<year>"));
        assert!(!rendered.contains("<copyright holders>"));
    }

    #[test]
    fn test_mit_full_render() {
        let spec = registry::resolve("mit").expect("known license");
        let context = context_of(&[
            ("year", "2024"),
            ("copyright_holder", "Ann Example"),
            ("email", "ann@example.com"),
        ]);
        let rendered = render(spec, &context).expect("renders");
        assert_snapshot!(rendered, @r###"
MIT License

Copyright (c) 2024 Ann Example <ann@example.com>

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"###);
    }

    #[test]
    fn test_preamble_prepended_with_blank_line() {
        let spec = registry::resolve("cc0").expect("known license");
        let context = context_of(&[
            ("project_name", "frob"),
            ("year", "2024"),
            ("copyright_holder", "Ann"),
        ]);
        let rendered = render(spec, &context).expect("renders");
        assert!(rendered.starts_with("frob\nCopyright (c) 2024 Ann\n\nCreative Commons Legal Code"));
    }

    #[test]
    fn test_preamble_missing_field_errors() {
        let spec = registry::resolve("cc0").expect("known license");
        let err = render(spec, &Context::new()).expect_err("missing fields");
        assert!(err.to_string().contains("project_name"));
    }

    #[test]
    fn test_empty_preamble_prepends_nothing() {
        let spec = LicenseSpec {
            key: "ISC",
            name: "ISC License",
            filename: "ISC.txt",
            aliases: &[],
            fields: &[],
            replacements: &[],
            preamble: Some("{banner}"),
            post_process: None,
        };
        let context = context_of(&[("banner", "   ")]);
        let rendered = render(&spec, &context).expect("renders");
        assert_eq!(rendered, templates::load("ISC.txt").expect("embedded"));
    }

    #[test]
    fn test_preamble_brace_escapes() {
        let context = context_of(&[("year", "2024")]);
        assert_eq!(
            format_preamble("{{literal}} {year}", &context).expect("formats"),
            "{literal} 2024"
        );
    }

    #[test]
    fn test_unclosed_preamble_brace_errors() {
        let err = format_preamble("{year", &Context::new()).expect_err("unclosed");
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn test_gpl2_notice_replaces_sample_block() {
        let spec = registry::resolve("gpl2").expect("known license");
        let mut context = context_of(&[
            ("year", "2024"),
            ("copyright_holder", "Ann"),
            ("program_name", "frob"),
        ]);
        PostProcess::ProgramNoticeLine.apply(&mut context);
        let rendered = render(spec, &context).expect("renders");
        assert!(rendered.contains("     frob. Copyright (C) 2024 Ann"));
        assert!(!rendered.contains("one line to give the program's name"));
    }

    #[test]
    fn test_lgpl21_notice_replaces_sample_block() {
        let spec = registry::resolve("lgpl21").expect("known license");
        let mut context = context_of(&[
            ("year", "2024"),
            ("copyright_holder", "Ann"),
            ("program_name", "libfrob"),
        ]);
        PostProcess::LibraryNoticeBlock.apply(&mut context);
        let rendered = render(spec, &context).expect("renders");
        assert!(rendered.contains("     libfrob.\n     Copyright (C) 2024 Ann"));
        assert!(!rendered.contains("one line to give the library's name"));
    }

    #[test]
    fn test_lgpl3_body_passes_through_unchanged() {
        let spec = registry::resolve("lgpl3").expect("known license");
        let context = context_of(&[
            ("year", "2024"),
            ("copyright_holder", "Ann"),
            ("program_name", "libfrob"),
        ]);
        let rendered = render(spec, &context).expect("renders");
        assert_eq!(
            rendered,
            templates::load("LGPL-3.0-or-later.txt").expect("embedded")
        );
    }

    #[test]
    fn test_every_license_ends_with_single_newline() {
        let context = context_of(&[
            ("project_name", "frob"),
            ("year", "2024"),
            ("copyright_holder", "Ann"),
        ]);
        for spec in registry::all() {
            let rendered = render(spec, &context).expect(spec.key);
            assert!(rendered.ends_with('\n'), "{} lacks newline", spec.key);
            assert!(!rendered.ends_with("\n\n"), "{} has extra newlines", spec.key);
        }
    }
}
