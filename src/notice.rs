//! Pure string helpers shared by several license definitions
//!
//! These build the copyright/attribution fragments substituted into GNU
//! and BSD-style templates. All of them read the resolved context and
//! tolerate absent keys, returning the best string they can.

use crate::registry::Context;

fn trimmed<'a>(context: &'a Context, key: &str) -> &'a str {
    context.get(key).map(|value| value.trim()).unwrap_or("")
}

/// `"holder <email>"` when both are non-empty after trimming, else just
/// the trimmed holder. The email is silently dropped when absent.
pub fn holder_with_email(context: &Context, holder_key: &str, email_key: &str) -> String {
    let holder = trimmed(context, holder_key);
    let email = trimmed(context, email_key);
    if !holder.is_empty() && !email.is_empty() {
        format!("{holder} <{email}>")
    } else {
        holder.to_string()
    }
}

/// One-line description of the program: non-empty program name,
/// description, and URL joined with `" - "`, with the email appended as a
/// final `<email>` segment when present. Falls back to `"This program"`
/// when nothing is known.
pub fn program_tagline(context: &Context) -> String {
    let mut pieces: Vec<String> = ["program_name", "program_description", "program_url"]
        .iter()
        .map(|key| trimmed(context, key))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();
    let email = trimmed(context, "email");
    if !email.is_empty() {
        pieces.push(format!("<{email}>"));
    }
    if pieces.is_empty() {
        "This program".to_string()
    } else {
        pieces.join(" - ")
    }
}

/// Append a period unless the text is empty or already ends with one
pub fn terminate_sentence(text: &str) -> String {
    if text.is_empty() || text.ends_with('.') {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// One-line GPLv2-style notice, indented to match the template block it
/// replaces
pub fn program_notice_line(context: &Context) -> String {
    let line = terminate_sentence(&program_tagline(context));
    let year = trimmed(context, "year");
    let holder = holder_with_email(context, "copyright_holder", "email");
    format!("     {line} Copyright (C) {year} {holder}")
}

/// Two-line LGPLv2.1-style notice: the tagline and a copyright line, both
/// indented to match the template block they replace
pub fn library_notice_block(context: &Context) -> String {
    let tagline = terminate_sentence(&program_tagline(context));
    let year = trimmed(context, "year");
    let holder = holder_with_email(context, "copyright_holder", "email");
    format!("     {tagline}\n     Copyright (C) {year} {holder}")
}
