//! Rendering of positional message templates.
//!
//! Failure details are produced from templates using `{0}`-style positional
//! placeholders, filled left-to-right from a slice of displayable arguments:
//!
//! ```
//! use outcome::types::template;
//!
//! let detail = template::render("expected {0}, got {1}", &[&3, &7]);
//! assert_eq!(detail, "expected 3, got 7");
//! ```
//!
//! `{{` and `}}` escape literal braces. A placeholder that names a missing
//! argument is a caller error and panics; surplus arguments are ignored.

use core::fmt::{Display, Write};

use crate::types::alloc_type::String;

/// Renders `template`, substituting each `{n}` placeholder with the `n`-th
/// argument.
///
/// # Panics
///
/// Panics when a placeholder references an argument that was not supplied,
/// or when a `{` opens a placeholder that is not of the form `{n}`.
#[must_use]
#[track_caller]
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let index = match take_index(&mut chars) {
                    Some(index) => index,
                    None => panic!("malformed placeholder in template {template:?}"),
                };
                match args.get(index) {
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => panic!(
                        "template {template:?} references argument {index} but only {} were supplied",
                        args.len()
                    ),
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Number of positional parameters a template expects: the highest
/// placeholder index referenced, plus one.
///
/// Malformed placeholders are skipped rather than counted, so this is safe
/// to call on arbitrary template strings.
#[must_use]
pub fn parameter_count(template: &str) -> usize {
    let mut count = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
            }
            '{' => {
                if let Some(index) = take_index(&mut chars) {
                    count = count.max(index + 1);
                }
            }
            _ => {}
        }
    }

    count
}

/// Consumes the digits and closing brace of a placeholder, returning its
/// index. Returns `None` without consuming the closer when the placeholder
/// is malformed.
fn take_index(chars: &mut core::iter::Peekable<core::str::Chars<'_>>) -> Option<usize> {
    let mut index = 0usize;
    let mut digits = 0u32;

    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        index = index * 10 + digit as usize;
        digits += 1;
        chars.next();
    }

    if digits > 0 && chars.peek() == Some(&'}') {
        chars.next();
        Some(index)
    } else {
        None
    }
}
