//! String predicates, trimming and positional templates

use std::fmt::Display;
use std::sync::OnceLock;

use regex::Regex;
use tracing::instrument;

use crate::errors::FillError;

/// Null/empty/whitespace predicates. `None` counts as null.
pub trait NullOrEmpty {
    fn is_null_or_empty(&self) -> bool;
    fn is_null_or_whitespace(&self) -> bool;
}

impl NullOrEmpty for str {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl NullOrEmpty for String {
    fn is_null_or_empty(&self) -> bool {
        self.as_str().is_null_or_empty()
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.as_str().is_null_or_whitespace()
    }
}

impl<S: AsRef<str>> NullOrEmpty for Option<S> {
    fn is_null_or_empty(&self) -> bool {
        self.as_ref().map_or(true, |s| s.as_ref().is_null_or_empty())
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.as_ref()
            .map_or(true, |s| s.as_ref().is_null_or_whitespace())
    }
}

/// Character-based trimming and template filling on `str`.
///
/// Counts are in `char`s. Asking for more characters than the string holds
/// returns `None`.
pub trait StrExt {
    fn remove_first_char(&self) -> Option<&str>;
    fn remove_first(&self, count: usize) -> Option<&str>;
    fn remove_last_char(&self) -> Option<&str>;
    fn remove_last(&self, count: usize) -> Option<&str>;
    fn fill<D: Display>(&self, args: &[D]) -> Result<String, FillError>;
}

impl StrExt for str {
    fn remove_first_char(&self) -> Option<&str> {
        self.remove_first(1)
    }

    fn remove_first(&self, count: usize) -> Option<&str> {
        if count == 0 {
            return Some(self);
        }
        let (idx, c) = self.char_indices().nth(count - 1)?;
        Some(&self[idx + c.len_utf8()..])
    }

    fn remove_last_char(&self) -> Option<&str> {
        self.remove_last(1)
    }

    fn remove_last(&self, count: usize) -> Option<&str> {
        if count == 0 {
            return Some(self);
        }
        let (idx, _) = self.char_indices().nth_back(count - 1)?;
        Some(&self[..idx])
    }

    fn fill<D: Display>(&self, args: &[D]) -> Result<String, FillError> {
        fill(self, args)
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{(\d+)(?:\s*,\s*(-?\d+))?(?::[^{}]*)?\}")
            .expect("placeholder pattern is valid")
    })
}

/// Replaces `{index}`, `{index,alignment}` and `{index:format}` placeholders
/// with the matching argument.
///
/// `{{` and `}}` produce literal braces. Format text after `:` is accepted
/// and ignored. A positive alignment right-aligns in that many columns, a
/// negative one left-aligns. With no arguments the template is returned
/// untouched.
#[instrument(level = "trace", skip(args))]
pub fn fill<D: Display>(template: &str, args: &[D]) -> Result<String, FillError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        push_literal(&mut out, template, last, whole.start())?;
        last = whole.end();

        match caps.get(1) {
            None if whole.as_str() == "{{" => out.push('{'),
            None => out.push('}'),
            Some(digits) => {
                let index = digits
                    .as_str()
                    .parse::<usize>()
                    .map_err(|_| FillError::Malformed {
                        position: whole.start(),
                    })?;
                let value = args.get(index).ok_or(FillError::IndexOutOfRange {
                    index,
                    count: args.len(),
                })?;
                let text = value.to_string();
                match caps.get(2).map(|m| m.as_str().parse::<i64>()) {
                    None => out.push_str(&text),
                    Some(Ok(width)) => push_aligned(&mut out, &text, width),
                    Some(Err(_)) => {
                        return Err(FillError::Malformed {
                            position: whole.start(),
                        })
                    }
                }
            }
        }
    }
    push_literal(&mut out, template, last, template.len())?;

    Ok(out)
}

/// Copies `template[start..end]`, rejecting stray braces.
fn push_literal(out: &mut String, template: &str, start: usize, end: usize) -> Result<(), FillError> {
    let literal = &template[start..end];
    if let Some(offset) = literal.find(['{', '}']) {
        return Err(FillError::Malformed {
            position: start + offset,
        });
    }
    out.push_str(literal);
    Ok(())
}

fn push_aligned(out: &mut String, text: &str, width: i64) {
    let columns = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
    let pad = columns.saturating_sub(text.chars().count());
    if width >= 0 {
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(text);
    } else {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(pad));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_counts_chars_not_bytes() {
        assert_eq!("héllo".remove_first(2), Some("llo"));
        assert_eq!("héllo".remove_last(4), Some("h"));
        assert_eq!("abc".remove_last(3), Some(""));
        assert_eq!("abc".remove_first(4), None);
        assert_eq!("abc".remove_last(4), None);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(fill("[{0,5}]", &["ab"]).unwrap(), "[   ab]");
        assert_eq!(fill("[{0,-5}]", &["ab"]).unwrap(), "[ab   ]");
        assert_eq!(fill("[{0,1}]", &["ab"]).unwrap(), "[ab]");
    }

    #[test]
    fn test_stray_brace_position() {
        assert_eq!(
            fill("ab}cd {0}", &["x"]),
            Err(FillError::Malformed { position: 2 })
        );
    }
}
