//! Line classification for `.conf` rewrite files
//!
//! Recognized shapes:
//!
//! ```text
//! #start Zeta# free text          character marker
//! <pattern> url 302 <target>      enabled rule
//! #!#<pattern> url 302 <target>   disabled rule
//! #! <pattern> url 302 <target>   disabled rule
//! # anything else                 comment
//! ```

use crate::error::{ConvertError, ConvertResult};

/// Token separating the source pattern from the redirect target
pub const RULE_SEPARATOR: &str = " url 302 ";

/// Comment prefix announcing the character for the following rules
pub const CHARACTER_MARKER: &str = "#start ";

const COMMENT: char = '#';

// Longest prefix first
const DISABLED_PREFIXES: [&str; 2] = ["#!#", "#!"];

/// Category of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming
    Blank,
    /// Comment or any other line without a rule
    Ignored,
    /// Character marker with the announced name
    CharacterMarker(&'a str),
    /// Rule line with its prefix stripped
    Rule { enabled: bool, body: &'a str },
}

/// Source pattern and target URL of a rule line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParts<'a> {
    pub pattern: &'a str,
    pub target: &'a str,
}

/// Split content into lines on `\r\n`, `\n` or a bare `\r`
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                let line = &rest[..i];
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Classify a raw line; surrounding whitespace is ignored
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with(COMMENT) && !line.contains(RULE_SEPARATOR) {
        return match line.strip_prefix(CHARACTER_MARKER) {
            Some(rest) => {
                let name = rest.split(COMMENT).next().unwrap_or_default().trim();
                LineKind::CharacterMarker(name)
            }
            None => LineKind::Ignored,
        };
    }

    let (enabled, body) = match DISABLED_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(*prefix))
    {
        Some(rest) => (false, rest.trim()),
        None if line.starts_with(COMMENT) => return LineKind::Ignored,
        None => (true, line),
    };

    if !body.contains(RULE_SEPARATOR) {
        return LineKind::Ignored;
    }

    LineKind::Rule { enabled, body }
}

/// Split a rule body into pattern and target
///
/// # Errors
///
/// Returns `ConvertError::MalformedLine` unless the separator yields exactly
/// two non-empty trimmed parts.
pub fn split_rule(body: &str, line_no: usize) -> ConvertResult<RuleParts<'_>> {
    let mut parts = body.split(RULE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(pattern), Some(target), None)
            if !pattern.trim().is_empty() && !target.trim().is_empty() =>
        {
            Ok(RuleParts {
                pattern: pattern.trim(),
                target: target.trim(),
            })
        }
        _ => Err(ConvertError::MalformedLine {
            line: line_no,
            content: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_endings() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\n\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("x\r").collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t "), LineKind::Blank);
    }

    #[test]
    fn test_plain_comment() {
        assert_eq!(classify_line("# just a note"), LineKind::Ignored);
        assert_eq!(classify_line("#!/bin/rewrite"), LineKind::Ignored);
    }

    #[test]
    fn test_character_marker() {
        assert_eq!(
            classify_line("#start Zeta# some comment"),
            LineKind::CharacterMarker("Zeta")
        );
        assert_eq!(
            classify_line("  #start Vira Lilith  "),
            LineKind::CharacterMarker("Vira Lilith")
        );
        // The marker needs the trailing space
        assert_eq!(classify_line("#startZeta"), LineKind::Ignored);
    }

    #[test]
    fn test_enabled_rule() {
        assert_eq!(
            classify_line("a.png url 302 https://x/a.png"),
            LineKind::Rule {
                enabled: true,
                body: "a.png url 302 https://x/a.png"
            }
        );
    }

    #[test]
    fn test_disabled_rule_variants() {
        assert_eq!(
            classify_line("#! old.png url 302 https://example.com/x/old.png"),
            LineKind::Rule {
                enabled: false,
                body: "old.png url 302 https://example.com/x/old.png"
            }
        );
        assert_eq!(
            classify_line("#!#old.png url 302 https://example.com/x/old.png"),
            LineKind::Rule {
                enabled: false,
                body: "old.png url 302 https://example.com/x/old.png"
            }
        );
    }

    #[test]
    fn test_other_comment_with_separator_is_ignored() {
        assert_eq!(
            classify_line("# a.png url 302 https://x/a.png"),
            LineKind::Ignored
        );
    }

    #[test]
    fn test_line_without_separator() {
        assert_eq!(classify_line("hostname = example.com"), LineKind::Ignored);
        assert_eq!(classify_line("a.png url 302"), LineKind::Ignored);
        assert_eq!(classify_line("a.png url 307 https://x/a.png"), LineKind::Ignored);
    }

    #[test]
    fn test_split_rule() {
        let parts = split_rule("a.png url 302 https://x/a.png", 1).unwrap();
        assert_eq!(parts.pattern, "a.png");
        assert_eq!(parts.target, "https://x/a.png");
    }

    #[test]
    fn test_split_rule_too_many_parts() {
        let err = split_rule("a url 302 b url 302 c", 7).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedLine { line: 7, .. }));
    }

    #[test]
    fn test_split_rule_empty_part() {
        assert!(split_rule("a url 302  ", 1).is_err());
    }
}
