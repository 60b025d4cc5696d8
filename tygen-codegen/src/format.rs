//! Source formatting seam.
//!
//! Rendered declarations pass through a [`SourceFormatter`] before they are
//! handed back to the caller. The formatter canonicalizes whitespace and
//! indentation and rejects text that is not structurally well-formed, so a
//! malformed declaration surfaces as an error at the increment that produced
//! it rather than in the final output.

use thiserror::Error;

use crate::Indent;

/// Fixed style configuration passed through to the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub indent: Indent,
    /// Target language directive, forced by the backend that owns the
    /// printer.
    pub language: &'static str,
}

impl FormatConfig {
    /// Configuration for TypeScript output: 2-space indentation.
    pub fn typescript() -> Self {
        Self {
            indent: Indent::TYPESCRIPT,
            language: "typescript",
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::typescript()
    }
}

/// Errors raised when source text cannot be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unbalanced '{found}' on line {line}")]
    UnbalancedCloser { found: char, line: usize },

    #[error("{count} unclosed bracket(s) at end of input")]
    UnclosedBrackets { count: usize },

    #[error("unterminated string literal on line {line}")]
    UnterminatedString { line: usize },

    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment { line: usize },
}

/// A canonicalizing pretty-printer for rendered source text.
pub trait SourceFormatter {
    fn format(&self, source: &str, config: &FormatConfig) -> Result<String, FormatError>;
}

/// Default [`SourceFormatter`] implementation.
///
/// Re-derives indentation from bracket depth, ignoring brackets inside
/// string literals and comments. Leading blank lines are stripped, runs of
/// blank lines collapse to one, and block-comment continuation lines are
/// aligned one column in. A single trailing blank line is preserved so that
/// separators between incrementally printed items survive re-formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl SourceFormatter for CanonicalFormatter {
    fn format(&self, source: &str, config: &FormatConfig) -> Result<String, FormatError> {
        let mut out = String::with_capacity(source.len());
        let mut depth: usize = 0;
        let mut blank_pending = false;
        let mut in_comment = false;
        let mut comment_line = 0;

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                if !out.is_empty() {
                    blank_pending = true;
                }
                continue;
            }

            let starts_in_comment = in_comment;
            let mut running = depth as isize;
            let mut chars = trimmed.chars().peekable();
            while let Some(c) = chars.next() {
                if in_comment {
                    if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        in_comment = false;
                    }
                    continue;
                }
                match c {
                    '"' | '\'' | '`' => {
                        let mut closed = false;
                        while let Some(next) = chars.next() {
                            if next == '\\' {
                                chars.next();
                            } else if next == c {
                                closed = true;
                                break;
                            }
                        }
                        if !closed {
                            return Err(FormatError::UnterminatedString { line });
                        }
                    }
                    '/' if chars.peek() == Some(&'/') => break,
                    '/' if chars.peek() == Some(&'*') => {
                        chars.next();
                        in_comment = true;
                        comment_line = line;
                    }
                    '{' | '(' | '[' => running += 1,
                    '}' | ')' | ']' => {
                        running -= 1;
                        if running < 0 {
                            return Err(FormatError::UnbalancedCloser { found: c, line });
                        }
                    }
                    _ => {}
                }
            }

            // Lines that open with closing brackets sit one level out per
            // leading closer.
            let leading_closers = if starts_in_comment {
                0
            } else {
                trimmed
                    .chars()
                    .take_while(|c| matches!(c, '}' | ')' | ']'))
                    .count()
            };
            let this_indent = depth.saturating_sub(leading_closers);

            if blank_pending {
                out.push('\n');
                blank_pending = false;
            }
            for _ in 0..this_indent {
                out.push_str(config.indent.as_str());
            }
            if starts_in_comment && trimmed.starts_with('*') {
                out.push(' ');
            }
            out.push_str(trimmed);
            out.push('\n');

            depth = running as usize;
        }

        if in_comment {
            return Err(FormatError::UnterminatedComment { line: comment_line });
        }
        if depth != 0 {
            return Err(FormatError::UnclosedBrackets { count: depth });
        }
        if blank_pending {
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(source: &str) -> Result<String, FormatError> {
        CanonicalFormatter.format(source, &FormatConfig::typescript())
    }

    #[test]
    fn test_reindents_from_bracket_depth() {
        let source = "export interface Foo {\nbar: string;\n      baz: number;\n}\n";
        assert_eq!(
            format(source).unwrap(),
            "export interface Foo {\n  bar: string;\n  baz: number;\n}\n"
        );
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert_eq!(format("").unwrap(), "");
        assert_eq!(format("\n\n  \n").unwrap(), "");
    }

    #[test]
    fn test_strips_leading_blanks_and_collapses_runs() {
        let source = "\n\nconst a = 1;\n\n\n\nconst b = 2;\n";
        assert_eq!(format(source).unwrap(), "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_preserves_single_trailing_blank_line() {
        assert_eq!(format("const a = 1;\n\n\n").unwrap(), "const a = 1;\n\n");
        // Idempotent on its own output.
        assert_eq!(format("const a = 1;\n\n").unwrap(), "const a = 1;\n\n");
    }

    #[test]
    fn test_brackets_inside_strings_are_ignored() {
        let source = "const a = \"{[(\";\nconst b = '}';\n";
        assert_eq!(format(source).unwrap(), source);
    }

    #[test]
    fn test_brackets_inside_comments_are_ignored() {
        let source = "// not a block {\nconst a = 1;\n/* { ( [ */\nconst b = 2;\n";
        assert_eq!(
            format(source).unwrap(),
            "// not a block {\nconst a = 1;\n/* { ( [ */\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_block_comment_continuation_alignment() {
        let source = "/**\n* A review\n*/\nexport type Foo = any;\n";
        assert_eq!(
            format(source).unwrap(),
            "/**\n * A review\n */\nexport type Foo = any;\n"
        );
    }

    #[test]
    fn test_unbalanced_closer() {
        assert_eq!(
            format("}\n"),
            Err(FormatError::UnbalancedCloser { found: '}', line: 1 })
        );
    }

    #[test]
    fn test_unclosed_brackets() {
        assert_eq!(
            format("interface Foo {\n"),
            Err(FormatError::UnclosedBrackets { count: 1 })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            format("const a = \"oops;\n"),
            Err(FormatError::UnterminatedString { line: 1 })
        );
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(
            format("/** dangling\nconst a = 1;\n"),
            Err(FormatError::UnterminatedComment { line: 1 })
        );
    }

    #[test]
    fn test_idempotent_on_formatted_output() {
        let source = "export enum Color {\nRED = \"RED\",\n}\n";
        let once = format(source).unwrap();
        assert_eq!(format(&once).unwrap(), once);
    }
}
