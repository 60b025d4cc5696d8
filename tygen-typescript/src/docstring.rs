//! Schema descriptions to JSDoc comment blocks.

use tygen_codegen::{CodeFragment, Renderable};

/// A formatted JSDoc comment block.
#[derive(Debug, Clone, PartialEq)]
pub struct Docstring {
    lines: Vec<String>,
}

impl Docstring {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The comment body between the `/*` and `*/` markers.
    pub fn body(&self) -> String {
        match self.lines.as_slice() {
            [line] => format!("* {} ", line),
            lines => {
                let mut body = String::from("*");
                for line in lines {
                    body.push_str("\n * ");
                    body.push_str(line);
                }
                body
            }
        }
    }
}

impl Renderable for Docstring {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.lines.as_slice() {
            [line] => vec![CodeFragment::line(format!("/** {} */", line))],
            lines => {
                let mut fragments = vec![CodeFragment::line("/**")];
                for line in lines {
                    fragments.push(CodeFragment::line(format!(" * {}", line)));
                }
                fragments.push(CodeFragment::line(" */"));
                fragments
            }
        }
    }
}

/// Turn a free-text description into a JSDoc block.
///
/// Indentation common to all lines is removed, leading blank lines and
/// trailing whitespace are dropped, and each remaining line loses its
/// trailing whitespace. Returns `None` when nothing remains.
pub fn docstring(text: &str) -> Option<Docstring> {
    let dedented = strip_common_indent(text);
    let trimmed = dedented.trim_start_matches(['\n', '\r']).trim_end();
    if trimmed.trim().is_empty() {
        return None;
    }

    let lines = trimmed
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    Some(Docstring { lines })
}

/// Remove the indentation shared by every non-blank line.
fn strip_common_indent(text: &str) -> String {
    let common = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    if common == 0 {
        return text.to_string();
    }

    text.lines()
        .map(|line| line.get(common..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}
