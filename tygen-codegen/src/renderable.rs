//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Fragments form an intermediate representation between declaration nodes
//! and the final string output, so nodes can be composed and rendered
//! without direct coupling to [`CodeBuilder`](crate::CodeBuilder).

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without newline.
    Raw(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a raw text fragment.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(CodeFragment::raw("raw"), CodeFragment::Raw("raw".to_string()));
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "interface Foo {",
            vec![CodeFragment::line("bar: string;")],
            Some("}".to_string()),
        );
        match block {
            CodeFragment::Block { header, body, close } => {
                assert_eq!(header, "interface Foo {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
