//! Incremental printer for generated declarations.

use tygen_codegen::{CanonicalFormatter, FormatConfig, FormatError, SourceFormatter};

use crate::ast::Declaration;

/// An item awaiting printing: raw text or a declaration node.
#[derive(Debug, Clone, PartialEq)]
pub enum Printable {
    Text(String),
    Declaration(Declaration),
}

impl From<Declaration> for Printable {
    fn from(declaration: Declaration) -> Self {
        Self::Declaration(declaration)
    }
}

impl From<String> for Printable {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Printable {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Accumulates printable items and renders them to formatted source text.
///
/// The queue is private to one printer instance; concurrent generation
/// passes each need their own printer. Rendering folds the queue in order
/// and re-formats the accumulated text after every step, so the
/// intermediate strings stay syntactically valid and a malformed item fails
/// at its own increment instead of at the end of the batch. Queues hold one
/// declaration per schema type, so the repeated formatting stays cheap.
#[derive(Debug, Clone)]
pub struct Printer<F: SourceFormatter = CanonicalFormatter> {
    queue: Vec<Printable>,
    formatter: F,
    config: FormatConfig,
}

impl Printer<CanonicalFormatter> {
    /// A printer using the canonical formatter with TypeScript styling.
    pub fn new() -> Self {
        Self::with_formatter(CanonicalFormatter, FormatConfig::typescript())
    }
}

impl Default for Printer<CanonicalFormatter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SourceFormatter> Printer<F> {
    /// A printer using a caller-supplied formatter and configuration.
    pub fn with_formatter(formatter: F, config: FormatConfig) -> Self {
        Self {
            queue: Vec::new(),
            formatter,
            config,
        }
    }

    /// Append an item to the queue, preceded by two blank-line separators.
    pub fn enqueue(&mut self, printable: impl Into<Printable>) {
        self.queue.push(Printable::Text("\n".to_string()));
        self.queue.push(Printable::Text("\n".to_string()));
        self.queue.push(printable.into());
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Render the queue to formatted text without consuming it.
    ///
    /// May be called mid-accumulation for diagnostics. A formatting failure
    /// means upstream generation produced invalid output; it propagates
    /// unchanged and the queue is left intact.
    pub fn print(&self) -> Result<String, FormatError> {
        self.queue.iter().try_fold(String::new(), |mut doc, item| {
            match item {
                Printable::Text(text) => doc.push_str(text),
                Printable::Declaration(declaration) => doc.push_str(&declaration.render()),
            }
            self.formatter.format(&doc, &self.config)
        })
    }

    /// Render the queue, then clear it.
    pub fn print_and_clear(&mut self) -> Result<String, FormatError> {
        let output = self.print()?;
        self.queue.clear();
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{TsType, TypeAlias};

    fn alias(name: &str) -> Declaration {
        Declaration::TypeAlias(TypeAlias::new(name, TsType::Any).exported())
    }

    #[test]
    fn test_empty_printer_prints_nothing() {
        let printer = Printer::new();
        assert!(printer.is_empty());
        assert_eq!(printer.print().unwrap(), "");
    }

    #[test]
    fn test_single_declaration() {
        let mut printer = Printer::new();
        printer.enqueue(alias("Date"));
        assert_eq!(printer.print().unwrap(), "export type Date = any;\n");
    }

    #[test]
    fn test_queue_order_and_blank_line_separation() {
        let mut printer = Printer::new();
        printer.enqueue(alias("A"));
        printer.enqueue(alias("B"));
        printer.enqueue(alias("C"));
        assert_eq!(
            printer.print_and_clear().unwrap(),
            "export type A = any;\n\nexport type B = any;\n\nexport type C = any;\n"
        );
    }

    #[test]
    fn test_print_is_non_destructive() {
        let mut printer = Printer::new();
        printer.enqueue(alias("A"));
        let first = printer.print().unwrap();
        let second = printer.print().unwrap();
        assert_eq!(first, second);
        assert!(!printer.is_empty());
    }

    #[test]
    fn test_print_and_clear_empties_the_queue() {
        let mut printer = Printer::new();
        printer.enqueue(alias("A"));
        assert!(!printer.print_and_clear().unwrap().is_empty());
        assert!(printer.is_empty());
        assert_eq!(printer.print_and_clear().unwrap(), "");
    }

    #[test]
    fn test_raw_text_items() {
        let mut printer = Printer::new();
        printer.enqueue("// Generated header");
        printer.enqueue(alias("Date"));
        assert_eq!(
            printer.print_and_clear().unwrap(),
            "// Generated header\n\nexport type Date = any;\n"
        );
    }

    #[test]
    fn test_malformed_item_fails_synchronously() {
        let mut printer = Printer::new();
        printer.enqueue("interface Broken {");
        let err = printer.print().unwrap_err();
        assert_eq!(err, FormatError::UnclosedBrackets { count: 1 });
        // The queue is left intact on failure.
        assert!(!printer.is_empty());
    }

    #[test]
    fn test_enqueue_after_flush_accumulates_again() {
        let mut printer = Printer::new();
        printer.enqueue(alias("A"));
        printer.print_and_clear().unwrap();
        printer.enqueue(alias("B"));
        assert_eq!(
            printer.print_and_clear().unwrap(),
            "export type B = any;\n"
        );
    }
}
