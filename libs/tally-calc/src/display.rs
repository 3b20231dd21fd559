//! Display surface holding the expression text
//!
//! The text on the display is the only calculator state. Each keystroke reads
//! it once and writes it back once.

/// Display surface trait
///
/// Implementations can render to a terminal, a widget, or just keep the
/// text in memory.
pub trait DisplaySurface {
    /// Current expression text
    fn text(&self) -> &str;

    /// Replace the expression text
    fn set_text(&mut self, text: String);
}

/// In-memory display for tests and headless use
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryDisplay {
    text: String,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display that starts out showing `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DisplaySurface for MemoryDisplay {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for &mut D {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn set_text(&mut self, text: String) {
        (**self).set_text(text);
    }
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for Box<D> {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn set_text(&mut self, text: String) {
        (**self).set_text(text);
    }
}
