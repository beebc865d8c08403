//! Inline style declarations

use std::fmt;

/// An ordered list of CSS declarations for a `style` attribute.
///
/// Renders as `prop: value;` pairs separated by single spaces, in insertion
/// order. Properties are not merged, so setting one twice emits it twice and
/// the later one wins in the browser.
///
/// ```
/// use panelkit_core::{Dimension, InlineStyle};
///
/// let style = InlineStyle::new()
///     .set("height", Dimension::from(400))
///     .set_opt("gap", None::<Dimension>);
/// assert_eq!(style.to_string(), "height: 400px;");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration
    pub fn set(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.declarations.push((property, value.to_string()));
        self
    }

    /// Appends a declaration only when a value is present
    pub fn set_opt<V: fmt::Display>(self, property: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}
