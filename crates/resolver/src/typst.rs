//! Typst source fragments for the rendering template.
//!
//! Typst accepts a list of families for `text(font: ...)` and falls back through
//! it itself, so the whole chain is handed over alongside the resolved family.
//! Entries are emitted verbatim; generic names are not translated.

use crate::chain::FontChain;
use crate::resolve::ResolvedFont;

/// Quotes a family name as a Typst string literal.
pub fn typst_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

impl FontChain {
    /// Renders the chain as a Typst array, e.g. `("Mari", "sans-serif")`.
    ///
    /// A one-entry chain keeps its trailing comma so Typst reads an array and
    /// not a parenthesized string.
    pub fn to_typst_array(&self) -> String {
        let items: Vec<String> = self.iter().map(typst_string).collect();
        if items.len() == 1 {
            format!("({},)", items[0])
        } else {
            format!("({})", items.join(", "))
        }
    }

    /// Renders a `#set text(font: ...)` rule requesting the whole chain.
    pub fn to_typst_set_rule(&self) -> String {
        format!("#set text(font: {})", self.to_typst_array())
    }
}

impl ResolvedFont {
    pub fn to_typst_string(&self) -> String {
        typst_string(self.name())
    }
}
