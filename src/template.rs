//! Response templates and strict placeholder rendering.
//!
//! A template is literal text with `{name}` placeholders. `{{` and `}}`
//! stand for literal braces. Rendering takes an explicit [`SlotValues`] map;
//! a placeholder with no value in the map is a
//! [`TemplateFormat`](crate::error::LexreplyError::TemplateFormat) error,
//! while a template with no placeholders renders to its own text.
//!
//! # Examples
//!
//! ```
//! use lexreply::template::{ResponseTemplate, SlotValues};
//!
//! let template = ResponseTemplate::parse("Your order {order_no} is out for delivery.").unwrap();
//! let slots = SlotValues::new().with("order_no", "#99");
//!
//! assert_eq!(template.render(&slots).unwrap(), "Your order #99 is out for delivery.");
//! ```

use std::fmt;

use ahash::AHashMap;

use crate::error::{LexreplyError, Result};

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed response template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl ResponseTemplate {
    /// Parse a template string.
    ///
    /// Fails on an unbalanced brace or an empty or non-identifier
    /// placeholder name.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        if next == '}' {
                            closed = true;
                            break;
                        }
                        name.push(next);
                    }
                    if !closed {
                        return Err(LexreplyError::template(format!(
                            "unclosed '{{' at byte {offset} in template {source:?}"
                        )));
                    }
                    if !is_identifier(&name) {
                        return Err(LexreplyError::template(format!(
                            "invalid placeholder name {name:?} in template {source:?}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    return Err(LexreplyError::template(format!(
                        "single '}}' at byte {offset} in template {source:?}"
                    )));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(ResponseTemplate {
            source: source.to_string(),
            segments,
        })
    }

    /// Get the original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Iterate over placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Check whether the template contains any placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Fill every placeholder from `slots`.
    pub fn render(&self, slots: &SlotValues) -> Result<String> {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    let value = slots.get(name).ok_or_else(|| {
                        LexreplyError::template(format!(
                            "unknown placeholder {{{name}}} in template {:?}",
                            self.source
                        ))
                    })?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}

impl fmt::Display for ResponseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Named values available to a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues {
    values: AHashMap<String, String>,
}

impl SlotValues {
    /// Create an empty slot map.
    pub fn new() -> Self {
        SlotValues::default()
    }

    /// Add a value, builder style.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a value, replacing any previous one.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value for a slot name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no value is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Renders intent responses with the extracted order number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRenderer {
    placeholder: String,
    missing_value: String,
}

impl ResponseRenderer {
    /// Create a renderer filling `placeholder`, using `missing_value` when
    /// no order number was found.
    pub fn new<P: Into<String>, M: Into<String>>(placeholder: P, missing_value: M) -> Self {
        ResponseRenderer {
            placeholder: placeholder.into(),
            missing_value: missing_value.into(),
        }
    }

    /// Name of the placeholder the order number fills.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Value substituted when no order number is present.
    pub fn missing_value(&self) -> &str {
        &self.missing_value
    }

    /// Build the slot map for an optional order number.
    pub fn slots(&self, order_number: Option<&str>) -> SlotValues {
        SlotValues::new().with(
            self.placeholder.as_str(),
            order_number.unwrap_or(self.missing_value.as_str()),
        )
    }

    /// Render a parsed template.
    pub fn render(&self, template: &ResponseTemplate, order_number: Option<&str>) -> Result<String> {
        template.render(&self.slots(order_number))
    }

    /// Parse and render a template string.
    pub fn render_str(&self, template: &str, order_number: Option<&str>) -> Result<String> {
        self.render(&ResponseTemplate::parse(template)?, order_number)
    }
}

impl Default for ResponseRenderer {
    fn default() -> Self {
        ResponseRenderer::new("order_no", "N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placeholders() {
        let template = ResponseTemplate::parse("Your order {order_no} is out for delivery.").unwrap();

        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["order_no"]);
        assert!(template.has_placeholders());
        assert_eq!(template.to_string(), "Your order {order_no} is out for delivery.");
    }

    #[test]
    fn test_render_with_value() {
        let renderer = ResponseRenderer::default();

        let rendered = renderer
            .render_str("Your order {order_no} is out for delivery.", Some("#12345"))
            .unwrap();

        assert_eq!(rendered, "Your order #12345 is out for delivery.");
    }

    #[test]
    fn test_render_falls_back_to_missing_value() {
        let renderer = ResponseRenderer::default();

        let rendered = renderer
            .render_str("Your order {order_no} is out for delivery.", None)
            .unwrap();

        assert_eq!(rendered, "Your order N/A is out for delivery.");
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        let renderer = ResponseRenderer::default();
        let text = "Shipping charges are ₹50 for orders below ₹500. Orders above ₹500 are free.";

        assert_eq!(renderer.render_str(text, Some("#1")).unwrap(), text);
        assert_eq!(renderer.render_str(text, None).unwrap(), text);
        assert!(!ResponseTemplate::parse(text).unwrap().has_placeholders());
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let renderer = ResponseRenderer::default();

        let result = renderer.render_str("Hello {customer_name}", Some("#1"));

        assert!(matches!(result, Err(LexreplyError::TemplateFormat(_))));
    }

    #[test]
    fn test_escaped_braces() {
        let template = ResponseTemplate::parse("Use {{braces}} for {order_no}").unwrap();
        let slots = SlotValues::new().with("order_no", "#7");

        assert_eq!(template.render(&slots).unwrap(), "Use {braces} for #7");
    }

    #[test]
    fn test_malformed_templates() {
        for source in ["Order {order_no", "Order }", "Order {}", "Order {1st}", "{a b}"] {
            let result = ResponseTemplate::parse(source);
            assert!(
                matches!(result, Err(LexreplyError::TemplateFormat(_))),
                "{source}"
            );
        }
    }

    #[test]
    fn test_slot_values() {
        let mut slots = SlotValues::new();
        assert!(slots.is_empty());

        slots.insert("order_no", "#1");
        slots.insert("order_no", "#2");

        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get("order_no"), Some("#2"));
        assert_eq!(slots.get("other"), None);
    }

    #[test]
    fn test_custom_renderer() {
        let renderer = ResponseRenderer::new("ticket", "unknown");

        assert_eq!(renderer.placeholder(), "ticket");
        assert_eq!(renderer.missing_value(), "unknown");
        assert_eq!(
            renderer.render_str("Ticket {ticket} logged.", None).unwrap(),
            "Ticket unknown logged."
        );
    }
}
