// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt templates with `{{name}}` placeholders.

/// Literal rendered for an absent optional field.
pub const NONE_PLACEHOLDER: &str = "None";

/// A fixed natural-language prompt with named placeholders.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Substitutes `{{key}}` placeholders in a single pass.
    ///
    /// Substituted values are never re-scanned, so user text containing
    /// braces is inserted verbatim. Unknown placeholders are left untouched.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };
            let key = after_open[..close].trim();
            match vars.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[open..open + 2 + close + 2]),
            }
            rest = &after_open[close + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Renders an optional text field, using [`NONE_PLACEHOLDER`] when absent or blank.
pub fn optional_field(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| NONE_PLACEHOLDER.to_string(), str::to_string)
}

/// Renders items as `- item` lines, or [`NONE_PLACEHOLDER`] when empty.
pub fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref().trim()))
        .collect();
    if lines.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate = PromptTemplate::new("Hello {{name}}, you feel {{ mood }}.");

    #[test]
    fn substitutes_named_placeholders() {
        let out = GREETING.render(&[("name", "Sam"), ("mood", "Calm")]);
        assert_eq!(out, "Hello Sam, you feel Calm.");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = GREETING.render(&[("name", "{{mood}}"), ("mood", "Calm")]);
        assert_eq!(out, "Hello {{mood}}, you feel Calm.");
    }

    #[test]
    fn unknown_and_unterminated_placeholders_survive() {
        let template = PromptTemplate::new("{{missing}} and {{open");
        assert_eq!(template.render(&[]), "{{missing}} and {{open");
    }

    #[test]
    fn optional_field_falls_back_to_none_literal() {
        assert_eq!(optional_field(None), "None");
        assert_eq!(optional_field(Some("   ")), "None");
        assert_eq!(optional_field(Some(" tired ")), "tired");
    }

    #[test]
    fn bullet_list_formats_items() {
        assert_eq!(bullet_list(["walk", " read "]), "- walk\n- read");
        assert_eq!(bullet_list(Vec::<String>::new()), "None");
    }
}
