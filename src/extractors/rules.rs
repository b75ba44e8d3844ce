// src/extractors/rules.rs
//! Ordered rule chains: a list of extraction rules tried in order, first hit wins.

use regex::{Captures, Regex};

/// A single way of pulling a value out of the text.
pub trait ExtractionRule<T>: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns `None` when the rule does not apply to this text.
    fn apply(&self, text: &str) -> Option<T>;
}

/// Rule backed by a regex; the first match's captures are handed to `extract`.
pub struct PatternRule<T> {
    name: &'static str,
    pattern: Regex,
    extract: fn(&Captures) -> Option<T>,
}

impl<T> PatternRule<T> {
    /// Panics on an invalid pattern; only used with literal patterns.
    pub fn new(name: &'static str, pattern: &str, extract: fn(&Captures) -> Option<T>) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for rule '{}': {}", name, e)),
            extract,
        }
    }
}

impl<T> ExtractionRule<T> for PatternRule<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<T> {
        let caps = self.pattern.captures(text)?;
        (self.extract)(&caps)
    }
}

/// Rule backed by a plain function, for structural heuristics that are not a single regex.
pub struct FnRule<T> {
    name: &'static str,
    extract: fn(&str) -> Option<T>,
}

impl<T> FnRule<T> {
    pub fn new(name: &'static str, extract: fn(&str) -> Option<T>) -> Self {
        Self { name, extract }
    }
}

impl<T> ExtractionRule<T> for FnRule<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<T> {
        (self.extract)(text)
    }
}

/// An ordered list of rules.
pub struct RuleChain<T> {
    field: &'static str,
    rules: Vec<Box<dyn ExtractionRule<T>>>,
}

impl<T> RuleChain<T> {
    pub fn new(field: &'static str) -> Self {
        Self { field, rules: Vec::new() }
    }

    pub fn rule(mut self, rule: impl ExtractionRule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Tries each rule in order and returns the first value produced.
    pub fn first_match(&self, text: &str) -> Option<T> {
        for rule in &self.rules {
            if let Some(value) = rule.apply(text) {
                tracing::debug!("{}: matched rule '{}'", self.field, rule.name());
                return Some(value);
            }
        }
        tracing::debug!("{}: no rule matched", self.field);
        None
    }
}

/// Trimmed text of a capture group, `None` when absent or blank.
pub fn group(caps: &Captures, index: usize) -> Option<String> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_word(text: &str) -> Option<String> {
        text.split_whitespace().next().map(str::to_string)
    }

    #[test]
    fn test_first_rule_wins() {
        let chain = RuleChain::new("test")
            .rule(PatternRule::new("labelled", r"Label:\s*(\w+)", |c| group(c, 1)))
            .rule(FnRule::new("first word", first_word));

        assert_eq!(chain.first_match("intro Label: value").as_deref(), Some("value"));
        assert_eq!(chain.first_match("intro text").as_deref(), Some("intro"));
        assert_eq!(chain.first_match("   "), None);
    }

    #[test]
    fn test_rule_returning_none_falls_through() {
        let chain = RuleChain::new("test")
            .rule(PatternRule::new("blank capture", r"Label:([ ]*)", |c| group(c, 1)))
            .rule(PatternRule::new("digits", r"(\d+)", |c| group(c, 1)));

        assert_eq!(chain.first_match("Label:   then 42").as_deref(), Some("42"));
    }
}
