//! Inline CSS declaration lists.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

/// CSS declarations keyed by property name.
///
/// Serializes as `name: value` pairs sorted by property name and joined
/// with `"; "`, so equal maps always produce identical text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleMap {
    decls: BTreeMap<&'static str, String>,
}

impl StyleMap {
    /// Empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        self.decls.insert(property, value.into());
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Value of a property, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls.get(property).map(String::as_str)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Whether no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Declarations in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.decls.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_sorted_by_property() {
        let style = StyleMap::new()
            .with("width", "560px")
            .with("height", "345px")
            .with("border", "0");
        assert_eq!(style.to_string(), "border: 0; height: 345px; width: 560px");
    }

    #[test]
    fn empty_map_is_empty_string() {
        assert_eq!(StyleMap::new().to_string(), "");
    }

    #[test]
    fn set_replaces() {
        let mut style = StyleMap::new();
        style.set("display", "none").set("display", "block");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("display"), Some("block"));
    }

    #[test]
    fn hyphenated_properties_sort_bytewise() {
        let style = StyleMap::new()
            .with("padding-top", "30px")
            .with("padding-bottom", "28.125000%")
            .with("position", "relative")
            .with("width", "50%");
        assert_eq!(
            style.to_string(),
            "padding-bottom: 28.125000%; padding-top: 30px; position: relative; width: 50%"
        );
    }
}
