//! Convenience builder for HTTP query parameters.
//!
//! This module provides a lightweight helper for constructing URL query
//! pairs from optional values, reducing boilerplate in the session layer.

use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Returns true when no pairs have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_into_pairs() {
        let mut params = QueryParams::new();
        params.push("objectMask", "mask[id]");
        params.push("resultLimit", 25);

        let pairs = params.into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("objectMask", "mask[id]".to_string()),
                ("resultLimit", "25".to_string())
            ]
        );
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("objectMask", None::<&str>);
        params.push_opt("objectFilter", Some("{\"id\":{\"operation\":5}}"));

        let pairs = params.into_pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "objectFilter");
    }

    #[test]
    fn test_is_empty() {
        let mut params = QueryParams::new();
        assert!(params.is_empty());
        params.push("resultLimit", 1);
        assert!(!params.is_empty());
    }
}
