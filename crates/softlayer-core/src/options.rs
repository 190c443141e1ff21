//! Per-call request options.
//!
//! Every SoftLayer API call carries an optional object id, object mask,
//! object filter, and pagination bounds. The options value is
//! request-scoped: service handles copy it into each fluent chain and the
//! session encodes it into the request URL.

use crate::query::QueryParams;

/// Options applied to a single API call.
///
/// All fields are optional; `None` means unset and the last setter wins.
/// Setters consume the value and return the updated copy so chains never
/// mutate a shared base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Object id scoping the call to one remote instance
    pub id: Option<i64>,

    /// Object mask selecting which nested fields the response populates
    pub mask: Option<String>,

    /// Opaque object filter expression
    pub filter: Option<String>,

    /// Maximum number of results to return
    pub limit: Option<u32>,

    /// Offset into the result set
    pub offset: Option<u32>,
}

impl RequestOptions {
    /// Create an empty options value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the object id.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the object mask.
    ///
    /// The mask is normalized on the way in: see [`normalize_mask`].
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(normalize_mask(mask.into()));
        self
    }

    /// Set the object filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the result offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Encode the options as URL query pairs.
    ///
    /// The mask and filter map to `objectMask` and `objectFilter`.
    /// Pagination maps to `resultLimit=limit` or `resultLimit=offset,limit`;
    /// an offset without a limit is not encoded. The object id is part of
    /// the request path, not the query string.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("objectMask", self.mask.as_deref());
        params.push_opt("objectFilter", self.filter.as_deref());

        if let Some(limit) = self.limit {
            let value = match self.offset {
                Some(offset) => format!("{offset},{limit}"),
                None => limit.to_string(),
            };
            params.push("resultLimit", value);
        }

        params.into_pairs()
    }
}

/// Normalize an object mask expression.
///
/// A mask that does not already start with the `mask[` envelope and that
/// contains a `[` or a `,` is wrapped as `mask[<input>]`. A plain field
/// name (no brackets, no commas) and an already-wrapped mask pass through
/// unchanged.
#[must_use]
pub fn normalize_mask(mask: String) -> String {
    if !mask.starts_with("mask[") && (mask.contains('[') || mask.contains(',')) {
        format!("mask[{mask}]")
    } else {
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_plain_field_stays_bare() {
        assert_eq!(normalize_mask("id".to_string()), "id");
        assert_eq!(normalize_mask("hostname".to_string()), "hostname");
    }

    #[test]
    fn test_mask_comma_list_is_wrapped() {
        assert_eq!(normalize_mask("id,name".to_string()), "mask[id,name]");
    }

    #[test]
    fn test_mask_bracketed_is_wrapped() {
        assert_eq!(normalize_mask("a[b]".to_string()), "mask[a[b]]");
    }

    #[test]
    fn test_mask_already_wrapped_is_unchanged() {
        assert_eq!(normalize_mask("mask[id]".to_string()), "mask[id]");
        assert_eq!(
            normalize_mask("mask[id,name[first]]".to_string()),
            "mask[id,name[first]]"
        );
    }

    #[test]
    fn test_with_mask_normalizes() {
        let options = RequestOptions::new().with_mask("id,name");
        assert_eq!(options.mask.as_deref(), Some("mask[id,name]"));

        let options = RequestOptions::new().with_mask("id");
        assert_eq!(options.mask.as_deref(), Some("id"));
    }

    #[test]
    fn test_last_setter_wins() {
        let options = RequestOptions::new().with_limit(10).with_limit(20);
        assert_eq!(options.limit, Some(20));

        let options = RequestOptions::new().with_mask("id").with_mask("a,b");
        assert_eq!(options.mask.as_deref(), Some("mask[a,b]"));
    }

    #[test]
    fn test_setter_independence() {
        let options = RequestOptions::new()
            .with_id(42)
            .with_mask("a,b")
            .with_filter("{}")
            .with_offset(5);

        let updated = options.clone().with_limit(10);
        assert_eq!(updated.id, Some(42));
        assert_eq!(updated.mask.as_deref(), Some("mask[a,b]"));
        assert_eq!(updated.filter.as_deref(), Some("{}"));
        assert_eq!(updated.offset, Some(5));
        assert_eq!(updated.limit, Some(10));

        // The base value is untouched.
        assert_eq!(options.limit, None);
    }

    #[test]
    fn test_query_pairs_full() {
        let options = RequestOptions::new()
            .with_mask("a,b")
            .with_filter("{\"id\":5}")
            .with_limit(10)
            .with_offset(5);

        assert_eq!(
            options.to_query_pairs(),
            vec![
                ("objectMask", "mask[a,b]".to_string()),
                ("objectFilter", "{\"id\":5}".to_string()),
                ("resultLimit", "5,10".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_limit_without_offset() {
        let options = RequestOptions::new().with_limit(25);
        assert_eq!(
            options.to_query_pairs(),
            vec![("resultLimit", "25".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_offset_without_limit_is_dropped() {
        let options = RequestOptions::new().with_offset(5);
        assert!(options.to_query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_id_not_encoded() {
        let options = RequestOptions::new().with_id(42);
        assert!(options.to_query_pairs().is_empty());
    }
}
