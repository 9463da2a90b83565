//! The set of operation IDs a command acts on.

use std::collections::HashSet;

use super::HelperError;

/// A non-empty set of operation identifiers.
///
/// Built once per invocation from the repeated `--operation-id` flag and shared
/// by both pruners. Duplicates collapse and empty strings are kept as-is; the
/// only rule enforced is that at least one ID was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationIdSet {
    ids: HashSet<String>,
}

impl OperationIdSet {
    /// Build a set from the caller's list.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::InvalidArgument`] when `ids` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use speakeasy_helpers::core::OperationIdSet;
    ///
    /// let ids = OperationIdSet::new(["activity", "feedback", "activity"]).unwrap();
    /// assert_eq!(ids.iter().count(), 2);
    /// assert!(ids.contains("feedback"));
    ///
    /// assert!(OperationIdSet::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(ids: I) -> Result<Self, HelperError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: HashSet<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(HelperError::invalid_argument(
                "at least one operation ID must be specified",
            ));
        }
        Ok(Self {
            ids,
        })
    }

    /// Whether `id` is one of the requested operations.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate the IDs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
