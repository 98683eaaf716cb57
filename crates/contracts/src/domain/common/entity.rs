/// Metadata and identity shared by every admin-manageable record.
pub trait EntityRecord {
    /// Stable unique id assigned by the API.
    fn id(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// REST collection path segment, e.g. `"department-sections"`
    fn collection_name() -> &'static str;

    /// Key the list endpoint wraps the collection in, e.g. `"sections"`
    fn envelope_key() -> &'static str;

    /// UI name of one record, e.g. `"Department section"`
    fn element_name() -> &'static str;

    /// UI name of the list, e.g. `"Department sections"`
    fn list_name() -> &'static str;
}

/// Deletion precondition evaluated before confirmation is offered.
pub trait DeleteGuard {
    /// Reason the record cannot be deleted right now, if any.
    fn delete_blocker(&self) -> Option<String> {
        None
    }
}
