//! Common traits for top-level cloud scopes

/// Common trait for selectable scopes (organizations, accounts)
///
/// Provides a unified interface for matching a user-supplied selector
/// against a scope discovered from the vendor CLI.
pub trait CloudScope {
    /// Get the scope ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the scope matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }

    /// Root node label, e.g. `Organization: Acme (123)`
    fn root_label(&self) -> String;
}
