use std::fmt;

/// Errors that make a whole inventory run meaningless
///
/// Per-command failures never show up here: the adapter turns them into
/// empty results. Only preconditions the entire run depends on are fatal.
#[derive(Debug)]
pub enum InventoryError {
    /// No account identity could be resolved
    NoAccount(String),
    /// No organization is visible to the caller
    NoOrganization(String),
    /// More than one organization matched where exactly one is required
    AmbiguousOrganization(Vec<String>),
    /// Settings file or option value is invalid
    Config(String),
    /// Writing the report failed
    Io(std::io::Error),
}

impl InventoryError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            InventoryError::Io(_) => 1,
            InventoryError::Config(_) => 2,
            InventoryError::NoAccount(_)
            | InventoryError::NoOrganization(_)
            | InventoryError::AmbiguousOrganization(_) => 3,
        }
    }
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::NoAccount(msg) => write!(f, "No account identity found: {}", msg),
            InventoryError::NoOrganization(msg) => write!(f, "No organization found: {}", msg),
            InventoryError::AmbiguousOrganization(candidates) => write!(
                f,
                "Multiple organizations found ({}), select one with --org",
                candidates.join(", ")
            ),
            InventoryError::Config(msg) => write!(f, "Configuration error: {}", msg),
            InventoryError::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(err)
    }
}

impl From<serde_yml::Error> for InventoryError {
    fn from(err: serde_yml::Error) -> Self {
        InventoryError::Config(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
