/// Default values for CLI and settings
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Per-command timeout in seconds
    pub const TIMEOUT_SECS: u64 = 300;

    /// Number of sub-scopes (regions, projects) collected at once
    pub const JOBS: usize = 1;
}

/// Settings file location
pub mod settings {
    /// Directory under the platform config dir
    pub const DIR_NAME: &str = "cloudtree";

    /// Settings file name
    pub const FILE_NAME: &str = "config.yaml";
}

/// Vendor executables invoked by the collectors
pub mod vendor {
    /// AWS CLI
    pub const AWS: &str = "aws";

    /// Google Cloud CLI
    pub const GCLOUD: &str = "gcloud";

    /// Google Cloud Storage CLI
    pub const GSUTIL: &str = "gsutil";
}
