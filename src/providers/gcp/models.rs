//! GCP organization and project data models

use serde::Deserialize;

use crate::providers::traits::CloudScope;

/// Entry of `gcloud organizations list --format=json`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRecord {
    #[serde(default)]
    pub display_name: String,
    /// Resource name, `organizations/<id>`
    #[serde(default)]
    pub name: String,
}

/// Entry of `gcloud projects list --format=json`
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub name: String,
}

/// Resolved GCP organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub display_name: String,
}

impl Organization {
    /// Build from a list record; records without an id are dropped
    pub fn from_record(record: OrganizationRecord) -> Option<Self> {
        let id = record
            .name
            .strip_prefix("organizations/")
            .unwrap_or(&record.name)
            .to_string();
        if id.is_empty() {
            return None;
        }
        Some(Self {
            id,
            display_name: record.display_name,
        })
    }

    /// `Acme (123)`, used when listing ambiguous candidates
    pub fn summary(&self) -> String {
        format!("{} ({})", self.display_name, self.id)
    }
}

impl CloudScope for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }

    fn root_label(&self) -> String {
        format!("Organization: {}", self.summary())
    }
}
