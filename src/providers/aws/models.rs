//! AWS account data models

use serde::Deserialize;

use crate::providers::traits::CloudScope;

/// `aws sts get-caller-identity` response
#[derive(Deserialize, Debug, Default)]
pub struct CallerIdentity {
    #[serde(rename = "Account", default)]
    pub account: String,
    #[serde(rename = "Arn", default)]
    pub arn: String,
}

/// `aws iam list-account-aliases` response
#[derive(Deserialize, Debug, Default)]
pub struct AccountAliases {
    #[serde(rename = "AccountAliases", default)]
    pub aliases: Vec<String>,
}

/// `aws ec2 describe-regions` response
#[derive(Deserialize, Debug, Default)]
pub struct RegionsResponse {
    #[serde(rename = "Regions", default)]
    pub regions: Vec<Region>,
}

#[derive(Deserialize, Debug)]
pub struct Region {
    #[serde(rename = "RegionName")]
    pub name: String,
}

impl RegionsResponse {
    /// Region names in the order AWS returned them
    pub fn names(self) -> Vec<String> {
        self.regions.into_iter().map(|r| r.name).collect()
    }
}

/// Resolved AWS account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub alias: Option<String>,
}

impl CloudScope for Account {
    fn id(&self) -> &str {
        &self.id
    }

    /// Account alias, falling back to the account id
    fn name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }

    fn root_label(&self) -> String {
        format!("Account: {} ({})", self.name(), self.id)
    }
}
