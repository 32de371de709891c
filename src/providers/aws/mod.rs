//! AWS collector
//!
//! Account (root) → account-wide categories → regions → regional categories.

mod categories;
mod models;

use log::{debug, info};

use crate::adapter::Shell;
use crate::config::vendor;
use crate::error::{InventoryError, Result};
use crate::providers::traits::CloudScope;
use crate::providers::{collect_scopes, decode_or_default, quote_arg, Context};
use crate::tree::TreeNode;

pub use models::{Account, AccountAliases, CallerIdentity, RegionsResponse};

/// Builds `aws` command lines
#[derive(Debug, Clone, Default)]
pub struct AwsCli {
    profile: Option<String>,
}

impl AwsCli {
    pub fn new(profile: Option<String>) -> Self {
        Self { profile }
    }

    /// `aws <args> [--region R] [--profile P] --output json`
    pub fn command(&self, args: &str, region: Option<&str>) -> String {
        let mut line = format!("{} {}", vendor::AWS, args);
        if let Some(region) = region {
            line.push_str(" --region ");
            line.push_str(&quote_arg(region));
        }
        if let Some(profile) = &self.profile {
            line.push_str(" --profile ");
            line.push_str(&quote_arg(profile));
        }
        line.push_str(" --output json");
        line
    }
}

/// Collect the whole account into a tree
///
/// Fails only when the account identity cannot be resolved.
pub async fn collect_account<S: Shell>(ctx: Context<'_, S>) -> Result<TreeNode> {
    let aws = AwsCli::new(ctx.options.profile.clone());

    ctx.status("Resolving AWS account...");
    let account = resolve_account(ctx, &aws).await?;
    info!("Collecting AWS account {}", account.id());

    let mut root = TreeNode::new(account.root_label());

    ctx.status("Collecting account-wide resources...");
    ctx.collect_categories(&aws, "", &categories::global(), &mut root)
        .await;

    let regions = resolve_regions(ctx, &aws).await;
    debug!("Scanning {} regions: {:?}", regions.len(), regions);

    let aws = &aws;
    let nodes = collect_scopes(regions, ctx.options.jobs, move |region| {
        collect_region(ctx, aws, region)
    })
    .await;
    for node in nodes {
        root.append(node);
    }

    Ok(root)
}

async fn resolve_account<S: Shell>(ctx: Context<'_, S>, aws: &AwsCli) -> Result<Account> {
    let identity: CallerIdentity = decode_or_default(
        ctx.adapter
            .run_structured(&aws.command("sts get-caller-identity", None))
            .await,
    );

    if identity.account.is_empty() {
        let hint = match &aws.profile {
            Some(profile) => format!("check the credentials of profile '{}'", profile),
            None => "check your AWS credentials or pass --profile".to_string(),
        };
        return Err(InventoryError::NoAccount(format!(
            "`aws sts get-caller-identity` returned no account; {}",
            hint
        )));
    }
    debug!("Caller identity: {}", identity.arn);

    let aliases: AccountAliases = decode_or_default(
        ctx.adapter
            .run_structured(&aws.command("iam list-account-aliases", None))
            .await,
    );

    Ok(Account {
        id: identity.account,
        alias: aliases.aliases.into_iter().next(),
    })
}

/// Regions from options, otherwise every region the account has enabled
async fn resolve_regions<S: Shell>(ctx: Context<'_, S>, aws: &AwsCli) -> Vec<String> {
    if !ctx.options.regions.is_empty() {
        return ctx.options.regions.clone();
    }

    let regions: RegionsResponse = decode_or_default(
        ctx.adapter
            .run_structured(&aws.command("ec2 describe-regions", None))
            .await,
    );
    regions.names()
}

async fn collect_region<S: Shell>(ctx: Context<'_, S>, aws: &AwsCli, region: String) -> TreeNode {
    ctx.status(&format!("Collecting region {}...", region));
    let mut node = TreeNode::new(format!("region: {}", region));
    ctx.collect_categories(aws, &region, &categories::regional(), &mut node)
        .await;
    node
}
