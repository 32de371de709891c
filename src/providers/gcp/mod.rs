//! Google Cloud collector
//!
//! Organization (root) → projects → per-project categories.

mod categories;
mod models;

use log::{debug, info};

use crate::adapter::Shell;
use crate::config::vendor;
use crate::error::{InventoryError, Result};
use crate::providers::traits::CloudScope;
use crate::providers::{collect_scopes, decode_or_default, quote_arg, Context};
use crate::tree::TreeNode;

pub use models::{Organization, OrganizationRecord, ProjectRecord};

/// Builds `gcloud` and `gsutil` command lines
#[derive(Debug, Clone, Copy, Default)]
pub struct Gcloud;

impl Gcloud {
    /// `gcloud <args> [--project=P] --format=json`
    pub fn command(&self, args: &str, project: Option<&str>) -> String {
        let mut line = format!("{} {}", vendor::GCLOUD, args);
        if let Some(project) = project {
            line.push_str(" --project=");
            line.push_str(&quote_arg(project));
        }
        line.push_str(" --format=json");
        line
    }

    /// `gsutil ls -p P`, one bucket URL per line
    pub fn buckets(&self, project: &str) -> String {
        format!("{} ls -p {}", vendor::GSUTIL, quote_arg(project))
    }
}

/// Collect the selected organization into a tree
///
/// Fails when no organization, or more than one, is selectable.
pub async fn collect_organization<S: Shell>(ctx: Context<'_, S>) -> Result<TreeNode> {
    let gcloud = Gcloud;

    ctx.status("Resolving GCP organization...");
    let records: Vec<OrganizationRecord> = decode_or_default(
        ctx.adapter
            .run_structured(&gcloud.command("organizations list", None))
            .await,
    );
    let candidates = records
        .into_iter()
        .filter_map(Organization::from_record)
        .collect();
    let organization = select_organization(candidates, ctx.options.org.as_deref())?;
    info!("Collecting GCP organization {}", organization.id());

    let mut root = TreeNode::new(organization.root_label());

    let projects = resolve_projects(ctx, &gcloud).await;
    debug!("Scanning {} projects: {:?}", projects.len(), projects);

    let nodes = collect_scopes(projects, ctx.options.jobs, move |project| {
        collect_project(ctx, gcloud, project)
    })
    .await;
    for node in nodes {
        root.append(node);
    }

    Ok(root)
}

/// Pick exactly one organization, optionally narrowed by id or display name
pub fn select_organization(
    candidates: Vec<Organization>,
    wanted: Option<&str>,
) -> Result<Organization> {
    let mut matching: Vec<Organization> = match wanted {
        Some(wanted) => candidates
            .into_iter()
            .filter(|org| org.matches(wanted))
            .collect(),
        None => candidates,
    };

    match matching.len() {
        0 => Err(InventoryError::NoOrganization(match wanted {
            Some(wanted) => format!("no visible organization matches '{}'", wanted),
            None => "`gcloud organizations list` returned nothing; check `gcloud auth login`"
                .to_string(),
        })),
        1 => Ok(matching.remove(0)),
        _ => Err(InventoryError::AmbiguousOrganization(
            matching.iter().map(Organization::summary).collect(),
        )),
    }
}

/// Projects from options, otherwise every project the caller can list
async fn resolve_projects<S: Shell>(ctx: Context<'_, S>, gcloud: &Gcloud) -> Vec<String> {
    if !ctx.options.projects.is_empty() {
        return ctx.options.projects.clone();
    }

    let records: Vec<ProjectRecord> = decode_or_default(
        ctx.adapter
            .run_structured(&gcloud.command("projects list", None))
            .await,
    );
    records
        .into_iter()
        .map(|p| p.project_id)
        .filter(|id| !id.is_empty())
        .collect()
}

async fn collect_project<S: Shell>(
    ctx: Context<'_, S>,
    gcloud: Gcloud,
    project: String,
) -> TreeNode {
    ctx.status(&format!("Collecting project {}...", project));
    let mut node = TreeNode::new(format!("project: {}", project));
    ctx.collect_categories(&gcloud, &project, &categories::per_project(), &mut node)
        .await;
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::fake::FakeShell;
    use crate::adapter::Adapter;
    use crate::providers::CollectOptions;
    use crate::render::render;
    use std::time::Duration;

    const ORGS_ONE: &str = r#"[{"displayName": "acme.example", "name": "organizations/42"}]"#;
    const ORGS_TWO: &str = r#"[
        {"displayName": "acme.example", "name": "organizations/42"},
        {"displayName": "globex.example", "name": "organizations/7"}
    ]"#;

    fn org(id: &str, name: &str) -> Organization {
        Organization {
            id: id.to_string(),
            display_name: name.to_string(),
        }
    }

    fn organization_shell(orgs: &str) -> FakeShell {
        FakeShell::new()
            .respond("gcloud organizations list --format=json", orgs)
            .respond(
                "gcloud projects list --format=json",
                r#"[{"projectId": "web-prod"}, {"projectId": "sandbox"}]"#,
            )
            .respond(
                "gcloud compute instances list --project=web-prod --format=json",
                r#"[{
                    "name": "web-1",
                    "id": "1",
                    "machineType": "zones/us-central1-a/machineTypes/e2-medium",
                    "zone": "zones/us-central1-a",
                    "networkInterfaces": [{"networkIP": "10.0.0.2"}]
                }]"#,
            )
            .respond("gsutil ls -p web-prod", "gs://web-assets/\n")
            .fail(
                "gcloud sql instances list --project=web-prod --format=json",
                1,
                "API [sqladmin.googleapis.com] not enabled",
            )
    }

    async fn collect(shell: FakeShell, options: CollectOptions) -> Result<TreeNode> {
        let adapter = Adapter::new(shell, Duration::from_secs(5));
        collect_organization(Context::new(&adapter, &options, None)).await
    }

    #[test]
    fn test_command_lines() {
        assert_eq!(
            Gcloud.command("organizations list", None),
            "gcloud organizations list --format=json"
        );
        assert_eq!(
            Gcloud.command("sql instances list", Some("my project")),
            "gcloud sql instances list --project='my project' --format=json"
        );
        assert_eq!(Gcloud.buckets("web-prod"), "gsutil ls -p web-prod");
    }

    #[test]
    fn test_select_single_organization() {
        let selected = select_organization(vec![org("42", "acme.example")], None).unwrap();
        assert_eq!(selected.id, "42");
    }

    #[test]
    fn test_select_none_is_fatal() {
        let err = select_organization(Vec::new(), None).unwrap_err();
        assert!(matches!(err, InventoryError::NoOrganization(_)));
    }

    #[test]
    fn test_select_multiple_is_ambiguous() {
        let err = select_organization(
            vec![org("42", "acme.example"), org("7", "globex.example")],
            None,
        )
        .unwrap_err();
        match err {
            InventoryError::AmbiguousOrganization(candidates) => {
                assert_eq!(candidates, vec!["acme.example (42)", "globex.example (7)"]);
            }
            other => panic!("Expected AmbiguousOrganization, got {:?}", other),
        }
    }

    #[test]
    fn test_select_by_name_or_id() {
        let candidates = vec![org("42", "acme.example"), org("7", "globex.example")];
        assert_eq!(
            select_organization(candidates.clone(), Some("7")).unwrap().id,
            "7"
        );
        assert_eq!(
            select_organization(candidates.clone(), Some("acme.example"))
                .unwrap()
                .id,
            "42"
        );
        let err = select_organization(candidates, Some("initech")).unwrap_err();
        assert!(err.to_string().contains("initech"));
    }

    #[tokio::test]
    async fn test_collect_organization() {
        let tree = collect(organization_shell(ORGS_ONE), CollectOptions::default())
            .await
            .unwrap();

        let expected = "\
Organization: acme.example (42)
├─ project: web-prod
│  ├─ Compute Engine
│  │  └─ Compute Instance name: web-1 id: 1 type: e2-medium zone: us-central1-a IP: 10.0.0.2
│  └─ Cloud Storage
│     └─ Bucket: gs://web-assets/
└─ project: sandbox
";
        assert_eq!(render(&tree), expected);
    }

    #[tokio::test]
    async fn test_collect_ambiguous_organization_is_fatal() {
        let err = collect(organization_shell(ORGS_TWO), CollectOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::AmbiguousOrganization(_)));
    }

    #[tokio::test]
    async fn test_collect_with_org_selector() {
        let options = CollectOptions {
            org: Some("globex.example".to_string()),
            projects: vec!["sandbox".to_string()],
            ..CollectOptions::default()
        };
        let tree = collect(organization_shell(ORGS_TWO), options).await.unwrap();
        assert_eq!(
            render(&tree),
            "Organization: globex.example (7)\n└─ project: sandbox\n"
        );
    }

    #[tokio::test]
    async fn test_organization_list_failure_is_fatal() {
        let shell = FakeShell::new().fail(
            "gcloud organizations list --format=json",
            1,
            "You do not currently have an active account selected.",
        );
        let err = collect(shell, CollectOptions::default()).await.unwrap_err();
        assert!(matches!(err, InventoryError::NoOrganization(_)));
    }

    #[tokio::test]
    async fn test_skip_storage() {
        let options = CollectOptions {
            skip: vec!["cloud storage".to_string()],
            projects: vec!["web-prod".to_string()],
            ..CollectOptions::default()
        };
        let tree = collect(organization_shell(ORGS_ONE), options).await.unwrap();
        assert!(!render(&tree).contains("Cloud Storage"));
        assert!(render(&tree).contains("Compute Engine"));
    }
}
