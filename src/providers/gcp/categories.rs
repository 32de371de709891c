//! GCP per-project resource categories

use serde_json::Value;

use super::Gcloud;
use crate::adapter::FieldExt;
use crate::providers::{last_segment, Category, Decode};

pub fn per_project() -> Vec<Category<Gcloud>> {
    vec![
        Category {
            label: "Compute Engine",
            command: |gcloud, project| gcloud.command("compute instances list", Some(project)),
            decode: Decode::Structured(compute_instances),
        },
        Category {
            label: "Cloud Storage",
            command: |gcloud, project| gcloud.buckets(project),
            decode: Decode::Lines(storage_buckets),
        },
        Category {
            label: "Cloud SQL",
            command: |gcloud, project| gcloud.command("sql instances list", Some(project)),
            decode: Decode::Structured(sql_instances),
        },
        Category {
            label: "Kubernetes Engine",
            command: |gcloud, project| gcloud.command("container clusters list", Some(project)),
            decode: Decode::Structured(gke_clusters),
        },
        Category {
            label: "Cloud Functions",
            command: |gcloud, project| gcloud.command("functions list", Some(project)),
            decode: Decode::Structured(functions),
        },
        Category {
            label: "Pub/Sub",
            command: |gcloud, project| gcloud.command("pubsub topics list", Some(project)),
            decode: Decode::Structured(pubsub_topics),
        },
    ]
}

fn compute_instances(value: &Value) -> Vec<String> {
    value
        .items("")
        .iter()
        .map(|instance| {
            let nic = instance.pointer("/networkInterfaces/0").unwrap_or(&Value::Null);
            format!(
                "Compute Instance name: {} id: {} type: {} zone: {} IP: {}",
                instance.text("/name"),
                instance.text("/id"),
                last_segment(instance.text("/machineType")),
                last_segment(instance.text("/zone")),
                nic.text_or("/accessConfigs/0/natIP", nic.text("/networkIP"))
            )
        })
        .collect()
}

fn storage_buckets(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.starts_with("gs://"))
        .map(|bucket| format!("Bucket: {}", bucket))
        .collect()
}

fn sql_instances(value: &Value) -> Vec<String> {
    value
        .items("")
        .iter()
        .map(|db| {
            format!(
                "Database Instance name: {} version: {} region: {} state: {}",
                db.text("/name"),
                db.text("/databaseVersion"),
                db.text("/region"),
                db.text("/state")
            )
        })
        .collect()
}

fn gke_clusters(value: &Value) -> Vec<String> {
    value
        .items("")
        .iter()
        .map(|cluster| {
            let nodes = cluster
                .number("/currentNodeCount")
                .map(|n| n.to_string())
                .unwrap_or_default();
            format!(
                "Cluster name: {} location: {} version: {} nodes: {}",
                cluster.text("/name"),
                cluster.text("/location"),
                cluster.text("/currentMasterVersion"),
                nodes
            )
        })
        .collect()
}

fn functions(value: &Value) -> Vec<String> {
    value
        .items("")
        .iter()
        .map(|function| {
            // 1st gen reports runtime/status, 2nd gen buildConfig.runtime/state
            format!(
                "Function name: {} runtime: {} state: {}",
                last_segment(function.text("/name")),
                function.text_or("/runtime", function.text("/buildConfig/runtime")),
                function.text_or("/state", function.text("/status"))
            )
        })
        .collect()
}

fn pubsub_topics(value: &Value) -> Vec<String> {
    value
        .items("")
        .iter()
        .map(|topic| format!("Topic name: {}", last_segment(topic.text("/name"))))
        .collect()
}
