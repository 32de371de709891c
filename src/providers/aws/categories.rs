//! AWS resource categories and their label extractors

use serde_json::Value;

use super::AwsCli;
use crate::adapter::FieldExt;
use crate::providers::{Category, Decode};

/// Account-wide categories, attached directly under the account node
pub fn global() -> Vec<Category<AwsCli>> {
    vec![
        Category {
            label: "S3",
            command: |aws, _| aws.command("s3api list-buckets", None),
            decode: Decode::Structured(s3_buckets),
        },
        Category {
            label: "IAM",
            command: |aws, _| aws.command("iam list-users", None),
            decode: Decode::Structured(iam_users),
        },
    ]
}

/// Per-region categories
pub fn regional() -> Vec<Category<AwsCli>> {
    vec![
        Category {
            label: "EC2",
            command: |aws, region| aws.command("ec2 describe-instances", Some(region)),
            decode: Decode::Structured(ec2_instances),
        },
        Category {
            label: "RDS",
            command: |aws, region| aws.command("rds describe-db-instances", Some(region)),
            decode: Decode::Structured(rds_instances),
        },
        Category {
            label: "Lambda",
            command: |aws, region| aws.command("lambda list-functions", Some(region)),
            decode: Decode::Structured(lambda_functions),
        },
        Category {
            label: "DynamoDB",
            command: |aws, region| aws.command("dynamodb list-tables", Some(region)),
            decode: Decode::Structured(dynamodb_tables),
        },
        Category {
            label: "ECS",
            command: |aws, region| aws.command("ecs list-clusters", Some(region)),
            decode: Decode::Structured(ecs_clusters),
        },
        Category {
            label: "EKS",
            command: |aws, region| aws.command("eks list-clusters", Some(region)),
            decode: Decode::Structured(eks_clusters),
        },
        Category {
            label: "SQS",
            command: |aws, region| aws.command("sqs list-queues", Some(region)),
            decode: Decode::Structured(sqs_queues),
        },
    ]
}

/// Plain string entries of the array at `pointer`
fn strings<'a>(value: &'a Value, pointer: &str) -> impl Iterator<Item = &'a str> {
    value.items(pointer).iter().filter_map(Value::as_str)
}

fn s3_buckets(value: &Value) -> Vec<String> {
    value
        .items("/Buckets")
        .iter()
        .map(|b| {
            format!(
                "Bucket name: {} created: {}",
                b.text("/Name"),
                b.text("/CreationDate")
            )
        })
        .collect()
}

fn iam_users(value: &Value) -> Vec<String> {
    value
        .items("/Users")
        .iter()
        .map(|u| format!("User name: {} id: {}", u.text("/UserName"), u.text("/UserId")))
        .collect()
}

fn ec2_instances(value: &Value) -> Vec<String> {
    value
        .items("/Reservations")
        .iter()
        .flat_map(|r| r.items("/Instances"))
        .map(|instance| {
            let name = instance
                .items("/Tags")
                .iter()
                .find(|tag| tag.text("/Key") == "Name")
                .map(|tag| tag.text("/Value"))
                .unwrap_or("");
            format!(
                "Compute Instance name: {} id: {} type: {} zone: {} IP: {}",
                name,
                instance.text("/InstanceId"),
                instance.text("/InstanceType"),
                instance.text("/Placement/AvailabilityZone"),
                instance.text_or("/PublicIpAddress", instance.text("/PrivateIpAddress"))
            )
        })
        .collect()
}

fn rds_instances(value: &Value) -> Vec<String> {
    value
        .items("/DBInstances")
        .iter()
        .map(|db| {
            format!(
                "Database Instance name: {} engine: {} class: {} status: {}",
                db.text("/DBInstanceIdentifier"),
                db.text("/Engine"),
                db.text("/DBInstanceClass"),
                db.text("/DBInstanceStatus")
            )
        })
        .collect()
}

fn lambda_functions(value: &Value) -> Vec<String> {
    value
        .items("/Functions")
        .iter()
        .map(|f| {
            let memory = f
                .number("/MemorySize")
                .map(|m| m.to_string())
                .unwrap_or_default();
            format!(
                "Function name: {} runtime: {} memory: {}",
                f.text("/FunctionName"),
                f.text("/Runtime"),
                memory
            )
        })
        .collect()
}

fn dynamodb_tables(value: &Value) -> Vec<String> {
    strings(value, "/TableNames")
        .map(|name| format!("Table name: {}", name))
        .collect()
}

fn ecs_clusters(value: &Value) -> Vec<String> {
    strings(value, "/clusterArns")
        .map(|arn| format!("Cluster arn: {}", arn))
        .collect()
}

fn eks_clusters(value: &Value) -> Vec<String> {
    strings(value, "/clusters")
        .map(|name| format!("Cluster name: {}", name))
        .collect()
}

fn sqs_queues(value: &Value) -> Vec<String> {
    strings(value, "/QueueUrls")
        .map(|url| format!("Queue url: {}", url))
        .collect()
}
