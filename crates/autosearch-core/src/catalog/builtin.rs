//! Built-in sample catalog: cloud-resource filter variables.

use std::collections::HashMap;

use super::catalog::Catalog;
use super::{DEFAULT_LOGICALS, DEFAULT_OPERATORS};

/// Variables in listing order, each with its candidate values.
const SAMPLE_VARIABLES: &[(&str, &[&str])] = &[
    (
        "InstanceId",
        &[
            "i-001", "i-002", "i-003", "i-004", "i-005", "i-006", "i-007", "i-008", "i-009",
            "i-010", "i-011", "i-012", "i-013", "i-014", "i-015",
        ],
    ),
    (
        "InstanceType",
        &[
            "t2.micro", "t2.small", "t2.medium", "t2.large", "t3.micro", "t3.small", "t3.medium",
            "t3.large", "m5.large", "m5.xlarge", "m5.2xlarge", "m5.4xlarge", "c5.large",
            "c5.xlarge", "c5.2xlarge",
        ],
    ),
    (
        "Region",
        &[
            "us-east-1", "us-east-2", "us-west-2", "eu-west-1", "eu-central-1", "ap-south-1",
            "ap-northeast-1", "ap-southeast-1", "ap-southeast-2", "eu-north-1", "sa-east-1",
            "ca-central-1", "af-south-1", "me-south-1", "ap-east-1",
        ],
    ),
    (
        "AvailabilityZone",
        &[
            "us-east-1a", "us-east-1b", "us-east-1c", "us-east-1d", "us-east-1e", "us-east-2a",
            "us-east-2b", "us-east-2c", "us-west-2a", "us-west-2b", "us-west-2c", "eu-west-1a",
            "eu-west-1b", "eu-west-1c", "ap-south-1a",
        ],
    ),
    (
        "VpcId",
        &[
            "vpc-001", "vpc-002", "vpc-003", "vpc-004", "vpc-005", "vpc-006", "vpc-007",
            "vpc-008", "vpc-009", "vpc-010", "vpc-011", "vpc-012", "vpc-013", "vpc-014",
            "vpc-015",
        ],
    ),
    (
        "SubnetId",
        &[
            "subnet-001", "subnet-002", "subnet-003", "subnet-004", "subnet-005", "subnet-006",
            "subnet-007", "subnet-008", "subnet-009", "subnet-010", "subnet-011", "subnet-012",
            "subnet-013", "subnet-014", "subnet-015",
        ],
    ),
    (
        "SecurityGroup",
        &[
            "sg-001", "sg-002", "sg-003", "sg-004", "sg-005", "sg-006", "sg-007", "sg-008",
            "sg-009", "sg-010", "sg-011", "sg-012", "sg-013", "sg-014", "sg-015",
        ],
    ),
    (
        "AccountId",
        &[
            "111111111111", "222222222222", "333333333333", "444444444444", "555555555555",
            "666666666666", "777777777777", "888888888888", "999999999999", "123456789012",
            "210987654321", "314159265358", "987654321000", "456789123456", "159753258147",
        ],
    ),
    (
        "UserId",
        &[
            "user1", "user2", "user3", "user4", "user5", "user6", "user7", "user8", "user9",
            "user10", "user11", "user12", "user13", "user14", "user15",
        ],
    ),
    (
        "Role",
        &[
            "Admin", "Developer", "Viewer", "Auditor", "Support", "DevOps", "Security", "Billing",
            "DataEngineer", "Analyst", "Operator", "Architect", "Tester", "Researcher", "Intern",
        ],
    ),
    (
        "Service",
        &[
            "EC2", "S3", "IAM", "RDS", "DynamoDB", "Lambda", "CloudWatch", "CloudTrail", "VPC",
            "EKS", "ECS", "SNS", "SQS", "Kinesis", "Glue",
        ],
    ),
    (
        "Resource",
        &[
            "arn:aws:s3:::bucket1",
            "arn:aws:s3:::bucket2",
            "arn:aws:ec2:::instance1",
            "arn:aws:ec2:::instance2",
            "arn:aws:rds:::db1",
            "arn:aws:rds:::db2",
            "arn:aws:lambda:::function1",
            "arn:aws:lambda:::function2",
            "arn:aws:dynamodb:::table1",
            "arn:aws:dynamodb:::table2",
            "arn:aws:cloudwatch:::alarm1",
            "arn:aws:cloudwatch:::alarm2",
            "arn:aws:iam:::role/Admin",
            "arn:aws:iam:::role/DevOps",
            "arn:aws:eks:::cluster1",
        ],
    ),
    (
        "TagKey",
        &[
            "Environment", "Project", "Owner", "CostCenter", "Application", "Department", "Team",
            "Region", "Backup", "Compliance", "Purpose", "Stage", "Version", "Role", "Criticality",
        ],
    ),
    (
        "TagValue",
        &[
            "Prod", "Dev", "Test", "QA", "Staging", "Finance", "HR", "Marketing", "Sales", "Ops",
            "Critical", "Optional", "Internal", "External", "Legacy",
        ],
    ),
    (
        "Action",
        &[
            "ec2:StartInstances",
            "ec2:StopInstances",
            "ec2:RebootInstances",
            "s3:PutObject",
            "s3:GetObject",
            "s3:DeleteObject",
            "iam:CreateUser",
            "iam:DeleteUser",
            "lambda:InvokeFunction",
            "dynamodb:PutItem",
            "dynamodb:GetItem",
            "rds:StartDBInstance",
            "rds:StopDBInstance",
            "eks:CreateCluster",
            "eks:DeleteCluster",
        ],
    ),
    (
        "RequestId",
        &[
            "req-001", "req-002", "req-003", "req-004", "req-005", "req-006", "req-007",
            "req-008", "req-009", "req-010", "req-011", "req-012", "req-013", "req-014",
            "req-015",
        ],
    ),
    (
        "BucketName",
        &[
            "my-app-bucket", "logs-bucket", "backup-bucket", "archive-bucket", "images-bucket",
            "videos-bucket", "config-bucket", "static-bucket", "cdn-bucket", "db-backup-bucket",
            "media-bucket", "documents-bucket", "temp-bucket", "prod-bucket", "test-bucket",
        ],
    ),
    (
        "ObjectKey",
        &[
            "file1.txt", "file2.txt", "image1.png", "image2.jpg", "video1.mp4", "backup1.sql",
            "backup2.sql", "report1.pdf", "report2.docx", "config.json", "app.log",
            "metrics.csv", "dashboard.html", "style.css", "script.js",
        ],
    ),
    // Listed without candidate values.
    ("ABBBCC", &[]),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Catalog {
    /// The built-in sample catalog.
    ///
    /// Nineteen cloud-resource variables, eighteen of them with fifteen values
    /// each, plus the default operator and logical sets. Variables without
    /// values get no entry in the value table.
    pub fn builtin() -> Self {
        let variables = SAMPLE_VARIABLES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();
        let values: HashMap<String, Vec<String>> = SAMPLE_VARIABLES
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| ((*name).to_string(), owned(values)))
            .collect();

        Catalog::from_parts(
            variables,
            values,
            owned(DEFAULT_OPERATORS),
            owned(DEFAULT_LOGICALS),
        )
    }
}
