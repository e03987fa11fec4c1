use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const DEFAULT_GITHUB_HANDLE: &str = "harishg4";

const SKILLS: &[&str] = &[
    "Python (Pandas, PySpark, SQLAlchemy)",
    "Apache Spark, Kafka, Airflow, Glue, Step Functions",
    "Snowflake, Redshift, BigQuery, Delta Lake, Iceberg",
    "AWS (S3, Lambda, EMR, ECS, Kinesis)",
    "DataOps & CI/CD (Terraform, Docker, GitHub Actions)",
    "Governance & Security (Apache Ranger, KMS, IAM)",
];

const ACHIEVEMENTS: &[&str] = &[
    "Led design of enterprise-scale Lakehouse with Iceberg and Delta Lake integrating multi-cloud analytics.",
    "Delivered 40% faster ETL via Spark optimization and event-driven orchestration.",
    "Enabled real-time insights with streaming data from Kinesis and Kafka.",
    "Implemented full data lineage and quality monitoring improving data trust company-wide.",
    "Optimized compute/storage cost by 25% via partition pruning and incremental SCD2 design.",
];

// (name, badge image, link)
const CERTIFICATIONS: &[(&str, &str, &str)] = &[
    (
        "AWS Certified Solutions Architect – Associate",
        "https://d1.awsstatic.com/onedam/marketing-channels/website/aws/en_US/certification/approved/images/certification-badges/dea-badge-resized.d690717f5a67a228325f8468fba38518a0461d05.png",
        "https://aws.amazon.com/certification/certified-solutions-architect-associate/",
    ),
    (
        "Snowflake SnowPro Core Certified",
        "https://logos.fullcertified.com/snowprodataengineer.png",
        "https://www.snowflake.com/en/certifications/snowpro-core/",
    ),
    (
        "Databricks Certified Data Engineer Professional",
        "https://www.databricks.com/sites/default/files/2024-05/professional-badge-de.png?v=1717145841",
        "https://www.databricks.com/learn/certification/professional-data-engineer",
    ),
];

const PUBLICATION_ABSTRACT: &str = "Real-time data pipeline optimization plays a critical role in the efficiency and reliability of autonomous control systems, particularly in dynamic environments that demand low latency and high throughput. This paper explores the latest advancements in optimizing real-time data pipelines, focusing on the integration of sensor data, computational models, and decision-making algorithms used in autonomous systems. The discussion includes challenges related to data collection, preprocessing, and transmission, as well as techniques for enhancing the scalability, fault tolerance, and real-time capabilities of data pipelines. Furthermore, the paper reviews key optimization strategies, such as stream processing, distributed computing, and edge processing, and assesses their applicability to real-time decision-making in autonomous control systems. By analyzing recent research and practical applications, this paper aims to provide insights into the future development of efficient data pipelines that support the autonomous systems of tomorrow.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub date: String,
    pub link: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

/// Static page content. Read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub headline: String,
    pub summary: String,
    pub hero_image: String,
    pub github_handle: String,
    pub skills: Vec<String>,
    pub achievements: Vec<String>,
    pub certifications: Vec<Certification>,
    pub publications: Vec<Publication>,
    pub contact: Contact,
}

impl Default for Profile {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Profile {
    pub fn builtin() -> Self {
        Profile {
            name: "Harish Gaddam".to_string(),
            initials: "HG".to_string(),
            tagline: "Data Engineering | Cloud | AI-driven Analytics".to_string(),
            headline: "AWS | Snowflake | Databricks | Airflow | Spark".to_string(),
            summary: "Passionate about architecting high-performance, secure, and intelligent data platforms that power decision-making and AI at scale.".to_string(),
            hero_image: "/images/harish-hero.jpg".to_string(),
            github_handle: DEFAULT_GITHUB_HANDLE.to_string(),
            skills: SKILLS.iter().map(|s| s.to_string()).collect(),
            achievements: ACHIEVEMENTS.iter().map(|s| s.to_string()).collect(),
            certifications: CERTIFICATIONS
                .iter()
                .map(|(name, image, link)| Certification {
                    name: name.to_string(),
                    image: image.to_string(),
                    link: link.to_string(),
                })
                .collect(),
            publications: vec![Publication {
                title: "Real-Time Data Pipeline Optimization for Autonomous Control Systems".to_string(),
                venue: "IEEE".to_string(),
                date: "May 9, 2025".to_string(),
                link: "https://ieeexplore.ieee.org/document/11077491".to_string(),
                authors: Some("Other authors".to_string()),
                abstract_text: PUBLICATION_ABSTRACT.to_string(),
            }],
            contact: Contact {
                email: "hnaidugaddam@gmail.com".to_string(),
                linkedin: "https://www.linkedin.com/in/harishg4".to_string(),
                github: "https://github.com/harishg4".to_string(),
            },
        }
    }

    /// Reads a profile from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let profile = Self::from_json(&json)?;
        info!(path = %path.display(), name = %profile.name, "Loaded profile");
        Ok(profile)
    }

    /// Loads `path` when given, otherwise the compiled-in profile.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::Config("profile name must not be empty".to_string()));
        }
        let handle = &self.github_handle;
        if handle.is_empty()
            || !handle.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(PortfolioError::Config(format!(
                "invalid GitHub handle: {:?}",
                handle
            )));
        }
        Ok(())
    }
}
