use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl EmploymentType {
    /// Accepts both display spellings ("Full-time") and stored keys ("full_time").
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "full_time" => Some(EmploymentType::FullTime),
            "part_time" => Some(EmploymentType::PartTime),
            "contract" => Some(EmploymentType::Contract),
            "remote" => Some(EmploymentType::Remote),
            _ => None,
        }
    }
}

/// A listed job. Immutable once in a catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
    pub category: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub category: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        let employment_type = EmploymentType::parse(&row.employment_type).unwrap_or_else(|| {
            tracing::warn!(
                "Job {} has unknown employment type '{}', treating as full_time",
                row.id,
                row.employment_type
            );
            EmploymentType::default()
        });

        JobPosting {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            salary: row.salary,
            employment_type,
            description: row.description,
            requirements: row.requirements,
            category: row.category,
            posted_at: row.posted_at,
        }
    }
}
