//! Seed catalog served when `CATALOG_SOURCE=seed`.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::models::job::{EmploymentType, JobPosting};

struct SeedJob {
    id: u128,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    employment_type: EmploymentType,
    description: &'static str,
    requirements: &'static [&'static str],
    category: &'static str,
    posted: (i32, u32, u32),
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        id: 0x6a0b_1c2d_0001,
        title: "Senior Product Engineer",
        company: "Lumina Labs",
        location: "San Francisco (Hybrid)",
        salary: "$160k - $210k",
        employment_type: EmploymentType::FullTime,
        description: "Own product features end to end across our web platform, \
            from API design to polished UI, working closely with design and research.",
        requirements: &["TypeScript", "React", "Node.js", "PostgreSQL", "5+ years experience"],
        category: "Engineering",
        posted: (2024, 5, 14),
    },
    SeedJob {
        id: 0x6a0b_1c2d_0002,
        title: "Visual Experience Designer",
        company: "Northwind Studio",
        location: "Remote",
        salary: "$110k - $140k",
        employment_type: EmploymentType::Remote,
        description: "Shape the visual language of our consumer apps and build \
            the design system that ships it.",
        requirements: &["Figma", "Design systems", "Motion design", "Portfolio"],
        category: "Design",
        posted: (2024, 5, 12),
    },
    SeedJob {
        id: 0x6a0b_1c2d_0003,
        title: "Machine Learning Engineer",
        company: "Vector Dynamics",
        location: "New York, NY",
        salary: "$175k - $230k",
        employment_type: EmploymentType::FullTime,
        description: "Train, evaluate and deploy ranking models that serve \
            millions of requests per day.",
        requirements: &["Python", "PyTorch", "MLOps", "Distributed training"],
        category: "AI & Data",
        posted: (2024, 5, 10),
    },
    SeedJob {
        id: 0x6a0b_1c2d_0004,
        title: "Growth Marketing Manager",
        company: "Brightpath",
        location: "Austin, TX",
        salary: "$95k - $125k",
        employment_type: EmploymentType::FullTime,
        description: "Plan and run acquisition campaigns across paid and owned \
            channels, and report on funnel performance.",
        requirements: &["Paid acquisition", "SQL", "A/B testing", "Copywriting"],
        category: "Marketing",
        posted: (2024, 5, 8),
    },
    SeedJob {
        id: 0x6a0b_1c2d_0005,
        title: "Backend Engineer (Rust)",
        company: "Ferrous Systems Co.",
        location: "Remote",
        salary: "$140k - $185k",
        employment_type: EmploymentType::Contract,
        description: "Build low-latency services for our payments platform and \
            help migrate legacy components to Rust.",
        requirements: &["Rust", "Tokio", "PostgreSQL", "gRPC"],
        category: "Engineering",
        posted: (2024, 5, 6),
    },
    SeedJob {
        id: 0x6a0b_1c2d_0006,
        title: "Customer Success Associate",
        company: "Helio Health",
        location: "Chicago, IL",
        salary: "$28/hr",
        employment_type: EmploymentType::PartTime,
        description: "Onboard new clinic customers and be their first point of \
            contact for product questions.",
        requirements: &["Communication", "CRM tools", "Healthcare experience"],
        category: "Operations",
        posted: (2024, 5, 3),
    },
];

/// The seed catalog in its reference (insertion) order.
pub fn seed_jobs() -> Vec<JobPosting> {
    SEED_JOBS
        .iter()
        .map(|s| {
            let (year, month, day) = s.posted;
            JobPosting {
                id: Uuid::from_u128(s.id),
                title: s.title.to_string(),
                company: s.company.to_string(),
                location: s.location.to_string(),
                salary: s.salary.to_string(),
                employment_type: s.employment_type,
                description: s.description.to_string(),
                requirements: s.requirements.iter().map(|r| r.to_string()).collect(),
                category: Some(s.category.to_string()),
                posted_at: Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single(),
            }
        })
        .collect()
}
