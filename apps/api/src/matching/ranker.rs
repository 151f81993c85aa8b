//! Preference ranking — scores every job against a `PreferenceProfile` and
//! orders the catalog by that score.
//!
//! Each dimension is binary: a job either hits (full weight) or misses (zero).
//! A hit means some token and the job field contain one another, ignoring case.
//! The looser direction always wins, so very short tokens match broadly.

use serde::Serialize;

use crate::matching::preference::PreferenceProfile;
use crate::models::job::JobPosting;

pub const ROLE_WEIGHT: u8 = 40;
pub const LOCATION_WEIGHT: u8 = 30;
pub const INDUSTRY_WEIGHT: u8 = 30;

/// Score at which the job card shows its "AI Match" badge.
pub const STRONG_MATCH_THRESHOLD: u8 = 60;

/// Which preference dimensions a job hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    pub role: bool,
    pub location: bool,
    pub industry: bool,
}

impl MatchBreakdown {
    pub fn score(&self) -> u8 {
        let mut score = 0;
        if self.role {
            score += ROLE_WEIGHT;
        }
        if self.location {
            score += LOCATION_WEIGHT;
        }
        if self.industry {
            score += INDUSTRY_WEIGHT;
        }
        score
    }
}

/// A job annotated with its preference score. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJobPosting {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u8,
    pub breakdown: MatchBreakdown,
    pub strong_match: bool,
}

impl ScoredJobPosting {
    fn new(job: JobPosting, breakdown: MatchBreakdown) -> Self {
        let match_score = breakdown.score();
        Self {
            job,
            match_score,
            breakdown,
            strong_match: match_score >= STRONG_MATCH_THRESHOLD,
        }
    }
}

/// Scores every job and stable-sorts by score, highest first.
/// Equal scores keep their catalog order.
pub fn rank(catalog: &[JobPosting], profile: &PreferenceProfile) -> Vec<ScoredJobPosting> {
    let mut scored: Vec<ScoredJobPosting> = catalog
        .iter()
        .map(|job| ScoredJobPosting::new(job.clone(), breakdown_for(job, profile)))
        .collect();

    // `sort_by` is stable.
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}

/// Computes the per-dimension hits for a single job.
pub fn breakdown_for(job: &JobPosting, profile: &PreferenceProfile) -> MatchBreakdown {
    MatchBreakdown {
        role: any_token_matches(&job.title, profile.roles()),
        location: any_token_matches(&job.location, profile.locations()),
        industry: any_token_matches(job.category.as_deref().unwrap_or(""), profile.industries()),
    }
}

fn any_token_matches(field: &str, tokens: &[String]) -> bool {
    // An absent field contributes nothing, even though every token contains "".
    if field.trim().is_empty() {
        return false;
    }
    let field = field.to_lowercase();
    tokens.iter().any(|token| {
        let token = token.to_lowercase();
        field.contains(&token) || token.contains(&field)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::EmploymentType;
    use uuid::Uuid;

    fn make_job(title: &str, location: &str, category: Option<&str>) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            salary: "$120k".to_string(),
            employment_type: EmploymentType::FullTime,
            description: String::new(),
            requirements: vec![],
            category: category.map(str::to_string),
            posted_at: None,
        }
    }

    fn profile(roles: &[&str], locations: &[&str], industries: &[&str]) -> PreferenceProfile {
        PreferenceProfile::new(roles, locations, industries)
    }

    fn sample_catalog() -> Vec<JobPosting> {
        vec![
            make_job("Senior Product Engineer", "San Francisco (Hybrid)", Some("Engineering")),
            make_job("Visual Experience Designer", "Remote", Some("Design")),
            make_job("Data Scientist", "New York", Some("Data")),
            make_job("Platform Engineer", "Remote", Some("Engineering")),
        ]
    }

    #[test]
    fn test_engineer_scenario() {
        let catalog = vec![
            make_job("Senior Product Engineer", "San Francisco (Hybrid)", Some("Engineering")),
            make_job("Visual Experience Designer", "Remote", Some("Design")),
        ];
        let ranked = rank(&catalog, &profile(&["Engineer"], &[], &["Engineering"]));

        assert_eq!(ranked[0].job.title, "Senior Product Engineer");
        assert_eq!(ranked[0].match_score, 70);
        assert_eq!(ranked[1].job.title, "Visual Experience Designer");
        assert_eq!(ranked[1].match_score, 0);
    }

    #[test]
    fn test_empty_catalog_gives_empty_result() {
        assert!(rank(&[], &profile(&["Engineer"], &["Remote"], &[])).is_empty());
    }

    #[test]
    fn test_length_preserved_and_scores_bounded() {
        let catalog = sample_catalog();
        let ranked = rank(&catalog, &profile(&["e"], &["e"], &["e"]));
        assert_eq!(ranked.len(), catalog.len());
        assert!(ranked.iter().all(|s| s.match_score <= 100));
    }

    #[test]
    fn test_empty_profile_keeps_catalog_order() {
        let catalog = sample_catalog();
        let ranked = rank(&catalog, &PreferenceProfile::default());
        assert!(ranked.iter().all(|s| s.match_score == 0));
        let ids: Vec<Uuid> = ranked.iter().map(|s| s.job.id).collect();
        let expected: Vec<Uuid> = catalog.iter().map(|j| j.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_exact_title_match_earns_role_weight() {
        let catalog = vec![make_job("Data Scientist", "Berlin", Some("Data"))];
        let ranked = rank(&catalog, &profile(&["data scientist"], &["Tokyo"], &["Finance"]));
        assert!(ranked[0].match_score >= ROLE_WEIGHT);
        assert!(ranked[0].breakdown.role);
    }

    #[test]
    fn test_all_three_dimensions_score_100() {
        let catalog = vec![make_job("Platform Engineer", "Remote", Some("Engineering"))];
        let ranked = rank(&catalog, &profile(&["Engineer"], &["remote"], &["engineering"]));
        assert_eq!(ranked[0].match_score, 100);
        assert!(ranked[0].strong_match);
    }

    #[test]
    fn test_two_dimension_pairs() {
        let job = make_job("Platform Engineer", "Remote", Some("Engineering"));
        let catalog = vec![job];

        let role_loc = rank(&catalog, &profile(&["Engineer"], &["Remote"], &["Design"]));
        assert_eq!(role_loc[0].match_score, 70);

        let loc_ind = rank(&catalog, &profile(&["Designer"], &["Remote"], &["Engineering"]));
        assert_eq!(loc_ind[0].match_score, 60);

        let role_ind = rank(&catalog, &profile(&["Engineer"], &["Paris"], &["Engineering"]));
        assert_eq!(role_ind[0].match_score, 70);
    }

    #[test]
    fn test_token_containing_title_matches() {
        let catalog = vec![make_job("Engineer", "Remote", None)];
        let ranked = rank(&catalog, &profile(&["Senior Product Engineer"], &[], &[]));
        assert_eq!(ranked[0].match_score, ROLE_WEIGHT);
    }

    #[test]
    fn test_multiple_matching_tokens_do_not_stack() {
        let catalog = vec![make_job("Senior Product Engineer", "Remote", None)];
        let ranked = rank(
            &catalog,
            &profile(&["Engineer", "Product", "Senior"], &[], &[]),
        );
        assert_eq!(ranked[0].match_score, ROLE_WEIGHT);
    }

    #[test]
    fn test_missing_category_never_matches_industry() {
        let catalog = vec![make_job("Engineer", "Remote", None)];
        let ranked = rank(&catalog, &profile(&[], &[], &["Engineering"]));
        assert_eq!(ranked[0].match_score, 0);
        assert!(!ranked[0].breakdown.industry);
    }

    #[test]
    fn test_field_whitespace_is_matched_literally() {
        // "senior engineer" does not contain "engineer " (trailing space).
        let catalog = vec![make_job("Engineer ", "Remote", None)];
        let ranked = rank(&catalog, &profile(&["Senior Engineer"], &[], &[]));
        assert!(!ranked[0].breakdown.role);
        assert_eq!(ranked[0].match_score, 0);

        let ranked = rank(&catalog, &profile(&["engineer"], &[], &[]));
        assert!(ranked[0].breakdown.role);
    }

    #[test]
    fn test_whitespace_only_field_never_matches() {
        let catalog = vec![make_job("   ", "Remote", None)];
        let ranked = rank(&catalog, &profile(&["Engineer"], &[], &[]));
        assert_eq!(ranked[0].match_score, 0);
    }

    #[test]
    fn test_short_token_matches_broadly() {
        let catalog = vec![make_job("Email Campaign Manager", "Remote", None)];
        let ranked = rank(&catalog, &profile(&["AI"], &[], &[]));
        assert_eq!(ranked[0].match_score, ROLE_WEIGHT);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = sample_catalog();
        // Both remote jobs score 30; the designer comes first in the catalog.
        let ranked = rank(&catalog, &profile(&[], &["Remote"], &[]));
        assert_eq!(ranked[0].job.title, "Visual Experience Designer");
        assert_eq!(ranked[1].job.title, "Platform Engineer");
        assert_eq!(ranked[2].job.title, "Senior Product Engineer");
        assert_eq!(ranked[3].job.title, "Data Scientist");
    }

    #[test]
    fn test_rank_is_deterministic() {
        let catalog = sample_catalog();
        let prefs = profile(&["Engineer"], &["Remote"], &["Design"]);
        assert_eq!(rank(&catalog, &prefs), rank(&catalog, &prefs));
    }

    #[test]
    fn test_strong_match_threshold() {
        let sixty = MatchBreakdown {
            role: false,
            location: true,
            industry: true,
        };
        let forty = MatchBreakdown {
            role: true,
            location: false,
            industry: false,
        };
        let job = make_job("x", "y", None);
        assert!(ScoredJobPosting::new(job.clone(), sixty).strong_match);
        assert!(!ScoredJobPosting::new(job, forty).strong_match);
    }

    #[test]
    fn test_scored_job_serializes_flat() {
        let catalog = vec![make_job("Engineer", "Remote", Some("Engineering"))];
        let ranked = rank(&catalog, &profile(&["Engineer"], &[], &[]));
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["title"], "Engineer");
        assert_eq!(json["match_score"], 40);
        assert_eq!(json["breakdown"]["role"], true);
    }
}
