//! Preference profile — the three free-text token lists a user saves.

use serde::{Deserialize, Serialize};

/// Desired roles, locations and industries.
///
/// Every token is trimmed and non-empty. The profile is rebuilt wholesale on
/// each save, so there are no incremental edit operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPreferences")]
pub struct PreferenceProfile {
    roles: Vec<String>,
    locations: Vec<String>,
    industries: Vec<String>,
}

/// Wire shape before normalisation.
#[derive(Deserialize)]
pub struct RawPreferences {
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    industries: Vec<String>,
}

impl From<RawPreferences> for PreferenceProfile {
    fn from(raw: RawPreferences) -> Self {
        PreferenceProfile::new(raw.roles, raw.locations, raw.industries)
    }
}

impl PreferenceProfile {
    pub fn new<R, L, I>(roles: R, locations: L, industries: I) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        L: IntoIterator,
        L::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            roles: clean_tokens(roles),
            locations: clean_tokens(locations),
            industries: clean_tokens(industries),
        }
    }

    /// Builds a profile from the comma-separated text of the preference form.
    pub fn from_comma_lists(roles: &str, locations: &str, industries: &str) -> Self {
        Self::new(
            roles.split(','),
            locations.split(','),
            industries.split(','),
        )
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn industries(&self) -> &[String] {
        &self.industries
    }
}

fn clean_tokens<T>(tokens: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
