use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How hard a skill is to pick up, as shown on the trends dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
            Difficulty::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechGrowth {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Maturity {
    Early,
    Emerging,
    Growing,
}

/// A single high-income skill card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: String,
    pub description: String,
    pub salary: String,
    pub growth: String,
    pub difficulty: Difficulty,
    pub time_to_learn: String,
    pub courses: [String; 3],
    /// Display gradient, assigned client-side only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_gradient: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergingTechRecord {
    pub name: String,
    pub description: String,
    pub growth: TechGrowth,
    pub maturity: Maturity,
    pub industries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_gradient: Option<String>,
}

/// Unit of caching and the payload returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTrendsDataset {
    pub article_title: String,
    /// Human-readable article date ("March 5, 2025"), "Unknown", or an ISO timestamp.
    pub last_updated: String,
    pub skills: Vec<SkillRecord>,
    pub emerging_technologies: Vec<EmergingTechRecord>,
}

/// Which path produced a `/api/skills` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    Cache,
    Fresh,
    StaleCache,
    Fallback,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Cache => "cache",
            DataSource::Fresh => "fresh",
            DataSource::StaleCache => "stale-cache",
            DataSource::Fallback => "fallback",
        }
    }
}

/// Response envelope for `GET /api/skills`. Always served with HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTrendsResponse {
    pub success: bool,
    pub data: SkillTrendsDataset,
    pub source: DataSource,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
