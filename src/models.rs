use serde::Serialize;
use std::collections::HashMap;

/// Aggregate view of the interest sheet: how many responses named each
/// interest type, plus the overall average interest score.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterestSummary {
    pub interests: HashMap<String, u32>,
    pub avg_interest: f64,
    pub total_entries: u32,
}

/// Aggregate view of the ratings sheet: per-project average rating, overall
/// average, and how many distinct companies responded.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub project_ratings: HashMap<String, f64>,
    pub avg_rating: f64,
    pub total_entries: u32,
    pub unique_companies: u32,
}

/// One company's paired interest/rating point. Only emitted for companies
/// present in both source sheets.
#[derive(Serialize, Debug, PartialEq)]
pub struct CorrelationPoint {
    pub company: String,
    pub interest: i64,
    pub rating: f64,
}

/// Counts per mood label. The five labels are fixed fields so every response
/// carries all of them, zero or not.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct MoodCounts {
    #[serde(rename = "Non interessato 😢")]
    pub not_interested: u32,
    #[serde(rename = "Distratto 😕")]
    pub distracted: u32,
    #[serde(rename = "Curioso 🙂")]
    pub curious: u32,
    #[serde(rename = "Coinvolto 😃")]
    pub engaged: u32,
    #[serde(rename = "Molto interessato 🤩")]
    pub very_interested: u32,
}

/// Average rating for one calendar month. The trend endpoint always returns
/// twelve of these, in month order.
#[derive(Serialize, Debug, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub rating: f64,
}

#[derive(Serialize, Debug)]
pub struct SkillEntry {
    pub skill: &'static str,
    pub level: u32,
}

#[derive(Serialize, Debug)]
pub struct ProjectTimeEntry {
    pub project: &'static str,
    pub hours: u32,
}

/// Wire shape for failed requests: a stable per-operation code plus a
/// human-readable message. Internals never leak past the message.
#[derive(Serialize, Debug)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}
