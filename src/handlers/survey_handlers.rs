use axum::{extract::State, Json};
use tracing::info;

use crate::handlers::{fetch_failed, Rejection};
use crate::models::{InterestSummary, MoodCounts, RatingSummary};
use crate::services::records::parse_records;
use crate::services::{interest, mood, ratings};
use crate::sheets::{SheetsClient, INTERESTS_RANGE, RATINGS_RANGE};

pub async fn get_interests(
    State(sheets): State<SheetsClient>,
) -> Result<Json<InterestSummary>, Rejection> {
    let rows = sheets.values(INTERESTS_RANGE).await.map_err(|e| {
        fetch_failed(
            "interests_fetch_failed",
            "Errore nel recupero dei dati di interesse",
            e,
        )
    })?;

    let summary = interest::summarize_interest(&parse_records(&rows));
    info!(
        "interests: {} valid of {} rows",
        summary.total_entries,
        rows.len()
    );

    Ok(Json(summary))
}

pub async fn get_ratings(
    State(sheets): State<SheetsClient>,
) -> Result<Json<RatingSummary>, Rejection> {
    let rows = sheets.values(RATINGS_RANGE).await.map_err(|e| {
        fetch_failed(
            "ratings_fetch_failed",
            "Errore nel recupero dei dati di valutazione",
            e,
        )
    })?;

    let summary = ratings::summarize_ratings(&parse_records(&rows));
    info!(
        "ratings: {} valid of {} rows",
        summary.total_entries,
        rows.len()
    );

    Ok(Json(summary))
}

pub async fn get_mood(State(sheets): State<SheetsClient>) -> Result<Json<MoodCounts>, Rejection> {
    let rows = sheets.values(INTERESTS_RANGE).await.map_err(|e| {
        fetch_failed("mood_fetch_failed", "Errore nel recupero dei dati del mood", e)
    })?;

    Ok(Json(mood::count_moods(&parse_records(&rows))))
}
