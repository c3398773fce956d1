use axum::{extract::State, Json};
use tracing::info;

use crate::handlers::{fetch_failed, Rejection};
use crate::models::{CorrelationPoint, TrendPoint};
use crate::services::records::parse_records;
use crate::services::{correlation, trend};
use crate::sheets::{SheetsClient, INTERESTS_RANGE, RATINGS_RANGE};

/// Needs both sheets; the fetches are independent so they run concurrently
/// and the first failure fails the whole request.
pub async fn get_correlation(
    State(sheets): State<SheetsClient>,
) -> Result<Json<Vec<CorrelationPoint>>, Rejection> {
    let (interest_rows, rating_rows) = tokio::try_join!(
        sheets.values(INTERESTS_RANGE),
        sheets.values(RATINGS_RANGE),
    )
    .map_err(|e| {
        fetch_failed(
            "correlation_fetch_failed",
            "Errore nel recupero dei dati di correlazione",
            e,
        )
    })?;

    let points = correlation::correlate(
        &parse_records(&interest_rows),
        &parse_records(&rating_rows),
    );
    info!("correlation: {} joined companies", points.len());

    Ok(Json(points))
}

pub async fn get_trend(
    State(sheets): State<SheetsClient>,
) -> Result<Json<Vec<TrendPoint>>, Rejection> {
    let rows = sheets.values(RATINGS_RANGE).await.map_err(|e| {
        fetch_failed(
            "trend_fetch_failed",
            "Errore nel recupero dei dati dell'andamento temporale",
            e,
        )
    })?;

    Ok(Json(trend::monthly_trend(&parse_records(&rows))))
}
