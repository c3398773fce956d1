use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// Interest sheet, header row skipped.
pub const INTERESTS_RANGE: &str = "Foglio1!A2:D";
/// Ratings sheet, header row skipped.
pub const RATINGS_RANGE: &str = "Foglio2!A2:D";

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("sheets request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sheets API returned {status} for range {range}")]
    Status { status: StatusCode, range: String },
}

/// Response body of the Sheets v4 `values.get` endpoint. `values` is absent
/// when the range is empty.
#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Read-only client for one spreadsheet. Cheap to clone; handlers hold it as
/// shared axum state.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub fn new(config: &Config) -> Self {
        SheetsClient {
            http: reqwest::Client::new(),
            base_url: SHEETS_API_BASE.to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_key: config.sheets_api_key.clone(),
        }
    }

    /// Fetch the raw cell rows for a range. Every call hits the API; nothing
    /// is cached between requests.
    pub async fn values(&self, range: &str) -> Result<Vec<Vec<String>>, FetchError> {
        let url = format!(
            "{}/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        );

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                range: range.to_string(),
            });
        }

        let value_range: ValueRange = response.json().await?;
        Ok(value_range.values)
    }
}
