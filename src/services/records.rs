use chrono::NaiveDate;

/// One survey response, parsed out of a positional sheet row.
///
/// The sheets carry no enforced schema; by convention column 0 is a date,
/// column 1 the company, column 2 a category label (interest type, project
/// name, or mood), column 3 a numeric score. Each field is `None` when the
/// cell is missing, blank, or (for the date) unparseable, so every aggregator
/// states its validity requirements as field presence instead of re-checking
/// row lengths at each call site.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    pub date: Option<NaiveDate>,
    pub company: Option<String>,
    pub label: Option<String>,
    score: Option<String>,
}

impl SurveyRecord {
    pub fn from_cells(cells: &[String]) -> Self {
        SurveyRecord {
            date: cell(cells, 0).and_then(|raw| parse_date(&raw)),
            company: cell(cells, 1),
            label: cell(cells, 2),
            score: cell(cells, 3),
        }
    }

    /// The score as a discrete count. `None` when the cell is missing or not
    /// a plain integer.
    pub fn score_int(&self) -> Option<i64> {
        self.score.as_deref()?.parse().ok()
    }

    /// The score as a continuous value. Non-finite parses ("NaN", "inf") are
    /// rejected so downstream averages stay finite.
    pub fn score_float(&self) -> Option<f64> {
        self.score
            .as_deref()?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    /// The category label, or the caller's default when the cell was blank.
    pub fn label_or(&self, default: &str) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => default.to_string(),
        }
    }
}

pub fn parse_records(rows: &[Vec<String>]) -> Vec<SurveyRecord> {
    rows.iter().map(|row| SurveyRecord::from_cells(row)).collect()
}

fn cell(cells: &[String], index: usize) -> Option<String> {
    cells
        .get(index)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

/// Accepted date shapes: ISO date, RFC 3339 timestamp, or European d/m/Y.
/// Anything else is treated as no date at all.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn parses_a_full_row() {
        let record = SurveyRecord::from_cells(&row(&["2024-03-05", "Acme", "Curioso 🙂", "4"]));

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(record.company.as_deref(), Some("Acme"));
        assert_eq!(record.label.as_deref(), Some("Curioso 🙂"));
        assert_eq!(record.score_int(), Some(4));
        assert_eq!(record.score_float(), Some(4.0));
    }

    #[test]
    fn short_and_blank_cells_become_none() {
        let record = SurveyRecord::from_cells(&row(&["2024-03-05", "", "  "]));

        assert!(record.company.is_none());
        assert!(record.label.is_none());
        assert_eq!(record.score_int(), None);
        assert_eq!(record.score_float(), None);
    }

    #[test]
    fn non_numeric_scores_fail_both_parses() {
        let record = SurveyRecord::from_cells(&row(&["d", "Acme", "x", "molto"]));

        assert_eq!(record.score_int(), None);
        assert_eq!(record.score_float(), None);
    }

    #[test]
    fn fractional_score_is_float_only() {
        let record = SurveyRecord::from_cells(&row(&["d", "Acme", "x", "3.5"]));

        assert_eq!(record.score_int(), None);
        assert_eq!(record.score_float(), Some(3.5));
    }

    #[test]
    fn nan_score_is_rejected() {
        let record = SurveyRecord::from_cells(&row(&["d", "Acme", "x", "NaN"]));

        assert_eq!(record.score_float(), None);
    }

    #[test]
    fn date_formats() {
        assert_eq!(
            parse_date("2024-11-02"),
            NaiveDate::from_ymd_opt(2024, 11, 2)
        );
        assert_eq!(
            parse_date("02/11/2024"),
            NaiveDate::from_ymd_opt(2024, 11, 2)
        );
        assert_eq!(
            parse_date("2024-11-02T09:30:00+01:00"),
            NaiveDate::from_ymd_opt(2024, 11, 2)
        );
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn label_or_substitutes_default() {
        let record = SurveyRecord::from_cells(&row(&["d", "Acme"]));
        assert_eq!(record.label_or("Non specificato"), "Non specificato");

        let record = SurveyRecord::from_cells(&row(&["d", "Acme", "Design"]));
        assert_eq!(record.label_or("Non specificato"), "Design");
    }
}
