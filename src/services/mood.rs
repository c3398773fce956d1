use crate::models::MoodCounts;
use crate::services::records::SurveyRecord;

/// Count occurrences of the five predetermined mood labels. Matching is
/// exact: a label outside the set contributes to no bucket.
pub fn count_moods(records: &[SurveyRecord]) -> MoodCounts {
    let mut counts = MoodCounts::default();

    for record in records {
        match record.label.as_deref() {
            Some("Non interessato 😢") => counts.not_interested += 1,
            Some("Distratto 😕") => counts.distracted += 1,
            Some("Curioso 🙂") => counts.curious += 1,
            Some("Coinvolto 😃") => counts.engaged += 1,
            Some("Molto interessato 🤩") => counts.very_interested += 1,
            _ => {}
        }
    }

    counts
}
