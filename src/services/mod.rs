pub mod correlation;
pub mod interest;
pub mod mood;
pub mod ratings;
pub mod records;
pub mod trend;

/// All reported averages carry one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
