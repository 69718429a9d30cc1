//! Spool weight arithmetic
//!
//! Missing inputs count as zero and results never go negative.

/// Remaining weight in grams from the initial and used weights
pub fn calculate_remaining_weight(initial_weight: Option<f64>, used_weight: Option<f64>) -> f64 {
    (initial_weight.unwrap_or(0.0) - used_weight.unwrap_or(0.0)).max(0.0)
}

/// Used weight in grams from the initial and remaining weights
pub fn calculate_used_weight(initial_weight: Option<f64>, remaining_weight: Option<f64>) -> f64 {
    (initial_weight.unwrap_or(0.0) - remaining_weight.unwrap_or(0.0)).max(0.0)
}
