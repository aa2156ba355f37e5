use crate::model::ScoringRules;

const RATING_FLOOR_ESTIMATE: f64 = -10.0;
const LOWER_BREAK: f64 = -1.5;
const UPPER_BREAK: f64 = 2.0;
const RATING_CAP: f64 = 150.0;

/// Map an external continuous skill estimate onto the 0-150 internal rating
/// scale, rounded to 2 decimal places. Total over all inputs: absent
/// estimates fall back to `rules.default_skill_estimate`, non-finite ones
/// rate 0.
#[must_use]
pub fn normalize_rating(estimate: Option<f64>, rules: &ScoringRules) -> f64 {
    let x = estimate.unwrap_or(rules.default_skill_estimate);
    if !x.is_finite() {
        return 0.0;
    }

    let rating = if x < LOWER_BREAK {
        interpolate(x, RATING_FLOOR_ESTIMATE, LOWER_BREAK, 0.0, 5.0)
    } else if x <= UPPER_BREAK {
        interpolate(x, LOWER_BREAK, UPPER_BREAK, 5.0, 100.0)
    } else {
        100.0 + 20.0 * ((x - UPPER_BREAK) / 1.5).sqrt()
    };

    round2(rating.clamp(0.0, RATING_CAP))
}

fn interpolate(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let t = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + t * (y1 - y0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
