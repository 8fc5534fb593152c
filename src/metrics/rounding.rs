//! Rounding policy
//!
//! Every derived metric is rounded through these helpers so results are
//! identical wherever they are computed. Ties round toward positive infinity.

/// Round to the nearest whole number, ties toward +∞ (2.5 -> 3, -2.5 -> -2)
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round to the nearest integer
pub fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}
