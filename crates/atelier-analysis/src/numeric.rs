//! Rounding and non-finite absorption helpers.

/// Round `value` to `decimals` places. Negative zero becomes zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn round_vec(values: &[f64], decimals: u32) -> Vec<f64> {
    values.iter().map(|&v| round_to(v, decimals)).collect()
}

pub fn round_rows(rows: &[Vec<f64>], decimals: u32) -> Vec<Vec<f64>> {
    rows.iter().map(|row| round_vec(row, decimals)).collect()
}

/// Replace NaN/Infinity with 0. Returns the value and whether it was replaced.
pub fn finite_or_zero(value: f64) -> (f64, bool) {
    if value.is_finite() {
        (value, false)
    } else {
        (0.0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(0.12346, 4), 0.1235);
        assert_eq!(round_to(-0.12346, 4), -0.1235);
        assert_eq!(round_to(2.0, 0), 2.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let r = round_to(-0.00001, 4);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn non_finite_becomes_zero() {
        assert_eq!(finite_or_zero(f64::NAN), (0.0, true));
        assert_eq!(finite_or_zero(f64::INFINITY), (0.0, true));
        assert_eq!(finite_or_zero(0.5), (0.5, false));
    }
}
