//! Closed-form growth, amortization and deflation math
//!
//! All rates here are decimals (0.065, not 6.5). Nothing is rounded.

/// Monthly rates smaller than this in magnitude take the zero-rate formulas
pub const RATE_EPSILON: f64 = 1e-10;

/// True when `monthly_rate` is too small for the annuity formulas to be evaluated reliably
pub fn is_zero_rate(monthly_rate: f64) -> bool {
    monthly_rate.abs() < RATE_EPSILON
}

/// Future value of a balance growing at `annual_rate` for `years`, plus a level
/// monthly contribution compounded at `annual_rate / 12` for `years * 12` months.
///
/// The balance compounds annually while the contributions compound monthly. At a
/// (near-)zero monthly rate the annuity term degenerates to `monthly_contribution * months`.
pub fn future_value(current_value: f64, annual_rate: f64, monthly_contribution: f64, years: u32) -> f64 {
    let grown = current_value * (1.0 + annual_rate).powf(years as f64);
    if monthly_contribution == 0.0 {
        return grown;
    }

    let months = years as f64 * 12.0;
    let monthly_rate = annual_rate / 12.0;
    let contributions = if is_zero_rate(monthly_rate) {
        monthly_contribution * months
    } else {
        monthly_contribution * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
    };
    grown + contributions
}

/// Level monthly payment that retires `principal` in `total_months` at `monthly_rate`.
///
/// Returns `None` for a (near-)zero rate, or when the annuity denominator `(1+i)^n - 1`
/// is zero, which happens for `n == 0`.
pub fn level_payment(principal: f64, monthly_rate: f64, total_months: u32) -> Option<f64> {
    if is_zero_rate(monthly_rate) {
        return None;
    }
    let growth = (1.0 + monthly_rate).powf(total_months as f64);
    let denominator = growth - 1.0;
    if denominator == 0.0 {
        return None;
    }
    Some(principal * monthly_rate * growth / denominator)
}

/// Remaining balance of an amortizing loan after `months_elapsed` level payments, floored at 0.
///
/// `None` under the same conditions as [`level_payment`].
pub fn remaining_balance(principal: f64, monthly_rate: f64, total_months: u32, months_elapsed: u32) -> Option<f64> {
    let payment = level_payment(principal, monthly_rate, total_months)?;
    let growth = (1.0 + monthly_rate).powf(months_elapsed as f64);
    let remaining = principal * growth - payment * (growth - 1.0) / monthly_rate;
    Some(remaining.max(0.0))
}

/// Balance reduced by a flat payment each month with no interest, floored at 0
pub fn linear_paydown(principal: f64, payment: f64, months_elapsed: u32) -> f64 {
    (principal - payment * months_elapsed as f64).max(0.0)
}

/// Cumulative inflation factor `(1 + pct/100)^years`
pub fn inflation_factor(inflation_rate_pct: f64, years: u32) -> f64 {
    (1.0 + inflation_rate_pct / 100.0).powf(years as f64)
}

/// Convert a nominal amount `years` out into today's money
pub fn deflate(nominal: f64, inflation_rate_pct: f64, years: u32) -> f64 {
    nominal / inflation_factor(inflation_rate_pct, years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_future_value_no_contribution() {
        let fv = future_value(450_000.0, 0.035, 0.0, 10);
        assert_relative_eq!(fv, 450_000.0 * 1.035_f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_future_value_with_contributions() {
        // 25000 at 4.5% plus 500/month for one year
        let fv = future_value(25_000.0, 0.045, 500.0, 1);
        assert_abs_diff_eq!(fv, 32_250.31, epsilon = 0.01);
    }

    #[test]
    fn test_future_value_zero_rate_is_linear() {
        for years in 0..=20 {
            let fv = future_value(1_000.0, 0.0, 250.0, years);
            assert_eq!(fv, 1_000.0 + 250.0 * 12.0 * years as f64);
        }
    }

    #[test]
    fn test_future_value_tiny_rate_keeps_contributions() {
        // 1 + 1e-18 rounds to 1, so the annuity formula would drop every contribution
        let tiny = future_value(1_000.0, 1e-17, 500.0, 10);
        assert_eq!(tiny, future_value(1_000.0, 0.0, 500.0, 10));
        assert_eq!(tiny, 61_000.0);

        let small = future_value(1_000.0, 6e-10, 500.0, 10);
        assert_relative_eq!(small, 61_000.0, max_relative = 1e-6);
    }

    #[test]
    fn test_future_value_negative_rate_depreciates() {
        let fv = future_value(30_000.0, -0.15, 0.0, 3);
        assert_relative_eq!(fv, 30_000.0 * 0.85_f64.powi(3), max_relative = 1e-12);
        assert!(fv < 30_000.0);
    }

    #[test]
    fn test_level_payment_mortgage() {
        // 320k at 6.5% over 30 years
        let payment = level_payment(320_000.0, 0.065 / 12.0, 360).unwrap();
        assert_abs_diff_eq!(payment, 2_022.62, epsilon = 0.01);
    }

    #[test]
    fn test_level_payment_degenerate() {
        assert!(level_payment(1_000.0, 0.0, 12).is_none());
        assert!(level_payment(1_000.0, 0.01, 0).is_none());
        assert!(level_payment(1_000.0, 1e-300, 12).is_none());
        assert!(remaining_balance(1_000.0, 1e-12, 12, 3).is_none());
        assert!(remaining_balance(1_000.0, -1e-12, 12, 3).is_none());
    }

    #[test]
    fn test_remaining_balance_endpoints() {
        let i = 0.065 / 12.0;
        assert_eq!(remaining_balance(320_000.0, i, 360, 0), Some(320_000.0));

        let last = remaining_balance(320_000.0, i, 360, 360).unwrap();
        assert_abs_diff_eq!(last, 0.0, epsilon = 1e-4);

        let after_year = remaining_balance(320_000.0, i, 360, 12).unwrap();
        assert_abs_diff_eq!(after_year, 316_423.28, epsilon = 0.01);
    }

    #[test]
    fn test_remaining_balance_never_negative() {
        let i = 0.05 / 12.0;
        let past_end = remaining_balance(10_000.0, i, 24, 36).unwrap();
        assert_eq!(past_end, 0.0);
    }

    #[test]
    fn test_linear_paydown_floors_at_zero() {
        assert_eq!(linear_paydown(5_000.0, 200.0, 12), 2_600.0);
        assert_eq!(linear_paydown(5_000.0, 200.0, 36), 0.0);
    }

    #[test]
    fn test_deflate() {
        assert_eq!(deflate(1_000.0, 2.5, 0), 1_000.0);
        assert_relative_eq!(deflate(1_025.0, 2.5, 1), 1_000.0, max_relative = 1e-12);
        assert_eq!(deflate(1_000.0, 0.0, 30), 1_000.0);
    }
}
