//! Text formatting for amounts, counts and content-stream numbers.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Insert `,` between every group of three digits: 45230 → "45,230".
pub fn group_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a monetary value in US dollars with thousands separators
/// and exactly two fraction digits: 25000.0 → "$25,000.00".
///
/// Rounds the shortest decimal form of `amount` half away from zero
/// to whole cents, so 1.005 prints as "$1.01". Negative amounts keep
/// their sign in front of the currency symbol.
pub fn format_money(amount: f64) -> String {
    let exact = Decimal::from_str(&amount.to_string()).unwrap_or_else(|_| {
        log::warn!("amount {} has no decimal form, printing zero", amount);
        Decimal::ZERO
    });
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_digits(whole), cents)
}

/// Format an odometer reading: 45230 → "45,230 km".
pub fn format_odometer(km: u32) -> String {
    format!("{} km", group_thousands(u64::from(km)))
}

/// Format a coordinate or font size for a content stream.
/// Whole numbers print without a fraction.
pub fn format_coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        let s = s.trim_end_matches('0');
        let s = s.trim_end_matches('.');
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(45230), "45,230");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn money() {
        assert_eq!(format_money(25000.0), "$25,000.00");
        assert_eq!(format_money(999.5), "$999.50");
        assert_eq!(format_money(18500.0), "$18,500.00");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.005), "$0.01");
        assert_eq!(format_money(1.005), "$1.01");
        assert_eq!(format_money(0.145), "$0.15");
        assert_eq!(format_money(2.675), "$2.68");
    }

    #[test]
    fn negative_money_keeps_sign() {
        assert_eq!(format_money(-5.0), "-$5.00");
        assert_eq!(format_money(-0.001), "$0.00");
        assert_eq!(format_money(-1.005), "-$1.01");
    }

    #[test]
    fn non_finite_money_prints_zero() {
        assert_eq!(format_money(f64::NAN), "$0.00");
    }

    #[test]
    fn odometer() {
        assert_eq!(format_odometer(45230), "45,230 km");
        assert_eq!(format_odometer(12), "12 km");
    }

    #[test]
    fn coords() {
        assert_eq!(format_coord(612.0), "612");
        assert_eq!(format_coord(48.0), "48");
        assert_eq!(format_coord(10.5), "10.5");
        assert_eq!(format_coord(0.125), "0.125");
    }
}
