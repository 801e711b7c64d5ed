//! Display formatting for market numbers.

/// Prices render with trader precision: 6 decimals.
pub(crate) fn format_price(value: f64) -> String {
    format!("${:.6}", value)
}

/// Compact currency for liquidity / FDV / volume columns:
/// $25.00M, $45.60K, $12.34.
pub(crate) fn format_compact_currency(value: f64) -> String {
    if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${:.2}", value)
    }
}

pub(crate) fn format_signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_uses_six_decimals() {
        assert_eq!(format_price(1.5), "$1.500000");
        assert_eq!(format_price(0.0), "$0.000000");
    }

    #[test]
    fn compact_currency_scales_by_magnitude() {
        assert_eq!(format_compact_currency(25_000_000.0), "$25.00M");
        assert_eq!(format_compact_currency(45_600.0), "$45.60K");
        assert_eq!(format_compact_currency(12.34), "$12.34");
        assert_eq!(format_compact_currency(1_000.0), "$1.00K");
    }

    #[test]
    fn signed_pct_keeps_the_sign() {
        assert_eq!(format_signed_pct(4.2), "+4.20%");
        assert_eq!(format_signed_pct(-3.1), "-3.10%");
    }
}
