use crate::common::AnyResult;
use crate::constants::fees::DEFAULT_FORMAT_PRECISION;
use crate::errors::Error;

/// Render `amount` as a fixed-point decimal string.
///
/// `precision` defaults to 6 fractional digits. Rounding follows Rust's
/// float formatting, which rounds half to even.
///
/// # Arguments
/// * `amount` - Amount in UI units
/// * `precision` - Number of fractional digits (defaults to 6)
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `amount` is NaN or infinite.
pub fn format_amount(amount: f64, precision: Option<usize>) -> AnyResult<String> {
    if !amount.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "Cannot format non-finite amount {}",
            amount
        ))
        .into());
    }
    let precision = precision.unwrap_or(DEFAULT_FORMAT_PRECISION);
    Ok(format!("{:.*}", precision, amount))
}

/// Convert a raw base-unit amount into UI units.
#[inline]
pub fn amount_to_ui_amount(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10f64.powi(decimals as i32)
}

/// Convert a UI amount into raw base units, rounding to the nearest unit.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `ui_amount` is negative,
/// non-finite, or too large for u64 base units.
pub fn ui_amount_to_amount(ui_amount: f64, decimals: u8) -> AnyResult<u64> {
    if !ui_amount.is_finite() || ui_amount < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "Cannot convert amount {} to base units",
            ui_amount
        ))
        .into());
    }
    let scaled = (ui_amount * 10f64.powi(decimals as i32)).round();
    if scaled > u64::MAX as f64 {
        return Err(Error::InvalidArgument(format!(
            "Amount {} overflows base units",
            ui_amount
        ))
        .into());
    }
    Ok(scaled as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_default_precision() {
        assert_eq!(format_amount(1.5, None).unwrap(), "1.500000");
        assert_eq!(format_amount(0.0, None).unwrap(), "0.000000");
    }

    #[test]
    fn test_format_amount_custom_precision() {
        assert_eq!(format_amount(0.1234567, Some(4)).unwrap(), "0.1235");
        assert_eq!(format_amount(42.0, Some(0)).unwrap(), "42");
    }

    #[test]
    fn test_format_amount_rounds_half_to_even() {
        assert_eq!(format_amount(2.5, Some(0)).unwrap(), "2");
        assert_eq!(format_amount(3.5, Some(0)).unwrap(), "4");
    }

    #[test]
    fn test_format_amount_rejects_non_finite() {
        assert!(format_amount(f64::NAN, None).is_err());
        assert!(format_amount(f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_ui_amount_round_trip() {
        assert_eq!(ui_amount_to_amount(1.5, 6).unwrap(), 1_500_000);
        assert_eq!(amount_to_ui_amount(1_500_000, 6), 1.5);
    }

    #[test]
    fn test_ui_amount_to_amount_rejects_negative() {
        let err = ui_amount_to_amount(-0.5, 6).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidArgument(_))
        ));
    }
}
