use crate::constants::fees::BASIS_POINT_DENOMINATOR;

/// Ceiling division so integer fee math never under-collects.
///
/// # Arguments
/// * `a` - Dividend
/// * `b` - Divisor
#[inline]
pub fn ceil_div(a: u128, b: u128) -> u128 {
    (a + b - 1) / b
}

/// Fee on `amount` at `fee_basis_points`, rounded up.
///
/// # Arguments
/// * `amount` - Amount in base units
/// * `fee_basis_points` - Fee basis points, 1 basis point = 0.01%
///
/// # Examples
/// * fee_basis_points = 10  -> 0.1% fee
/// * fee_basis_points = 25  -> 0.25% fee
/// * fee_basis_points = 100 -> 1% fee
pub fn fee_with_ceiling(amount: u128, fee_basis_points: u128) -> u128 {
    ceil_div(amount * fee_basis_points, BASIS_POINT_DENOMINATOR as u128)
}

/// Most a caller can end up paying once slippage is added on top.
///
/// Intermediate math runs in u128; the result saturates at u64::MAX.
///
/// # Examples
/// * basis_points = 100 -> 1% slippage
/// * basis_points = 500 -> 5% slippage
pub fn max_amount_with_slippage(amount: u64, basis_points: u64) -> u64 {
    amount.saturating_add(slippage_amount(amount, basis_points))
}

/// Least a caller accepts once slippage is taken off. Floors at zero
/// rather than underflowing.
pub fn min_amount_with_slippage(amount: u64, basis_points: u64) -> u64 {
    amount.saturating_sub(slippage_amount(amount, basis_points))
}

fn slippage_amount(amount: u64, basis_points: u64) -> u64 {
    let slippage = amount as u128 * basis_points as u128 / BASIS_POINT_DENOMINATOR as u128;
    u64::try_from(slippage).unwrap_or(u64::MAX)
}
