pub mod distribution;

use serde::Serialize;

use crate::common::AnyResult;
use crate::constants::fees::{
    BASIS_POINT_DENOMINATOR, DEFAULT_FEE_BASIS_POINTS, DEFAULT_TOKEN_DECIMALS,
};
use crate::errors::Error;
use crate::utils::calc::fee_with_ceiling;

/// Breakdown of the platform fee for one input amount, in UI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeBreakdown {
    /// Fee rate as a percentage (10 basis points -> 0.1).
    pub fee_rate_percent: f64,
    /// Fee charged at that rate, rounded to the requested decimals.
    pub fee_amount: f64,
    /// Sum of all fee components. The exact complement of `net_amount`;
    /// it can differ from `fee_amount` in the last ulp.
    pub total_fee: f64,
    /// What remains of the input after fees.
    pub net_amount: f64,
}

/// Computes platform fees at a fixed basis-point rate.
///
/// Amount math is done in UI units (f64); [`fee_base_units`] covers the
/// integer path for raw token amounts.
///
/// [`fee_base_units`]: FeeCalculator::fee_base_units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeCalculator {
    fee_basis_points: u64,
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_FEE_BASIS_POINTS)
    }
}

impl FeeCalculator {
    /// Create a calculator charging `fee_basis_points`, 1 basis point =
    /// 0.01%. Rates above 10_000 (100%) are clamped to 10_000.
    pub fn new(fee_basis_points: u64) -> Self {
        Self {
            fee_basis_points: fee_basis_points.min(BASIS_POINT_DENOMINATOR),
        }
    }

    pub fn fee_basis_points(&self) -> u64 {
        self.fee_basis_points
    }

    /// Fee rate as a percentage (10 basis points -> 0.1).
    #[inline]
    pub fn fee_rate_percent(&self) -> f64 {
        self.fee_basis_points as f64 / 100.0
    }

    /// Fee rate as a fraction (10 basis points -> 0.001).
    #[inline]
    pub fn fee_rate(&self) -> f64 {
        self.fee_basis_points as f64 / BASIS_POINT_DENOMINATOR as f64
    }

    /// Break `input_amount` down into fee and net parts.
    ///
    /// The fee is rounded to `decimals` fractional digits (default 6, the
    /// usual quote token precision). `net_amount` is what the caller keeps
    /// after that fee, and `net_amount + total_fee` reproduces
    /// `input_amount` exactly.
    ///
    /// # Arguments
    ///
    /// * `input_amount` - Amount being charged, in UI units
    /// * `decimals` - Fractional digits the fee is rounded to (defaults to 6)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `input_amount` is negative,
    /// NaN or infinite.
    pub fn calculate_fee(
        &self,
        input_amount: f64,
        decimals: Option<u8>,
    ) -> AnyResult<FeeBreakdown> {
        validate_amount(input_amount, "input_amount")?;
        let decimals = decimals.unwrap_or(DEFAULT_TOKEN_DECIMALS);

        let scale = 10f64.powi(decimals as i32);
        let fee_amount = (input_amount * self.fee_rate() * scale).round() / scale;
        let net_amount = input_amount - fee_amount;
        let total_fee = input_amount - net_amount;

        Ok(FeeBreakdown {
            fee_rate_percent: self.fee_rate_percent(),
            fee_amount,
            total_fee,
            net_amount,
        })
    }

    /// Fee owed on a token amount priced in the quote currency.
    ///
    /// # Arguments
    ///
    /// * `token_amount` - Token amount in UI units
    /// * `unit_price` - Price of one token in the quote currency
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when either argument is negative,
    /// NaN or infinite.
    pub fn fee_in_quote_currency(&self, token_amount: f64, unit_price: f64) -> AnyResult<f64> {
        validate_amount(token_amount, "token_amount")?;
        validate_amount(unit_price, "unit_price")?;
        Ok(token_amount * unit_price * self.fee_rate())
    }

    /// Fee on a raw base-unit amount, rounded up so the fee is never
    /// under-collected. The result never exceeds `amount`.
    #[inline]
    pub fn fee_base_units(&self, amount: u64) -> u64 {
        fee_with_ceiling(amount as u128, self.fee_basis_points as u128) as u64
    }
}

fn validate_amount(amount: f64, name: &str) -> Result<(), Error> {
    if !amount.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, amount
        )));
    }
    if amount < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} cannot be negative, got {}",
            name, amount
        )));
    }
    Ok(())
}
