use solana_sdk::pubkey::Pubkey;

use crate::common::AnyResult;
use crate::constants::fees::BASIS_POINT_DENOMINATOR;
use crate::errors::Error;

/// A party entitled to a share of collected fees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeRecipient {
    pub address: Pubkey,
    /// Share of the fee in basis points. Shares across all recipients
    /// must sum to exactly 10_000.
    pub share_bps: u16,
}

/// Amount owed to one recipient after a split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeePayout {
    pub address: Pubkey,
    pub amount: u64,
}

/// Split `total_fee` (base units) across `recipients` pro rata by share.
///
/// Each payout is the floor of its pro-rata share; whatever flooring
/// leaves over goes to the last recipient, so the payouts always sum to
/// `total_fee`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `recipients` is empty or the
/// shares do not sum to 10_000 basis points.
pub fn split_fee(total_fee: u64, recipients: &[FeeRecipient]) -> AnyResult<Vec<FeePayout>> {
    if recipients.is_empty() {
        return Err(Error::InvalidArgument("Recipients must not be empty".to_string()).into());
    }
    let share_sum: u64 = recipients.iter().map(|r| r.share_bps as u64).sum();
    if share_sum != BASIS_POINT_DENOMINATOR {
        return Err(Error::InvalidArgument(format!(
            "Recipient shares sum to {} basis points, expected {}",
            share_sum, BASIS_POINT_DENOMINATOR
        ))
        .into());
    }

    let mut payouts = Vec::with_capacity(recipients.len());
    let mut distributed: u64 = 0;
    for recipient in recipients {
        let amount = (total_fee as u128 * recipient.share_bps as u128
            / BASIS_POINT_DENOMINATOR as u128) as u64;
        distributed += amount;
        payouts.push(FeePayout {
            address: recipient.address,
            amount,
        });
    }

    // Flooring can strand a few base units; hand them to the last payout.
    let dust = total_fee - distributed;
    if let Some(last) = payouts.last_mut() {
        last.amount += dust;
    }

    Ok(payouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipients(shares: &[u16]) -> Vec<FeeRecipient> {
        shares
            .iter()
            .map(|&share_bps| FeeRecipient {
                address: Pubkey::new_unique(),
                share_bps,
            })
            .collect()
    }

    #[test]
    fn test_even_split() {
        let payouts = split_fee(1_000, &recipients(&[5_000, 5_000])).unwrap();
        assert_eq!(payouts[0].amount, 500);
        assert_eq!(payouts[1].amount, 500);
    }

    #[test]
    fn test_dust_goes_to_last_recipient() {
        let payouts = split_fee(1_001, &recipients(&[3_333, 3_333, 3_334])).unwrap();
        assert_eq!(payouts[0].amount, 333);
        assert_eq!(payouts[1].amount, 333);
        assert_eq!(payouts[2].amount, 335);
    }

    #[test]
    fn test_payouts_sum_to_total() {
        let total = 999_999_937;
        let payouts = split_fee(total, &recipients(&[1, 2_499, 7_500])).unwrap();
        let sum: u64 = payouts.iter().map(|p| p.amount).sum();
        assert_eq!(sum, total);
    }

    #[test]
    fn test_share_sum_is_validated() {
        let err = split_fee(1_000, &recipients(&[5_000, 4_000])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_recipients_rejected() {
        assert!(split_fee(1_000, &[]).is_err());
    }

    #[test]
    fn test_zero_fee_pays_nothing() {
        let payouts = split_fee(0, &recipients(&[2_500, 7_500])).unwrap();
        assert!(payouts.iter().all(|p| p.amount == 0));
    }
}
