pub mod calc;
pub mod format;

use anyhow::anyhow;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use crate::common::SolanaRpcClient;
use crate::SolanaDapp;

/// Fetch the SOL balance of `account`, in lamports.
#[inline]
pub async fn get_sol_balance(
    rpc: &SolanaRpcClient,
    account: &Pubkey,
) -> Result<u64, anyhow::Error> {
    let balance = rpc.get_balance(account).await?;
    Ok(balance)
}

/// Fetch `owner`'s balance of `mint` from the associated token account,
/// in base units.
#[inline]
pub async fn get_token_balance(
    rpc: &SolanaRpcClient,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<u64, anyhow::Error> {
    let ata = get_associated_token_address(owner, mint);
    let balance = rpc.get_token_account_balance(&ata).await?;
    let balance_u64 = balance
        .amount
        .parse::<u64>()
        .map_err(|_| anyhow!("Failed to parse token balance"))?;
    Ok(balance_u64)
}

impl SolanaDapp {
    #[inline]
    pub async fn get_sol_balance(&self, account: &Pubkey) -> Result<u64, anyhow::Error> {
        get_sol_balance(&self.get_connection()?, account).await
    }

    #[inline]
    pub async fn get_token_balance(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<u64, anyhow::Error> {
        get_token_balance(&self.get_connection()?, owner, mint).await
    }
}
