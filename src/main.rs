use std::{str::FromStr, sync::Arc};

use sol_dapp_core::{
    common::{AnyResult, DappConfig, RpcConfig},
    constants::fees::DEFAULT_FEE_BASIS_POINTS,
    fees::distribution::{split_fee, FeeRecipient},
    utils::format::{format_amount, ui_amount_to_amount},
    SolanaDapp,
};
use solana_sdk::pubkey::Pubkey;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut dapp = create_client();
    show_fee_breakdown(&dapp)?;
    show_fee_distribution(&dapp)?;
    show_connection_reuse(&mut dapp)?;
    query_wallet(&dapp).await?;
    Ok(())
}

fn create_client() -> SolanaDapp {
    println!("Creating SolanaDapp client...");
    let config = DappConfig {
        rpc: RpcConfig::devnet(),
        fee_basis_points: DEFAULT_FEE_BASIS_POINTS,
    };
    let dapp = SolanaDapp::new(config);
    println!("SolanaDapp client created successfully!");
    dapp
}

fn show_fee_breakdown(dapp: &SolanaDapp) -> AnyResult<()> {
    let input_amount = 1000.0;
    let breakdown = dapp.get_fees().calculate_fee(input_amount, None)?;
    println!(
        "Charging {}% on {}: fee {}, net {}",
        breakdown.fee_rate_percent,
        format_amount(input_amount, None)?,
        format_amount(breakdown.fee_amount, None)?,
        format_amount(breakdown.net_amount, None)?,
    );
    Ok(())
}

fn show_fee_distribution(dapp: &SolanaDapp) -> AnyResult<()> {
    // 1000 tokens at 6 decimals, fee taken in base units
    let amount = ui_amount_to_amount(1000.0, 6)?;
    let fee = dapp.get_fees().fee_base_units(amount);

    let recipients = vec![
        FeeRecipient {
            address: Pubkey::new_unique(), // treasury placeholder
            share_bps: 7_000,
        },
        FeeRecipient {
            address: Pubkey::new_unique(), // creator placeholder
            share_bps: 3_000,
        },
    ];
    for payout in split_fee(fee, &recipients)? {
        println!("Paying {} base units to {}", payout.amount, payout.address);
    }
    Ok(())
}

fn show_connection_reuse(dapp: &mut SolanaDapp) -> AnyResult<()> {
    let first = dapp.get_connection()?;
    let second = dapp.get_connection()?;
    println!("Same client reused: {}", Arc::ptr_eq(&first, &second));

    dapp.reset_connection();
    let third = dapp.get_connection()?;
    println!("New client after reset: {}", !Arc::ptr_eq(&second, &third));

    dapp.set_rpc_endpoint(RpcConfig::mainnet().endpoint);
    let fourth = dapp.get_connection()?;
    println!(
        "New client after endpoint change: {}",
        !Arc::ptr_eq(&third, &fourth)
    );

    // Back to devnet for the balance query below
    dapp.set_rpc_endpoint(RpcConfig::devnet().endpoint);
    Ok(())
}

async fn query_wallet(dapp: &SolanaDapp) -> AnyResult<()> {
    let account = Pubkey::from_str("11111111111111111111111111111111")?;
    let balance = dapp.get_sol_balance(&account).await?;
    println!("Balance of {}: {} lamports", account, balance);
    Ok(())
}
