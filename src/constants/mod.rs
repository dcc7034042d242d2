pub mod fees {
    /// Platform fee applied to swaps and launches, in basis points.
    pub const DEFAULT_FEE_BASIS_POINTS: u64 = 10; // 0.1%
    pub const BASIS_POINT_DENOMINATOR: u64 = 10_000;
    /// Decimals used by the quote token (USDC-style) when none are given.
    pub const DEFAULT_TOKEN_DECIMALS: u8 = 6;
    pub const DEFAULT_FORMAT_PRECISION: usize = 6;
}

pub mod rpc {
    pub const MAINNET_RPC_URL: &'static str = "https://api.mainnet-beta.solana.com";
    pub const DEVNET_RPC_URL: &'static str = "https://api.devnet.solana.com";
}
