use anchor_lang::prelude::*;

/// Event emitted when a distributor is created
#[event]
pub struct DistributorInitialized {
    /// Distributor state PDA
    pub distributor: Pubkey,
    /// Owner recorded at construction
    pub owner: Pubkey,
    /// Treasury PDA holding the lamports
    pub treasury: Pubkey,
    /// Lamports credited to the treasury balance on construction
    pub initial_amount: u64,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when the owner withdraws the treasury balance
#[event]
pub struct Withdrawal {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Event emitted after every receiver of a lamport distribution was paid
#[event]
pub struct Distribute {
    pub caller: Pubkey,
    pub amount_per_receiver: u64,
    pub receivers: Vec<Pubkey>,
}

/// Event emitted after every receiver of a token distribution was paid
#[event]
pub struct DistributeTokens {
    pub caller: Pubkey,
    /// Mint of the distributed token
    pub mint: Pubkey,
    pub amount_per_receiver: u64,
    /// Wallets owning the receiving token accounts, in payout order
    pub receivers: Vec<Pubkey>,
}
