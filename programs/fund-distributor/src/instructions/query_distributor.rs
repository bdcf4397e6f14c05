use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTOR_SEED, TREASURY_SEED, TREASURY_DATA_LEN};
use crate::states::Distributor;

/// Query instruction to get the owner, treasury balance and activity totals
#[derive(Accounts)]
pub struct QueryDistributor<'info> {
    #[account(
        seeds = [DISTRIBUTOR_SEED, distributor.owner.as_ref()],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        seeds = [TREASURY_SEED, distributor.key().as_ref()],
        bump = distributor.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,
}

/// Response structure for distributor query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct DistributorInfo {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    /// Withdrawable lamports (above the rent reserve)
    pub treasury_balance: u64,
    /// Lamports kept in the treasury to stay rent exempt
    pub rent_reserve: u64,
    pub total_withdrawn: u64,
    pub total_distributed: u64,
    pub distribution_count: u32,
    pub token_distribution_count: u32,
    pub last_activity_timestamp: i64,
}

impl DistributorInfo {
    pub fn new(distributor: &Distributor, treasury: Pubkey, treasury_lamports: u64, rent_reserve: u64) -> Self {
        Self {
            owner: distributor.owner,
            treasury,
            treasury_balance: Distributor::treasury_balance(treasury_lamports, rent_reserve),
            rent_reserve,
            total_withdrawn: distributor.total_withdrawn,
            total_distributed: distributor.total_distributed,
            distribution_count: distributor.distribution_count,
            token_distribution_count: distributor.token_distribution_count,
            last_activity_timestamp: distributor.last_activity_timestamp,
        }
    }
}

impl<'info> QueryDistributor<'info> {
    pub fn handle(ctx: Context<QueryDistributor>) -> Result<DistributorInfo> {
        let rent_reserve = Rent::get()?.minimum_balance(TREASURY_DATA_LEN);
        let info = DistributorInfo::new(
            &ctx.accounts.distributor,
            ctx.accounts.treasury.key(),
            ctx.accounts.treasury.lamports(),
            rent_reserve,
        );

        msg!("Distributor owner: {}", info.owner);
        msg!("Treasury balance: {} lamports", info.treasury_balance);
        msg!("Total withdrawn: {} lamports", info.total_withdrawn);
        msg!("Total distributed: {} lamports", info.total_distributed);
        msg!("Distributions: {} lamport, {} token", info.distribution_count, info.token_distribution_count);

        Ok(info)
    }
}
