use anchor_lang::prelude::*;

declare_id!("GwtsSR1zK8iVDjqutRXJ8BVxPwAaofY4Yyx75cMozJ3P");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;

pub use instructions::*;
pub use events::*;

#[program]
pub mod fund_distributor {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        Initialize::handle(ctx, params)
    }

    pub fn deposit(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        Deposit::handle(ctx, params)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        Withdraw::handle(ctx)
    }

    pub fn distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeFunds<'info>>,
        params: DistributeParams,
    ) -> Result<()> {
        DistributeFunds::handle(ctx, params)
    }

    pub fn distribute_tokens<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeTokenFunds<'info>>,
        params: DistributeTokensParams,
    ) -> Result<()> {
        DistributeTokenFunds::handle(ctx, params)
    }

    pub fn query_distributor(ctx: Context<QueryDistributor>) -> Result<DistributorInfo> {
        QueryDistributor::handle(ctx)
    }
}
