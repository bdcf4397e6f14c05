use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTOR_SEED, TREASURY_SEED};
use crate::states::Distributor;
use super::treasury::deposit_to_treasury;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DepositParams {
    pub amount: u64,
}

/// Anyone may fund the treasury; plain system transfers to it work as well
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        seeds = [DISTRIBUTOR_SEED, distributor.owner.as_ref()],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, distributor.key().as_ref()],
        bump = distributor.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn handle(ctx: Context<Deposit>, params: DepositParams) -> Result<()> {
        msg!("Deposit of {} lamports from {}", params.amount, ctx.accounts.depositor.key());

        deposit_to_treasury(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.depositor.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            params.amount,
        )
    }
}
