use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTOR_SEED, TREASURY_SEED, TREASURY_DATA_LEN};
use crate::errors::DistributorError;
use crate::states::Distributor;
use super::treasury::pay_from_treasury;

/// Owner-only withdrawal of the entire treasury balance
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED, distributor.owner.as_ref()],
        bump = distributor.bump,
        constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized
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

impl<'info> Withdraw<'info> {
    pub fn handle(ctx: Context<Withdraw>) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        let distributor_key = ctx.accounts.distributor.key();
        msg!("Processing withdrawal for owner: {}", owner);

        // Amount is fixed and booked before the transfer leaves the program
        let rent_reserve = Rent::get()?.minimum_balance(TREASURY_DATA_LEN);
        let amount = Distributor::treasury_balance(ctx.accounts.treasury.lamports(), rent_reserve);
        ctx.accounts.distributor.record_withdrawal(amount, Clock::get()?.unix_timestamp)?;

        let treasury_bump = [ctx.accounts.distributor.treasury_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, distributor_key.as_ref(), &treasury_bump]];

        pay_from_treasury(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.owner.to_account_info(),
            signer_seeds,
            amount,
        )?;

        msg!("Withdrew {} lamports to owner", amount);

        emit!(crate::events::Withdrawal {
            recipient: owner,
            amount,
        });

        Ok(())
    }
}
