use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTOR_SEED, TREASURY_SEED, TREASURY_DATA_LEN};
use crate::states::Distributor;
use super::treasury::deposit_to_treasury;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer, recorded as the distributor owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Distributor state PDA, one per owner
    #[account(
        init,
        payer = owner,
        space = Distributor::DISCRIMINATOR.len() + Distributor::INIT_SPACE,
        seeds = [DISTRIBUTOR_SEED, owner.key().as_ref()],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Treasury holding the distributor's lamports
    #[account(
        mut,
        seeds = [TREASURY_SEED, distributor.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Lamports credited to the treasury balance on construction (may be 0)
    pub initial_amount: u64,
}

impl<'info> Initialize<'info> {
    pub fn handle(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        msg!("Initializing distributor for owner: {}", owner);
        msg!("Initial amount: {} lamports", params.initial_amount);

        let rent_reserve = Rent::get()?.minimum_balance(TREASURY_DATA_LEN);
        let funding = Distributor::construction_funding(
            ctx.accounts.treasury.lamports(),
            rent_reserve,
            params.initial_amount,
        )?;

        deposit_to_treasury(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            funding,
        )?;

        ctx.accounts.distributor.set_inner(Distributor::new(
            owner,
            ctx.bumps.distributor,
            ctx.bumps.treasury,
        ));

        msg!("Treasury funded with {} lamports (rent reserve {})", funding, rent_reserve);

        emit!(crate::events::DistributorInitialized {
            distributor: ctx.accounts.distributor.key(),
            owner,
            treasury: ctx.accounts.treasury.key(),
            initial_amount: params.initial_amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
