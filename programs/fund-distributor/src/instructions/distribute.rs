use anchor_lang::prelude::*;
use crate::constants::{DISTRIBUTOR_SEED, TREASURY_SEED};
use crate::errors::DistributorError;
use crate::states::Distributor;
use super::treasury::{deposit_to_treasury, pay_from_treasury};

/// Equal-split lamport payout; receivers are passed as remaining accounts
#[derive(Accounts)]
pub struct DistributeFunds<'info> {
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

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeParams {
    /// Lamports every receiver gets
    pub amount_per_receiver: u64,
    /// Lamports the owner sends along with the call; anything above the
    /// required total stays in the treasury
    pub attached_amount: u64,
}

impl<'info> DistributeFunds<'info> {
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, DistributeFunds<'info>>,
        params: DistributeParams,
    ) -> Result<()> {
        let receivers = ctx.remaining_accounts;
        let owner = ctx.accounts.owner.key();
        msg!("Distributing {} lamports to {} receivers", params.amount_per_receiver, receivers.len());
        msg!("Attached amount: {} lamports", params.attached_amount);

        let total = validate_equal_split(
            params.amount_per_receiver,
            receivers.len(),
            params.attached_amount,
        )?;

        for receiver in receivers {
            require!(receiver.is_writable, DistributorError::ReceiverNotWritable);
        }

        ctx.accounts.distributor.record_distribution(total, Clock::get()?.unix_timestamp)?;

        deposit_to_treasury(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            params.attached_amount,
        )?;

        let distributor_key = ctx.accounts.distributor.key();
        let treasury_bump = [ctx.accounts.distributor.treasury_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, distributor_key.as_ref(), &treasury_bump]];

        for receiver in receivers {
            pay_from_treasury(
                ctx.accounts.system_program.to_account_info(),
                ctx.accounts.treasury.to_account_info(),
                receiver.to_account_info(),
                signer_seeds,
                params.amount_per_receiver,
            )?;
        }

        msg!("Distributed {} lamports in total", total);

        emit!(crate::events::Distribute {
            caller: owner,
            amount_per_receiver: params.amount_per_receiver,
            receivers: receivers.iter().map(|receiver| receiver.key()).collect(),
        });

        Ok(())
    }
}

/// Checks an equal-split request against the funds available to cover it
/// and returns the total that will be paid out.
///
/// Checks run in a fixed order: receiver count, per-receiver amount, then
/// coverage. A total that does not fit in a `u64` can never be covered.
pub fn validate_equal_split(
    amount_per_receiver: u64,
    receiver_count: usize,
    available: u64,
) -> Result<u64> {
    require!(receiver_count > 0, DistributorError::NoReceivers);
    require!(amount_per_receiver > 0, DistributorError::InvalidAmountPerReceiver);

    let total = u64::try_from(receiver_count)
        .ok()
        .and_then(|count| amount_per_receiver.checked_mul(count))
        .ok_or(DistributorError::InsufficientAmount)?;

    require!(available >= total, DistributorError::InsufficientAmount);

    Ok(total)
}
