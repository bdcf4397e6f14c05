use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    state::Mint as MintState,
};
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::constants::DISTRIBUTOR_SEED;
use crate::errors::DistributorError;
use crate::states::Distributor;
use super::distribute::validate_equal_split;

/// Equal-split token payout pulled from the owner's token account.
///
/// The owner must first approve the distributor PDA as delegate of `source`;
/// receivers are token accounts passed as remaining accounts. Mints that
/// charge a transfer fee or run a transfer hook are refused.
#[derive(Accounts)]
pub struct DistributeTokenFunds<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED, distributor.owner.as_ref()],
        bump = distributor.bump,
        constraint = distributor.is_owner(&owner.key()) @ DistributorError::Unauthorized
    )]
    pub distributor: Account<'info, Distributor>,

    /// Mint of the distributed token
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Owner's token account the payout is pulled from
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner
    )]
    pub source: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributeTokensParams {
    /// Token base units every receiver gets
    pub amount_per_receiver: u64,
}

impl<'info> DistributeTokenFunds<'info> {
    pub fn handle(
        ctx: Context<'_, '_, 'info, 'info, DistributeTokenFunds<'info>>,
        params: DistributeTokensParams,
    ) -> Result<()> {
        let receivers = ctx.remaining_accounts;
        let owner = ctx.accounts.owner.key();
        let mint_key = ctx.accounts.mint.key();
        let distributor_key = ctx.accounts.distributor.key();
        msg!("Distributing {} units of {} to {} receivers", params.amount_per_receiver, mint_key, receivers.len());

        let spendable = spendable_allowance(
            ctx.accounts.source.delegate,
            ctx.accounts.source.delegated_amount,
            ctx.accounts.source.amount,
            &distributor_key,
        );
        msg!("Spendable allowance: {} units", spendable);

        let total = validate_equal_split(params.amount_per_receiver, receivers.len(), spendable)?;

        check_mint_extensions(&ctx.accounts.mint.to_account_info().try_borrow_data()?)?;

        let token_program_key = ctx.accounts.token_program.key();
        let receiver_wallets = receivers
            .iter()
            .map(|receiver| validate_receiver(receiver, &token_program_key, &mint_key))
            .collect::<Result<Vec<Pubkey>>>()?;

        ctx.accounts.distributor.record_token_distribution(Clock::get()?.unix_timestamp)?;

        let distributor_bump = [ctx.accounts.distributor.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTOR_SEED, owner.as_ref(), &distributor_bump]];
        let decimals = ctx.accounts.mint.decimals;

        for receiver in receivers {
            transfer_checked(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    TransferChecked {
                        from: ctx.accounts.source.to_account_info(),
                        mint: ctx.accounts.mint.to_account_info(),
                        to: receiver.to_account_info(),
                        authority: ctx.accounts.distributor.to_account_info(),
                    },
                    signer_seeds,
                ),
                params.amount_per_receiver,
                decimals,
            )?;
        }

        msg!("Distributed {} units in total", total);

        emit!(crate::events::DistributeTokens {
            caller: owner,
            mint: mint_key,
            amount_per_receiver: params.amount_per_receiver,
            receivers: receiver_wallets,
        });

        Ok(())
    }
}

/// Amount `spender` may pull from a token account: the delegated amount
/// capped by the balance, or nothing when `spender` is not the delegate.
pub fn spendable_allowance(
    delegate: COption<Pubkey>,
    delegated_amount: u64,
    balance: u64,
    spender: &Pubkey,
) -> u64 {
    match delegate {
        COption::Some(delegate) if delegate == *spender => delegated_amount.min(balance),
        _ => 0,
    }
}

/// Rejects mints whose transfers would not land the full amount on the
/// receiver (transfer fee) or need extra accounts (transfer hook).
pub fn check_mint_extensions(mint_data: &[u8]) -> Result<()> {
    let mint = StateWithExtensions::<MintState>::unpack(mint_data)?;
    let unsupported = mint
        .get_extension_types()?
        .into_iter()
        .any(|extension| {
            matches!(extension, ExtensionType::TransferFeeConfig | ExtensionType::TransferHook)
        });

    require!(!unsupported, DistributorError::UnsupportedMintExtension);

    Ok(())
}

/// Checks a receiver token account and returns the wallet that owns it
fn validate_receiver(receiver: &AccountInfo, token_program: &Pubkey, mint: &Pubkey) -> Result<Pubkey> {
    require!(receiver.is_writable, DistributorError::ReceiverNotWritable);
    require!(receiver.owner == token_program, DistributorError::InvalidReceiverAccount);
    require!(!receiver.data_is_empty(), DistributorError::InvalidReceiverAccount);

    let mut data: &[u8] = &receiver.try_borrow_data()?;
    let token_account = TokenAccount::try_deserialize(&mut data)
        .map_err(|_| DistributorError::InvalidReceiverAccount)?;

    require!(token_account.mint == *mint, DistributorError::InvalidMint);

    Ok(token_account.owner)
}
