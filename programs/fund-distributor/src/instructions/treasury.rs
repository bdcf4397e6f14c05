use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Moves lamports from a signing wallet into the treasury
pub fn deposit_to_treasury<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    treasury: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program,
            Transfer {
                from,
                to: treasury,
            },
        ),
        amount,
    )
}

/// Pays lamports out of the treasury PDA
pub fn pay_from_treasury<'info>(
    system_program: AccountInfo<'info>,
    treasury: AccountInfo<'info>,
    to: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program,
            Transfer {
                from: treasury,
                to,
            },
            signer_seeds,
        ),
        amount,
    )
}
