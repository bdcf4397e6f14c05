use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    /// Unauthorized: caller is not the owner
    #[msg("You aren't the owner")]
    Unauthorized,
    /// InvalidInput: empty receiver list
    #[msg("No receivers")]
    NoReceivers,
    /// InvalidInput: zero amount per receiver
    #[msg("Invalid amount per receiver")]
    InvalidAmountPerReceiver,
    /// InsufficientFunds: attached or approved amount below the required total
    #[msg("Insufficient amount")]
    InsufficientAmount,
    /// InvalidInput: receiver cannot be credited
    #[msg("Receiver account must be writable")]
    ReceiverNotWritable,
    /// InvalidInput: receiver is not a token account
    #[msg("Receiver is not a token account of the token program")]
    InvalidReceiverAccount,
    /// InvalidInput: receiver holds a different token
    #[msg("Receiver token account mint does not match")]
    InvalidMint,
    /// InvalidInput: mint would not deliver the exact amount to every receiver
    #[msg("Mint has a transfer fee or transfer hook extension")]
    UnsupportedMintExtension,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}

/// Custom error number carried by an Anchor error, for assertions
#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(_) => u32::MAX,
    }
}
