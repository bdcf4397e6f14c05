use anchor_lang::prelude::*;
use crate::errors::DistributorError;

/// Distributor state: the owner and running totals of what left the treasury
#[account]
#[derive(InitSpace)]
pub struct Distributor {
    /// The only account allowed to withdraw or distribute
    pub owner: Pubkey,
    /// Total lamports withdrawn by the owner
    pub total_withdrawn: u64,
    /// Total lamports paid out through `distribute`
    pub total_distributed: u64,
    /// Number of successful lamport distributions
    pub distribution_count: u32,
    /// Number of successful token distributions
    pub token_distribution_count: u32,
    /// Timestamp of last privileged operation
    pub last_activity_timestamp: i64,
    /// Bump seed for the treasury PDA
    pub treasury_bump: u8,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Distributor {
    /// Creates distributor state owned by `owner`
    pub fn new(owner: Pubkey, bump: u8, treasury_bump: u8) -> Self {
        Self {
            owner,
            total_withdrawn: 0,
            total_distributed: 0,
            distribution_count: 0,
            token_distribution_count: 0,
            last_activity_timestamp: 0,
            treasury_bump,
            bump,
        }
    }

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    /// Lamports the treasury holds above its rent reserve
    pub fn treasury_balance(treasury_lamports: u64, rent_reserve: u64) -> u64 {
        treasury_lamports.saturating_sub(rent_reserve)
    }

    /// Lamports to move into the treasury on construction so that its
    /// balance grows by `initial_amount` and the reserve is covered
    pub fn construction_funding(
        treasury_lamports: u64,
        rent_reserve: u64,
        initial_amount: u64,
    ) -> Result<u64> {
        rent_reserve
            .saturating_sub(treasury_lamports)
            .checked_add(initial_amount)
            .ok_or_else(|| error!(DistributorError::MathOverflow))
    }

    pub fn record_withdrawal(&mut self, amount: u64, now: i64) -> Result<()> {
        self.total_withdrawn = self.total_withdrawn
            .checked_add(amount)
            .ok_or(DistributorError::MathOverflow)?;
        self.last_activity_timestamp = now;
        Ok(())
    }

    pub fn record_distribution(&mut self, total: u64, now: i64) -> Result<()> {
        self.total_distributed = self.total_distributed
            .checked_add(total)
            .ok_or(DistributorError::MathOverflow)?;
        self.distribution_count = self.distribution_count
            .checked_add(1)
            .ok_or(DistributorError::MathOverflow)?;
        self.last_activity_timestamp = now;
        Ok(())
    }

    pub fn record_token_distribution(&mut self, now: i64) -> Result<()> {
        self.token_distribution_count = self.token_distribution_count
            .checked_add(1)
            .ok_or(DistributorError::MathOverflow)?;
        self.last_activity_timestamp = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_code;

    const RESERVE: u64 = 890_880;

    #[test]
    fn new_distributor_records_owner() {
        let owner = Pubkey::new_unique();
        let distributor = Distributor::new(owner, 254, 253);

        assert!(distributor.is_owner(&owner));
        assert!(!distributor.is_owner(&Pubkey::new_unique()));
        assert_eq!(distributor.total_withdrawn, 0);
        assert_eq!(distributor.distribution_count, 0);
        assert_eq!(distributor.bump, 254);
        assert_eq!(distributor.treasury_bump, 253);
    }

    #[test]
    fn construction_funds_reserve_and_initial_amount() {
        let funding = Distributor::construction_funding(0, RESERVE, 1_000).unwrap();
        assert_eq!(funding, RESERVE + 1_000);
        assert_eq!(Distributor::treasury_balance(funding, RESERVE), 1_000);
    }

    #[test]
    fn construction_with_zero_amount_only_funds_reserve() {
        let funding = Distributor::construction_funding(0, RESERVE, 0).unwrap();
        assert_eq!(funding, RESERVE);
        assert_eq!(Distributor::treasury_balance(funding, RESERVE), 0);
    }

    #[test]
    fn construction_on_prefunded_treasury_skips_reserve() {
        let funding = Distributor::construction_funding(RESERVE + 50, RESERVE, 1_000).unwrap();
        assert_eq!(funding, 1_000);
        assert_eq!(Distributor::treasury_balance(RESERVE + 50 + funding, RESERVE), 1_050);
    }

    #[test]
    fn construction_funding_overflow() {
        let err = Distributor::construction_funding(0, RESERVE, u64::MAX).unwrap_err();
        assert_eq!(error_code(err), u32::from(DistributorError::MathOverflow));
    }

    #[test]
    fn treasury_balance_never_underflows() {
        assert_eq!(Distributor::treasury_balance(0, RESERVE), 0);
        assert_eq!(Distributor::treasury_balance(RESERVE - 1, RESERVE), 0);
    }

    #[test]
    fn withdrawals_accumulate() {
        let mut distributor = Distributor::new(Pubkey::new_unique(), 255, 255);
        distributor.record_withdrawal(1_000, 10).unwrap();
        distributor.record_withdrawal(0, 20).unwrap();

        assert_eq!(distributor.total_withdrawn, 1_000);
        assert_eq!(distributor.last_activity_timestamp, 20);
    }

    #[test]
    fn distributions_count_and_sum() {
        let mut distributor = Distributor::new(Pubkey::new_unique(), 255, 255);
        distributor.record_distribution(3_000, 1).unwrap();
        distributor.record_distribution(2_000, 2).unwrap();
        distributor.record_token_distribution(3).unwrap();

        assert_eq!(distributor.total_distributed, 5_000);
        assert_eq!(distributor.distribution_count, 2);
        assert_eq!(distributor.token_distribution_count, 1);
        assert_eq!(distributor.last_activity_timestamp, 3);
    }

    #[test]
    fn distribution_total_overflow_is_rejected() {
        let mut distributor = Distributor::new(Pubkey::new_unique(), 255, 255);
        distributor.total_distributed = u64::MAX;

        let err = distributor.record_distribution(1, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(DistributorError::MathOverflow));
        assert_eq!(distributor.distribution_count, 0);
    }
}
