// PDA Seeds
pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";
pub const TREASURY_SEED: &[u8] = b"treasury";

// Data length of the treasury account (system-owned, no data)
pub const TREASURY_DATA_LEN: usize = 0;
