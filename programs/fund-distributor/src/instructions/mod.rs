pub mod treasury;

pub mod initialize;
pub use initialize::*;

pub mod deposit;
pub use deposit::*;

pub mod withdraw;
pub use withdraw::*;

pub mod distribute;
pub use distribute::*;

pub mod distribute_tokens;
pub use distribute_tokens::*;

pub mod query_distributor;
pub use query_distributor::*;
