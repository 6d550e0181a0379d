pub mod initialize;
pub mod record_trade;
pub mod claim_trade_rewards;
pub mod stake_lat;
pub mod claim_stake_rewards;
pub mod withdraw_stake;
pub mod admin;

// Glob re-exports for Anchor compatibility
// Note: "ambiguous glob re-exports" warning for `handler` is benign -
// lib.rs uses fully qualified paths (e.g., instructions::record_trade::handler)
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
pub use record_trade::*;
pub use claim_trade_rewards::*;
pub use stake_lat::*;
pub use claim_stake_rewards::*;
pub use withdraw_stake::*;
pub use admin::*;
