// ============================================================
// TIME CONSTANTS (in seconds)
// ============================================================

/// 1 day in seconds
pub const ONE_DAY: i64 = 24 * 60 * 60;

/// 7 days in seconds
pub const SEVEN_DAYS: i64 = 7 * ONE_DAY;

/// 365 days in seconds
pub const THREE_SIXTY_FIVE_DAYS: i64 = 365 * ONE_DAY;

/// Longest trade epoch the protocol accepts
pub const MAX_TRADE_EPOCH_DURATION: i64 = THREE_SIXTY_FIVE_DAYS;

/// Stake rewards are quoted per staked unit per this many seconds
pub const REWARD_TIME_UNIT: u64 = 1;

/// Default lock applied to every stake / top-up (7 days)
pub const DEFAULT_STAKE_VESTING_DURATION: i64 = SEVEN_DAYS;

/// Default minimum trader account age before trades earn rewards (1 day)
pub const DEFAULT_MIN_ACCOUNT_AGE: i64 = ONE_DAY;

// ============================================================
// MULTIPLIERS
// ============================================================

/// Denominator for percent multipliers (150 = x1.50)
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Largest pool boost accepted (x10)
pub const MAX_POOL_BOOST_MULTIPLIER: u64 = 1_000;

/// 100% in basis points
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Cap on the low-activity trade bonus (+100%, i.e. at most x2)
pub const MAX_LOW_ACTIVITY_BONUS_BPS: u16 = 10_000;

/// Default low-activity bonus (+50% at zero epoch volume)
pub const DEFAULT_LOW_ACTIVITY_BONUS_BPS: u16 = 5_000;

// ============================================================
// TOKEN
// ============================================================

/// Decimals of the LAT reward mint
pub const REWARD_DECIMALS: u8 = 6;

// ============================================================
// PDA SEEDS
// ============================================================

pub const PROTOCOL_STATE_SEED: &[u8] = b"protocol_state";
pub const TRADER_STATS_SEED: &[u8] = b"stats";
pub const STAKE_POSITION_SEED: &[u8] = b"stake";
pub const MINT_AUTHORITY_SEED: &[u8] = b"lat_mint_auth";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_auth";
pub const LAT_MINT_SEED: &[u8] = b"lat_mint";
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";
