use anchor_lang::prelude::*;

// ============================================================
// PROTOCOL EVENTS
// ============================================================

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub lat_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub trade_reward_rate: u64,
    pub stake_reward_rate: u64,
    pub trade_epoch_duration: i64,
    pub pool_volume_threshold: u64,
    pub pool_boost_multiplier: u64,
    pub epoch_start: i64,
}

#[event]
pub struct RewardConfigUpdated {
    pub trade_reward_rate: u64,
    pub stake_reward_rate: u64,
    pub trade_epoch_duration: i64,
    pub pool_volume_threshold: u64,
    pub pool_boost_multiplier: u64,
    pub low_activity_volume_threshold: u64,
    pub low_activity_bonus_bps: u16,
    pub min_account_age: i64,
    pub stake_vesting_duration: i64,
}

#[event]
pub struct ProtocolPauseChanged {
    pub paused: bool,
    pub changed_at: i64,
}

// ============================================================
// TRADE EVENTS
// ============================================================

#[event]
pub struct EpochRolledOver {
    pub epoch: u64,
    pub epoch_start: i64,
    pub epochs_elapsed: u64,
}

#[event]
pub struct TradeRecorded {
    pub trader: Pubkey,
    pub volume: u64,
    pub reward: u64,
    pub multiplier_bps: u64,
    pub reward_eligible: bool,
    pub epoch: u64,
    pub epoch_trade_volume: u64,
    pub pending_trade_rewards: u64,
    pub total_trades: u64,
}

#[event]
pub struct TradeRewardsClaimed {
    pub trader: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub claimed_at: i64,
}

// ============================================================
// STAKE EVENTS
// ============================================================

#[event]
pub struct Staked {
    pub provider: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub accrued: u128,
    pub vesting_unlock_at: i64,
    pub total_staked: u64,
}

#[event]
pub struct StakeRewardsClaimed {
    pub provider: Pubkey,
    pub amount: u64,
    pub accrued: u128,
    /// Still owed after this claim (rewards above one mint's worth)
    pub remaining: u128,
    pub pool_boosted: bool,
    pub claimed_at: i64,
}

#[event]
pub struct StakeWithdrawn {
    pub provider: Pubkey,
    pub amount: u64,
    pub remaining_stake: u64,
    pub pending_stake_rewards: u64,
    pub total_staked: u64,
}
