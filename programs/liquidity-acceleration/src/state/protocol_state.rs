use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::rewards::{self, EpochRollover};

/// Protocol-level configuration and counters
/// Single PDA; every instruction that touches a counter takes it writable
#[account]
#[derive(Default)]
pub struct ProtocolState {
    /// Protocol admin - can update reward parameters and pause
    pub admin: Pubkey,

    /// LAT reward mint (authority is the mint-authority PDA)
    pub lat_mint: Pubkey,

    /// Token account holding all staked LAT
    pub staking_vault: Pubkey,

    // ============================================================
    // REWARD RATES
    // ============================================================

    /// Reward units per unit of trade volume
    pub trade_reward_rate: u64,

    /// Reward units per staked unit per REWARD_TIME_UNIT
    pub stake_reward_rate: u64,

    // ============================================================
    // TRADE EPOCH
    // ============================================================

    /// Seconds per trade epoch (> 0)
    pub trade_epoch_duration: i64,

    /// Lifetime trade count
    pub total_trades: u64,

    /// Volume recorded in the active epoch, reset on rollover
    pub epoch_trade_volume: u64,

    /// Index of the active epoch
    pub current_epoch: u64,

    /// Start of the active epoch; only moves forward in whole epochs
    pub current_epoch_start: i64,

    // ============================================================
    // POOL BOOST
    // ============================================================

    /// Lifetime trade volume, drives the stake boost
    pub pool_trading_volume: u64,

    /// Volume at which stake rewards are boosted
    pub pool_volume_threshold: u64,

    /// Percent multiplier on stake rewards once boosted (150 = x1.50)
    pub pool_boost_multiplier: u64,

    // ============================================================
    // ANTI-ABUSE
    // ============================================================

    /// Epoch volume below which trades earn a bonus (0 disables)
    pub low_activity_volume_threshold: u64,

    /// Bonus at zero epoch volume, in BPS
    pub low_activity_bonus_bps: u16,

    /// Trader accounts younger than this accrue nothing
    pub min_account_age: i64,

    /// Lock applied on every stake / top-up
    pub stake_vesting_duration: i64,

    // ============================================================
    // STATISTICS
    // ============================================================

    /// Sum of all StakePosition.staked_amount (mirrors the vault balance)
    pub total_staked: u64,

    /// Lifetime LAT minted for trade rewards
    pub total_trade_rewards_minted: u64,

    /// Lifetime LAT minted for stake rewards
    pub total_stake_rewards_minted: u64,

    // ============================================================
    // FLAGS / PDA
    // ============================================================

    pub initialized: bool,

    /// Emergency pause flag (blocks new trades and stakes only)
    pub paused: bool,

    pub bump: u8,
    pub mint_authority_bump: u8,
    pub vault_authority_bump: u8,
}

impl ProtocolState {
    pub const LEN: usize = 8  // discriminator
        + 32  // admin
        + 32  // lat_mint
        + 32  // staking_vault
        + 8   // trade_reward_rate
        + 8   // stake_reward_rate
        + 8   // trade_epoch_duration
        + 8   // total_trades
        + 8   // epoch_trade_volume
        + 8   // current_epoch
        + 8   // current_epoch_start
        + 8   // pool_trading_volume
        + 8   // pool_volume_threshold
        + 8   // pool_boost_multiplier
        + 8   // low_activity_volume_threshold
        + 2   // low_activity_bonus_bps
        + 8   // min_account_age
        + 8   // stake_vesting_duration
        + 8   // total_staked
        + 8   // total_trade_rewards_minted
        + 8   // total_stake_rewards_minted
        + 1   // initialized
        + 1   // paused
        + 1   // bump
        + 1   // mint_authority_bump
        + 1   // vault_authority_bump
        + 64; // padding for future expansion

    pub fn default_low_activity_volume_threshold() -> u64 { 0 }  // scaling off
    pub fn default_low_activity_bonus_bps() -> u16 { DEFAULT_LOW_ACTIVITY_BONUS_BPS }
    pub fn default_min_account_age() -> i64 { DEFAULT_MIN_ACCOUNT_AGE }
    pub fn default_stake_vesting_duration() -> i64 { DEFAULT_STAKE_VESTING_DURATION }

    /// Fresh configuration with zeroed counters, epoch 0 starting at `now`.
    ///
    /// Low-activity trade scaling starts disabled; it stays inactive until the
    /// admin sets `low_activity_volume_threshold` via `update_reward_config`.
    pub fn configure(
        &mut self,
        admin: Pubkey,
        trade_reward_rate: u64,
        stake_reward_rate: u64,
        trade_epoch_duration: i64,
        pool_volume_threshold: u64,
        pool_boost_multiplier: u64,
        now: i64,
    ) -> Result<()> {
        require!(!self.initialized, LatError::AlreadyInitialized);

        let mut next = ProtocolState {
            admin,
            lat_mint: self.lat_mint,
            staking_vault: self.staking_vault,
            trade_reward_rate,
            stake_reward_rate,
            trade_epoch_duration,
            current_epoch_start: now,
            pool_volume_threshold,
            pool_boost_multiplier,
            low_activity_volume_threshold: Self::default_low_activity_volume_threshold(),
            low_activity_bonus_bps: Self::default_low_activity_bonus_bps(),
            min_account_age: Self::default_min_account_age(),
            stake_vesting_duration: Self::default_stake_vesting_duration(),
            bump: self.bump,
            mint_authority_bump: self.mint_authority_bump,
            vault_authority_bump: self.vault_authority_bump,
            ..Default::default()
        };
        next.validate_config()?;
        next.initialized = true;

        *self = next;
        Ok(())
    }

    /// Reject configurations the reward engine cannot honor
    pub fn validate_config(&self) -> Result<()> {
        require!(
            self.trade_epoch_duration > 0
                && self.trade_epoch_duration <= MAX_TRADE_EPOCH_DURATION,
            LatError::InvalidConfig
        );
        require!(
            self.pool_boost_multiplier >= PERCENT_DENOMINATOR
                && self.pool_boost_multiplier <= MAX_POOL_BOOST_MULTIPLIER,
            LatError::InvalidConfig
        );
        require!(
            self.low_activity_bonus_bps <= MAX_LOW_ACTIVITY_BONUS_BPS,
            LatError::InvalidConfig
        );
        require!(self.min_account_age >= 0, LatError::InvalidConfig);
        require!(self.stake_vesting_duration >= 0, LatError::InvalidConfig);
        Ok(())
    }

    /// Where the trade epoch stands at `now`, without mutating anything
    pub fn epoch_at(&self, now: i64) -> Result<EpochRollover> {
        rewards::roll_epoch(
            self.current_epoch,
            self.current_epoch_start,
            self.trade_epoch_duration,
            now,
        )
    }

    /// Stake accrual over `elapsed` seconds including the pool boost
    pub fn boosted_stake_accrual(&self, staked_amount: u64, elapsed: u64) -> u128 {
        let base = rewards::stake_accrual(staked_amount, self.stake_reward_rate, elapsed);
        rewards::apply_pool_boost(
            base,
            self.pool_trading_volume,
            self.pool_volume_threshold,
            self.pool_boost_multiplier,
        )
    }

    pub fn is_pool_boosted(&self) -> bool {
        rewards::pool_boost_active(self.pool_trading_volume, self.pool_volume_threshold)
    }

    pub fn is_accepting_activity(&self) -> bool {
        self.initialized && !self.paused
    }

    /// `total_staked` after a deposit, checked
    pub fn staked_after_deposit(&self, amount: u64) -> Result<u64> {
        self.total_staked
            .checked_add(amount)
            .ok_or(error!(LatError::ArithmeticOverflow))
    }

    /// `total_staked` after a withdrawal, checked
    pub fn staked_after_withdrawal(&self, amount: u64) -> Result<u64> {
        self.total_staked
            .checked_sub(amount)
            .ok_or(error!(LatError::ArithmeticOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Pubkey {
        Pubkey::new_from_array([7; 32])
    }

    #[test]
    fn configure_zeroes_counters_and_sets_defaults() {
        let mut state = ProtocolState {
            total_trades: 9,
            bump: 254,
            ..Default::default()
        };
        state.configure(admin(), 5, 3, 60, 1_000, 150, 1_000).unwrap();

        assert!(state.initialized);
        assert_eq!(state.admin, admin());
        assert_eq!(state.total_trades, 0);
        assert_eq!(state.current_epoch, 0);
        assert_eq!(state.current_epoch_start, 1_000);
        assert_eq!(state.bump, 254);
        assert_eq!(state.min_account_age, DEFAULT_MIN_ACCOUNT_AGE);
        assert_eq!(state.stake_vesting_duration, SEVEN_DAYS);
        assert_eq!(state.low_activity_volume_threshold, 0);
    }

    #[test]
    fn configure_twice_fails() {
        let mut state = ProtocolState::default();
        state.configure(admin(), 5, 3, 60, 1_000, 150, 0).unwrap();
        let err = state.configure(admin(), 1, 1, 60, 1, 100, 0).unwrap_err();
        assert_eq!(err, error!(LatError::AlreadyInitialized));
        assert_eq!(state.trade_reward_rate, 5);
    }

    #[test]
    fn configure_rejects_bad_epoch_duration() {
        for duration in [0, -60, MAX_TRADE_EPOCH_DURATION + 1] {
            let mut state = ProtocolState::default();
            let err = state.configure(admin(), 5, 3, duration, 1_000, 150, 0).unwrap_err();
            assert_eq!(err, error!(LatError::InvalidConfig));
            assert!(!state.initialized);
        }
    }

    #[test]
    fn configure_rejects_bad_boost() {
        for multiplier in [0, 99, MAX_POOL_BOOST_MULTIPLIER + 1] {
            let mut state = ProtocolState::default();
            let err = state.configure(admin(), 5, 3, 60, 1_000, multiplier, 0).unwrap_err();
            assert_eq!(err, error!(LatError::InvalidConfig));
        }
    }

    #[test]
    fn boosted_accrual_follows_pool_volume() {
        let mut state = ProtocolState::default();
        state.configure(admin(), 5, 3, 60, 1_000, 150, 0).unwrap();
        assert_eq!(state.boosted_stake_accrual(100, 1), 300);
        state.pool_trading_volume = 1_000;
        assert!(state.is_pool_boosted());
        assert_eq!(state.boosted_stake_accrual(100, 1), 450);
    }

    #[test]
    fn pause_and_uninitialized_block_activity() {
        let mut state = ProtocolState::default();
        assert!(!state.is_accepting_activity());

        state.configure(admin(), 5, 3, 60, 1_000, 150, 0).unwrap();
        assert!(state.is_accepting_activity());

        state.paused = true;
        assert!(!state.is_accepting_activity());
    }

    #[test]
    fn staked_total_is_checked() {
        let state = ProtocolState {
            total_staked: 10,
            ..Default::default()
        };
        assert_eq!(state.staked_after_deposit(5).unwrap(), 15);
        assert_eq!(state.staked_after_withdrawal(10).unwrap(), 0);
        assert!(state.staked_after_withdrawal(11).is_err());

        let full = ProtocolState {
            total_staked: u64::MAX,
            ..Default::default()
        };
        assert_eq!(
            full.staked_after_deposit(1).unwrap_err(),
            error!(LatError::ArithmeticOverflow)
        );
    }
}
