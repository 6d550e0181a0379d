use anchor_lang::prelude::*;
use crate::errors::LatError;
use crate::rewards::{self, EpochRollover};
use crate::state::ProtocolState;

/// Per-trader activity counters and unclaimed trade rewards
/// One TraderStats per trader, created on first trade
#[account]
#[derive(Default, Debug)]
pub struct TraderStats {
    /// The trader's wallet address
    pub owner: Pubkey,

    /// Qualifying trades recorded for this trader
    pub trade_count: u64,

    /// Lifetime volume recorded for this trader
    pub total_volume: u64,

    /// Epoch index of the last folded-in trade
    pub last_trade_epoch: u64,

    /// Unclaimed LAT; grows on trades, drops to exactly 0 on claim
    pub pending_trade_rewards: u64,

    /// Lifetime LAT claimed
    pub total_rewards_claimed: u64,

    /// Timestamp of first activity (age gate)
    pub account_created_at: i64,

    /// Timestamp of the last successful claim (0 if never)
    pub last_claim_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl TraderStats {
    pub const LEN: usize = 8  // discriminator
        + 32  // owner
        + 8   // trade_count
        + 8   // total_volume
        + 8   // last_trade_epoch
        + 8   // pending_trade_rewards
        + 8   // total_rewards_claimed
        + 8   // account_created_at
        + 8   // last_claim_at
        + 1   // bump
        + 16; // padding

    /// Record has not been touched yet (fresh init_if_needed account)
    pub fn is_new(&self) -> bool {
        self.owner == Pubkey::default()
    }

    /// Fold one trade into this record and the protocol counters.
    ///
    /// Everything is computed before anything is written, so a failure leaves
    /// both records untouched.
    pub fn record_trade(
        &mut self,
        protocol: &mut ProtocolState,
        trader: Pubkey,
        bump: u8,
        volume: u64,
        now: i64,
    ) -> Result<TradeReceipt> {
        require!(volume > 0, LatError::InvalidAmount);
        if !self.is_new() {
            require_keys_eq!(self.owner, trader, LatError::Unauthorized);
        }

        let created_at = if self.is_new() { now } else { self.account_created_at };

        // Epoch catch-up
        let rollover = protocol.epoch_at(now)?;
        let prior_epoch_volume = if rollover.rolled() { 0 } else { protocol.epoch_trade_volume };

        let total_trades = protocol.total_trades
            .checked_add(1)
            .ok_or(LatError::ArithmeticOverflow)?;
        let epoch_trade_volume = prior_epoch_volume
            .checked_add(volume)
            .ok_or(LatError::ArithmeticOverflow)?;
        let pool_trading_volume = protocol.pool_trading_volume
            .checked_add(volume)
            .ok_or(LatError::ArithmeticOverflow)?;

        // Age gate: young accounts still count, but accrue nothing
        let eligible = now.saturating_sub(created_at) >= protocol.min_account_age;
        let multiplier_bps = rewards::low_activity_multiplier_bps(
            prior_epoch_volume,
            protocol.low_activity_volume_threshold,
            protocol.low_activity_bonus_bps,
        );
        let reward = if eligible {
            rewards::trade_reward(volume, protocol.trade_reward_rate, multiplier_bps)?
        } else {
            0
        };

        let pending = self.pending_trade_rewards
            .checked_add(reward)
            .ok_or(LatError::ArithmeticOverflow)?;
        let trade_count = self.trade_count
            .checked_add(1)
            .ok_or(LatError::ArithmeticOverflow)?;
        let total_volume = self.total_volume
            .checked_add(volume)
            .ok_or(LatError::ArithmeticOverflow)?;

        // Commit
        protocol.current_epoch = rollover.epoch;
        protocol.current_epoch_start = rollover.epoch_start;
        protocol.epoch_trade_volume = epoch_trade_volume;
        protocol.total_trades = total_trades;
        protocol.pool_trading_volume = pool_trading_volume;

        if self.is_new() {
            self.owner = trader;
            self.account_created_at = created_at;
            self.bump = bump;
        }
        self.pending_trade_rewards = pending;
        self.trade_count = trade_count;
        self.total_volume = total_volume;
        self.last_trade_epoch = rollover.epoch;

        Ok(TradeReceipt {
            reward,
            multiplier_bps,
            eligible,
            rollover,
        })
    }

    /// Amount a claim would mint right now
    pub fn claimable(&self) -> Result<u64> {
        require!(self.pending_trade_rewards > 0, LatError::NothingToClaim);
        Ok(self.pending_trade_rewards)
    }

    /// Lifetime claimed total after paying out `amount`, checked
    pub fn claimed_after(&self, amount: u64) -> Result<u64> {
        self.total_rewards_claimed
            .checked_add(amount)
            .ok_or(error!(LatError::ArithmeticOverflow))
    }

    /// Zero pending after the mint for `amount` has gone through
    pub fn settle_claim(&mut self, total_rewards_claimed: u64, now: i64) {
        self.pending_trade_rewards = 0;
        self.total_rewards_claimed = total_rewards_claimed;
        self.last_claim_at = now;
    }
}

/// What a single `record_trade` did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeReceipt {
    pub reward: u64,
    pub multiplier_bps: u64,
    pub eligible: bool,
    pub rollover: EpochRollover,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const T0: i64 = 1_700_000_000;

    fn trader() -> Pubkey {
        Pubkey::new_from_array([1; 32])
    }

    fn protocol() -> ProtocolState {
        let mut state = ProtocolState::default();
        state
            .configure(Pubkey::new_from_array([9; 32]), 5, 3, 60, 1_000, 150, T0)
            .unwrap();
        state.min_account_age = 0;
        state
    }

    #[test]
    fn first_trade_initializes_record() {
        let mut protocol = protocol();
        let mut stats = TraderStats::default();
        let receipt = stats.record_trade(&mut protocol, trader(), 253, 250, T0 + 5).unwrap();

        assert_eq!(receipt.reward, 1_250);
        assert_eq!(stats.owner, trader());
        assert_eq!(stats.bump, 253);
        assert_eq!(stats.account_created_at, T0 + 5);
        assert_eq!(stats.pending_trade_rewards, 1_250);
        assert_eq!(stats.trade_count, 1);
        assert_eq!(protocol.epoch_trade_volume, 250);
        assert_eq!(protocol.pool_trading_volume, 250);
        assert_eq!(protocol.total_trades, 1);
    }

    #[test]
    fn young_account_counts_but_earns_nothing() {
        let mut protocol = protocol();
        protocol.min_account_age = ONE_DAY;
        let mut stats = TraderStats::default();

        let receipt = stats.record_trade(&mut protocol, trader(), 0, 100, T0).unwrap();
        assert!(!receipt.eligible);
        assert_eq!(stats.pending_trade_rewards, 0);
        assert_eq!(stats.trade_count, 1);
        assert_eq!(protocol.pool_trading_volume, 100);

        let receipt = stats.record_trade(&mut protocol, trader(), 0, 100, T0 + ONE_DAY).unwrap();
        assert!(receipt.eligible);
        assert_eq!(stats.pending_trade_rewards, 500);
    }

    #[test]
    fn rollover_resets_epoch_volume() {
        let mut protocol = protocol();
        let mut stats = TraderStats::default();
        stats.record_trade(&mut protocol, trader(), 0, 40, T0 + 1).unwrap();
        stats.record_trade(&mut protocol, trader(), 0, 10, T0 + 185).unwrap();

        assert_eq!(protocol.current_epoch_start, T0 + 180);
        assert_eq!(protocol.current_epoch, 3);
        assert_eq!(protocol.epoch_trade_volume, 10);
        assert_eq!(protocol.pool_trading_volume, 50);
        assert_eq!(stats.last_trade_epoch, 3);
    }

    #[test]
    fn low_activity_bonus_uses_pre_trade_volume() {
        let mut protocol = protocol();
        protocol.low_activity_volume_threshold = 1_000;
        protocol.low_activity_bonus_bps = 5_000;
        let mut stats = TraderStats::default();

        let first = stats.record_trade(&mut protocol, trader(), 0, 500, T0).unwrap();
        assert_eq!(first.multiplier_bps, 15_000);
        assert_eq!(first.reward, 3_750);

        let second = stats.record_trade(&mut protocol, trader(), 0, 500, T0 + 1).unwrap();
        assert_eq!(second.multiplier_bps, 12_500);
        assert_eq!(second.reward, 3_125);

        let third = stats.record_trade(&mut protocol, trader(), 0, 500, T0 + 2).unwrap();
        assert_eq!(third.multiplier_bps, BPS_DENOMINATOR);
        assert_eq!(third.reward, 2_500);
    }

    #[test]
    fn zero_volume_is_rejected_without_side_effects() {
        let mut protocol = protocol();
        let mut stats = TraderStats::default();
        let err = stats.record_trade(&mut protocol, trader(), 0, 0, T0).unwrap_err();
        assert_eq!(err, error!(LatError::InvalidAmount));
        assert!(stats.is_new());
        assert_eq!(protocol.total_trades, 0);
    }

    #[test]
    fn overflow_leaves_records_untouched() {
        let mut protocol = protocol();
        protocol.trade_reward_rate = u64::MAX;
        let mut stats = TraderStats::default();
        stats.record_trade(&mut protocol, trader(), 0, 1, T0).unwrap();
        let before = stats.pending_trade_rewards;

        let err = stats.record_trade(&mut protocol, trader(), 0, 2, T0 + 1).unwrap_err();
        assert_eq!(err, error!(LatError::ArithmeticOverflow));
        assert_eq!(stats.pending_trade_rewards, before);
        assert_eq!(stats.trade_count, 1);
        assert_eq!(protocol.total_trades, 1);
        assert_eq!(protocol.epoch_trade_volume, 1);
    }

    #[test]
    fn foreign_signer_cannot_write_record() {
        let mut protocol = protocol();
        let mut stats = TraderStats::default();
        stats.record_trade(&mut protocol, trader(), 0, 1, T0).unwrap();
        let err = stats
            .record_trade(&mut protocol, Pubkey::new_from_array([2; 32]), 0, 1, T0)
            .unwrap_err();
        assert_eq!(err, error!(LatError::Unauthorized));
    }

    #[test]
    fn claim_requires_pending() {
        let stats = TraderStats::default();
        assert_eq!(stats.claimable().unwrap_err(), error!(LatError::NothingToClaim));
    }
}
