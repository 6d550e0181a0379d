//! Reward engine
//!
//! Pure, clock-free arithmetic shared by trader and stake accounting. Every
//! handler reads `Clock` once and passes `now` down, so everything here can be
//! exercised off-chain.
//!
//! ## Rounding
//!
//! Products are taken in `u128` and divided last. Division truncates toward
//! zero. A trade reward that does not fit back into `u64` is an
//! [`LatError::ArithmeticOverflow`], never a clamp.
//!
//! Stake accrual stays in `u128` and saturates at `u128::MAX`. It is settled
//! on every stake, claim and withdrawal, so it must never fail; the stake
//! record splits it into a `u64` payable part and a carry.
//!
//! ## Low-activity trade bonus
//!
//! ```text
//! multiplier_bps(v) = 10_000 + bonus_bps * (T - v) / T    if T > 0 and v < T
//!                   = 10_000                              otherwise
//! ```
//!
//! `v` is the epoch volume before the trade and `T` the low-activity
//! threshold. The curve is non-increasing in `v` and bounded by
//! `10_000 + MAX_LOW_ACTIVITY_BONUS_BPS`.

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::LatError;

/// Outcome of lazily advancing the trade epoch to `now`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochRollover {
    /// Epoch index after catch-up
    pub epoch: u64,
    /// Start of the active epoch, aligned to the original start
    pub epoch_start: i64,
    /// Whole epochs skipped (0 means still inside the stored epoch)
    pub epochs_elapsed: u64,
}

impl EpochRollover {
    pub fn rolled(&self) -> bool {
        self.epochs_elapsed > 0
    }
}

/// Advance `(epoch, epoch_start)` by as many whole `duration`s as fit before `now`.
///
/// A timestamp earlier than `epoch_start` never moves the epoch backwards.
pub fn roll_epoch(epoch: u64, epoch_start: i64, duration: i64, now: i64) -> Result<EpochRollover> {
    require!(duration > 0, LatError::InvalidConfig);

    let elapsed = now.saturating_sub(epoch_start);
    if elapsed < duration {
        return Ok(EpochRollover { epoch, epoch_start, epochs_elapsed: 0 });
    }

    let epochs = elapsed / duration;
    let advance = epochs
        .checked_mul(duration)
        .ok_or(LatError::ArithmeticOverflow)?;

    Ok(EpochRollover {
        epoch: epoch
            .checked_add(epochs as u64)
            .ok_or(LatError::ArithmeticOverflow)?,
        epoch_start: epoch_start
            .checked_add(advance)
            .ok_or(LatError::ArithmeticOverflow)?,
        epochs_elapsed: epochs as u64,
    })
}

/// Trade multiplier in basis points for the given pre-trade epoch volume
pub fn low_activity_multiplier_bps(
    prior_epoch_volume: u64,
    low_activity_threshold: u64,
    bonus_bps: u16,
) -> u64 {
    if low_activity_threshold == 0 || prior_epoch_volume >= low_activity_threshold {
        return BPS_DENOMINATOR;
    }
    let bonus = bonus_bps.min(MAX_LOW_ACTIVITY_BONUS_BPS) as u128;
    let shortfall = (low_activity_threshold - prior_epoch_volume) as u128;
    // shortfall <= threshold, so the quotient is at most `bonus`
    let scaled = bonus * shortfall / low_activity_threshold as u128;
    BPS_DENOMINATOR + scaled as u64
}

/// `volume * rate * multiplier_bps / 10_000`
pub fn trade_reward(volume: u64, rate: u64, multiplier_bps: u64) -> Result<u64> {
    let reward = (volume as u128)
        .checked_mul(rate as u128)
        .and_then(|r| r.checked_mul(multiplier_bps as u128))
        .map(|r| r / BPS_DENOMINATOR as u128)
        .ok_or(LatError::ArithmeticOverflow)?;
    narrow(reward)
}

/// Seconds between two timestamps, zero when `now` is not after `since`
pub fn elapsed_seconds(since: i64, now: i64) -> u64 {
    if now > since {
        now.abs_diff(since)
    } else {
        0
    }
}

/// Un-boosted stake accrual: `staked * rate * elapsed / REWARD_TIME_UNIT`
pub fn stake_accrual(staked_amount: u64, rate: u64, elapsed: u64) -> u128 {
    (staked_amount as u128)
        .saturating_mul(rate as u128)
        .saturating_mul(elapsed as u128)
        / REWARD_TIME_UNIT as u128
}

/// Whether pool activity has crossed the boost threshold
pub fn pool_boost_active(pool_trading_volume: u64, pool_volume_threshold: u64) -> bool {
    pool_trading_volume >= pool_volume_threshold
}

/// Scale `accrual` by the percent multiplier when the pool boost is active
pub fn apply_pool_boost(
    accrual: u128,
    pool_trading_volume: u64,
    pool_volume_threshold: u64,
    pool_boost_multiplier: u64,
) -> u128 {
    if !pool_boost_active(pool_trading_volume, pool_volume_threshold) {
        return accrual;
    }
    accrual.saturating_mul(pool_boost_multiplier as u128) / PERCENT_DENOMINATOR as u128
}

/// Split a reward balance into the `u64` payable part and the remainder
pub fn split_payable(total: u128) -> (u64, u128) {
    let payable = total.min(u64::MAX as u128);
    (payable as u64, total - payable)
}

fn narrow(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(LatError::ArithmeticOverflow))
}
