use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::{RewardConfigUpdated, ProtocolPauseChanged};

/// Reward parameters to replace; `None` keeps the current value
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug)]
pub struct RewardConfigParams {
    pub trade_reward_rate: Option<u64>,
    pub stake_reward_rate: Option<u64>,
    pub trade_epoch_duration: Option<i64>,
    pub pool_volume_threshold: Option<u64>,
    pub pool_boost_multiplier: Option<u64>,
    pub low_activity_volume_threshold: Option<u64>,
    pub low_activity_bonus_bps: Option<u16>,
    pub min_account_age: Option<i64>,
    pub stake_vesting_duration: Option<i64>,
}

impl RewardConfigParams {
    /// Apply onto `protocol`, all or nothing. Counters and the epoch anchor
    /// are left alone; a new duration takes effect from `current_epoch_start`.
    pub fn apply_to(&self, protocol: &mut ProtocolState) -> Result<()> {
        let mut next = protocol.clone();

        if let Some(rate) = self.trade_reward_rate {
            next.trade_reward_rate = rate;
        }
        if let Some(rate) = self.stake_reward_rate {
            next.stake_reward_rate = rate;
        }
        if let Some(duration) = self.trade_epoch_duration {
            next.trade_epoch_duration = duration;
        }
        if let Some(threshold) = self.pool_volume_threshold {
            next.pool_volume_threshold = threshold;
        }
        if let Some(multiplier) = self.pool_boost_multiplier {
            next.pool_boost_multiplier = multiplier;
        }
        if let Some(threshold) = self.low_activity_volume_threshold {
            next.low_activity_volume_threshold = threshold;
        }
        if let Some(bonus) = self.low_activity_bonus_bps {
            next.low_activity_bonus_bps = bonus;
        }
        if let Some(age) = self.min_account_age {
            next.min_account_age = age;
        }
        if let Some(duration) = self.stake_vesting_duration {
            next.stake_vesting_duration = duration;
        }

        next.validate_config()?;
        *protocol = next;
        Ok(())
    }
}

/// Update reward parameters
/// Only callable by protocol admin
#[derive(Accounts)]
pub struct UpdateRewardConfig<'info> {
    #[account(
        address = protocol_state.admin @ LatError::Unauthorized
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_STATE_SEED],
        bump = protocol_state.bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,
}

pub fn update_reward_config_handler(
    ctx: Context<UpdateRewardConfig>,
    params: RewardConfigParams,
) -> Result<()> {
    let protocol = &mut ctx.accounts.protocol_state;

    params.apply_to(protocol)?;

    emit!(RewardConfigUpdated {
        trade_reward_rate: protocol.trade_reward_rate,
        stake_reward_rate: protocol.stake_reward_rate,
        trade_epoch_duration: protocol.trade_epoch_duration,
        pool_volume_threshold: protocol.pool_volume_threshold,
        pool_boost_multiplier: protocol.pool_boost_multiplier,
        low_activity_volume_threshold: protocol.low_activity_volume_threshold,
        low_activity_bonus_bps: protocol.low_activity_bonus_bps,
        min_account_age: protocol.min_account_age,
        stake_vesting_duration: protocol.stake_vesting_duration,
    });

    Ok(())
}

/// Pause/unpause new trades and stakes
/// Claims and withdrawals stay open while paused
#[derive(Accounts)]
pub struct SetProtocolPaused<'info> {
    #[account(
        address = protocol_state.admin @ LatError::Unauthorized
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_STATE_SEED],
        bump = protocol_state.bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,
}

pub fn set_protocol_paused_handler(ctx: Context<SetProtocolPaused>, paused: bool) -> Result<()> {
    let protocol = &mut ctx.accounts.protocol_state;
    let clock = Clock::get()?;

    protocol.paused = paused;
    msg!("Protocol paused: {}", paused);

    emit!(ProtocolPauseChanged {
        paused,
        changed_at: clock.unix_timestamp,
    });

    Ok(())
}
