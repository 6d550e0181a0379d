use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod rewards;
pub mod state;

use instructions::*;

declare_id!("DRjNVFEBb6NmJJmfFJgbQo64gYWCcsw2ibzvm7F9HXRQ");

#[program]
pub mod liquidity_acceleration {
    use super::*;

    // ============ Protocol Initialization ============

    /// Initialize the protocol state, LAT mint and staking vault (one-time setup)
    pub fn initialize(
        ctx: Context<Initialize>,
        trade_reward_rate: u64,
        stake_reward_rate: u64,
        trade_epoch_duration: i64,
        pool_volume_threshold: u64,
        pool_boost_multiplier: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            trade_reward_rate,
            stake_reward_rate,
            trade_epoch_duration,
            pool_volume_threshold,
            pool_boost_multiplier,
        )
    }

    // ============ Trade Rewards ============

    /// Record a trade and accrue its reward into the trader's pending balance
    pub fn record_trade(ctx: Context<RecordTrade>, volume: u64) -> Result<()> {
        instructions::record_trade::handler(ctx, volume)
    }

    /// Mint all pending trade rewards to the trader
    pub fn claim_trade_rewards(ctx: Context<ClaimTradeRewards>) -> Result<()> {
        instructions::claim_trade_rewards::handler(ctx)
    }

    // ============ Staking ============

    /// Stake LAT into the protocol vault
    pub fn stake_lat(ctx: Context<StakeLat>, amount: u64) -> Result<()> {
        instructions::stake_lat::handler(ctx, amount)
    }

    /// Mint stake rewards accrued up to now (pool boost included)
    pub fn claim_stake_rewards(ctx: Context<ClaimStakeRewards>) -> Result<()> {
        instructions::claim_stake_rewards::handler(ctx)
    }

    /// Withdraw vested stake from the vault
    pub fn withdraw_stake(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
        instructions::withdraw_stake::handler(ctx, amount)
    }

    // ============ Admin Functions ============

    /// Update reward parameters
    pub fn update_reward_config(
        ctx: Context<UpdateRewardConfig>,
        params: RewardConfigParams,
    ) -> Result<()> {
        instructions::admin::update_reward_config_handler(ctx, params)
    }

    /// Pause/unpause new trades and stakes (emergency)
    pub fn set_protocol_paused(ctx: Context<SetProtocolPaused>, paused: bool) -> Result<()> {
        instructions::admin::set_protocol_paused_handler(ctx, paused)
    }
}
