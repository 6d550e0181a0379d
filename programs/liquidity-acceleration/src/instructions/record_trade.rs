use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::{EpochRolledOver, TradeRecorded};

#[derive(Accounts)]
pub struct RecordTrade<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_STATE_SEED],
        bump = protocol_state.bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    /// Trader stats - initialized on first trade
    #[account(
        init_if_needed,
        payer = trader,
        space = TraderStats::LEN,
        seeds = [TRADER_STATS_SEED, trader.key().as_ref()],
        bump
    )]
    pub trader_stats: Account<'info, TraderStats>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RecordTrade>, volume: u64) -> Result<()> {
    let trader = ctx.accounts.trader.key();
    let protocol = &mut ctx.accounts.protocol_state;
    let stats = &mut ctx.accounts.trader_stats;
    let clock = Clock::get()?;

    require!(protocol.is_accepting_activity(), LatError::ProtocolPaused);

    let receipt = stats.record_trade(
        protocol,
        trader,
        ctx.bumps.trader_stats,
        volume,
        clock.unix_timestamp,
    )?;

    if receipt.rollover.rolled() {
        msg!(
            "Trade epoch rolled over {} epoch(s) to {}",
            receipt.rollover.epochs_elapsed,
            receipt.rollover.epoch
        );
        emit!(EpochRolledOver {
            epoch: receipt.rollover.epoch,
            epoch_start: receipt.rollover.epoch_start,
            epochs_elapsed: receipt.rollover.epochs_elapsed,
        });
    }

    if !receipt.eligible {
        msg!("Trader account below minimum age - trade recorded without reward");
    }

    emit!(TradeRecorded {
        trader,
        volume,
        reward: receipt.reward,
        multiplier_bps: receipt.multiplier_bps,
        reward_eligible: receipt.eligible,
        epoch: protocol.current_epoch,
        epoch_trade_volume: protocol.epoch_trade_volume,
        pending_trade_rewards: stats.pending_trade_rewards,
        total_trades: protocol.total_trades,
    });

    Ok(())
}
