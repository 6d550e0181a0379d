use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::state::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::TradeRewardsClaimed;
use crate::ledger;

/// Mint a trader's pending trade rewards
#[derive(Accounts)]
pub struct ClaimTradeRewards<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_STATE_SEED],
        bump = protocol_state.bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [TRADER_STATS_SEED, trader.key().as_ref()],
        bump = trader_stats.bump,
        constraint = trader_stats.owner == trader.key() @ LatError::Unauthorized
    )]
    pub trader_stats: Account<'info, TraderStats>,

    #[account(
        mut,
        address = protocol_state.lat_mint @ LatError::InvalidMint
    )]
    pub lat_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = trader_token_account.mint == lat_mint.key() @ LatError::InvalidMint,
        constraint = trader_token_account.owner == trader.key() @ LatError::Unauthorized
    )]
    pub trader_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA mint authority
    #[account(
        seeds = [MINT_AUTHORITY_SEED, protocol_state.key().as_ref()],
        bump = protocol_state.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimTradeRewards>) -> Result<()> {
    let clock = Clock::get()?;

    let amount = ctx.accounts.trader_stats.claimable()?;
    let total_claimed = ctx.accounts.trader_stats.claimed_after(amount)?;
    let total_minted = ctx.accounts.protocol_state.total_trade_rewards_minted
        .checked_add(amount)
        .ok_or(LatError::ArithmeticOverflow)?;

    // Pending is only cleared once the mint has gone through
    ledger::mint_reward(
        &ctx.accounts.token_program,
        &ctx.accounts.protocol_state,
        &ctx.accounts.lat_mint,
        &ctx.accounts.mint_authority,
        &ctx.accounts.trader_token_account,
        amount,
    )?;

    ctx.accounts.trader_stats.settle_claim(total_claimed, clock.unix_timestamp);
    ctx.accounts.protocol_state.total_trade_rewards_minted = total_minted;

    emit!(TradeRewardsClaimed {
        trader: ctx.accounts.trader.key(),
        amount,
        total_claimed,
        claimed_at: clock.unix_timestamp,
    });

    Ok(())
}
