use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::state::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::StakeRewardsClaimed;
use crate::ledger;

/// Accrue a provider's stake rewards up to now and mint all pending
#[derive(Accounts)]
pub struct ClaimStakeRewards<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_STATE_SEED],
        bump = protocol_state.bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [STAKE_POSITION_SEED, provider.key().as_ref()],
        bump = stake_position.bump,
        constraint = stake_position.owner == provider.key() @ LatError::Unauthorized
    )]
    pub stake_position: Account<'info, StakePosition>,

    #[account(
        mut,
        address = protocol_state.lat_mint @ LatError::InvalidMint
    )]
    pub lat_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = provider_token_account.mint == lat_mint.key() @ LatError::InvalidMint,
        constraint = provider_token_account.owner == provider.key() @ LatError::Unauthorized
    )]
    pub provider_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA mint authority
    #[account(
        seeds = [MINT_AUTHORITY_SEED, protocol_state.key().as_ref()],
        bump = protocol_state.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimStakeRewards>) -> Result<()> {
    let clock = Clock::get()?;
    let protocol = &ctx.accounts.protocol_state;

    let transition = ctx.accounts.stake_position.plan_claim(protocol, clock.unix_timestamp)?;
    let total_minted = protocol.total_stake_rewards_minted
        .checked_add(transition.payout)
        .ok_or(LatError::ArithmeticOverflow)?;
    let pool_boosted = protocol.is_pool_boosted();

    ledger::mint_reward(
        &ctx.accounts.token_program,
        &ctx.accounts.protocol_state,
        &ctx.accounts.lat_mint,
        &ctx.accounts.mint_authority,
        &ctx.accounts.provider_token_account,
        transition.payout,
    )?;

    ctx.accounts.stake_position.commit(&transition);
    ctx.accounts.protocol_state.total_stake_rewards_minted = total_minted;

    emit!(StakeRewardsClaimed {
        provider: ctx.accounts.provider.key(),
        amount: transition.payout,
        accrued: transition.accrued,
        remaining: ctx.accounts.stake_position.unclaimed(),
        pool_boosted,
        claimed_at: clock.unix_timestamp,
    });

    Ok(())
}
