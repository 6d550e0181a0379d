use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::Staked;
use crate::ledger;

#[derive(Accounts)]
pub struct StakeLat<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_STATE_SEED],
        bump = protocol_state.bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    /// Stake position - initialized on first stake
    #[account(
        init_if_needed,
        payer = provider,
        space = StakePosition::LEN,
        seeds = [STAKE_POSITION_SEED, provider.key().as_ref()],
        bump
    )]
    pub stake_position: Account<'info, StakePosition>,

    #[account(
        mut,
        constraint = provider_token_account.mint == protocol_state.lat_mint @ LatError::InvalidMint,
        constraint = provider_token_account.owner == provider.key() @ LatError::Unauthorized
    )]
    pub provider_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [STAKING_VAULT_SEED, protocol_state.key().as_ref()],
        bump,
        address = protocol_state.staking_vault
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StakeLat>, amount: u64) -> Result<()> {
    let provider = ctx.accounts.provider.key();
    let protocol = &ctx.accounts.protocol_state;
    let position = &mut ctx.accounts.stake_position;
    let clock = Clock::get()?;

    require!(protocol.is_accepting_activity(), LatError::ProtocolPaused);

    position.open(provider, ctx.bumps.stake_position, clock.unix_timestamp);
    let transition = position.plan_stake(protocol, amount, clock.unix_timestamp)?;
    let total_staked = protocol.staked_after_deposit(amount)?;

    // Balance is checked by the token program
    ledger::deposit_to_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.provider_token_account,
        &ctx.accounts.staking_vault,
        &ctx.accounts.provider,
        amount,
    )?;

    position.commit(&transition);
    ctx.accounts.protocol_state.total_staked = total_staked;

    emit!(Staked {
        provider,
        amount,
        staked_amount: transition.staked_amount,
        accrued: transition.accrued,
        vesting_unlock_at: transition.vesting_unlock_at,
        total_staked,
    });

    Ok(())
}
