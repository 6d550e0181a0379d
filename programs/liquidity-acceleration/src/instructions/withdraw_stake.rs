use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::*;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::StakeWithdrawn;
use crate::ledger;

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
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
        seeds = [STAKING_VAULT_SEED, protocol_state.key().as_ref()],
        bump,
        address = protocol_state.staking_vault
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_account.mint == protocol_state.lat_mint @ LatError::InvalidMint,
        constraint = provider_token_account.owner == provider.key() @ LatError::Unauthorized
    )]
    pub provider_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA authority for the staking vault
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, protocol_state.key().as_ref()],
        bump = protocol_state.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let protocol = &ctx.accounts.protocol_state;

    // Vesting first, then amount - a locked stake is refused for any amount
    let transition = ctx.accounts
        .stake_position
        .plan_withdraw(protocol, amount, clock.unix_timestamp)?;

    // Vault must cover the release
    require!(
        ctx.accounts.staking_vault.amount >= amount,
        LatError::InsufficientVaultBalance
    );
    let total_staked = protocol.staked_after_withdrawal(amount)?;

    ledger::release_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.protocol_state,
        &ctx.accounts.staking_vault,
        &ctx.accounts.vault_authority,
        &ctx.accounts.provider_token_account,
        amount,
    )?;

    ctx.accounts.stake_position.commit(&transition);
    ctx.accounts.protocol_state.total_staked = total_staked;

    emit!(StakeWithdrawn {
        provider: ctx.accounts.provider.key(),
        amount,
        remaining_stake: transition.staked_amount,
        pending_stake_rewards: transition.pending_stake_rewards,
        total_staked,
    });

    Ok(())
}
