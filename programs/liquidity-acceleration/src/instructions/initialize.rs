use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::state::ProtocolState;
use crate::constants::*;
use crate::errors::LatError;
use crate::events::ProtocolInitialized;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// init_if_needed so a repeat call reaches the handler and fails with
    /// AlreadyInitialized instead of a system-program error
    #[account(
        init_if_needed,
        payer = admin,
        space = ProtocolState::LEN,
        seeds = [PROTOCOL_STATE_SEED],
        bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    /// CHECK: PDA signer for LAT issuance, holds no data
    #[account(
        seeds = [MINT_AUTHORITY_SEED, protocol_state.key().as_ref()],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: PDA signer for the staking vault, holds no data
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, protocol_state.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [LAT_MINT_SEED, protocol_state.key().as_ref()],
        bump,
        mint::decimals = REWARD_DECIMALS,
        mint::authority = mint_authority,
    )]
    pub lat_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [STAKING_VAULT_SEED, protocol_state.key().as_ref()],
        bump,
        token::mint = lat_mint,
        token::authority = vault_authority,
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<Initialize>,
    trade_reward_rate: u64,
    stake_reward_rate: u64,
    trade_epoch_duration: i64,
    pool_volume_threshold: u64,
    pool_boost_multiplier: u64,
) -> Result<()> {
    let protocol = &mut ctx.accounts.protocol_state;
    let clock = Clock::get()?;

    require!(!protocol.initialized, LatError::AlreadyInitialized);

    protocol.lat_mint = ctx.accounts.lat_mint.key();
    protocol.staking_vault = ctx.accounts.staking_vault.key();
    protocol.bump = ctx.bumps.protocol_state;
    protocol.mint_authority_bump = ctx.bumps.mint_authority;
    protocol.vault_authority_bump = ctx.bumps.vault_authority;

    protocol.configure(
        ctx.accounts.admin.key(),
        trade_reward_rate,
        stake_reward_rate,
        trade_epoch_duration,
        pool_volume_threshold,
        pool_boost_multiplier,
        clock.unix_timestamp,
    )?;

    msg!("LAT protocol initialized, epoch 0 starts at {}", protocol.current_epoch_start);

    emit!(ProtocolInitialized {
        admin: protocol.admin,
        lat_mint: protocol.lat_mint,
        staking_vault: protocol.staking_vault,
        trade_reward_rate: protocol.trade_reward_rate,
        stake_reward_rate: protocol.stake_reward_rate,
        trade_epoch_duration: protocol.trade_epoch_duration,
        pool_volume_threshold: protocol.pool_volume_threshold,
        pool_boost_multiplier: protocol.pool_boost_multiplier,
        epoch_start: protocol.current_epoch_start,
    });

    Ok(())
}
