//! SPL Token CPI helpers
//!
//! The only code that moves LAT. Mint and vault authority are PDAs of the
//! protocol state; their signer seeds are assembled here and nowhere else, so
//! issuance and vault releases can only come from the claim and withdraw
//! handlers that call these helpers.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::state::ProtocolState;

/// Provider-signed transfer into the staking vault
pub(crate) fn deposit_to_vault<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    staking_vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: staking_vault.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )
}

/// Mint `amount` LAT to `to`, signed by the mint-authority PDA
pub(crate) fn mint_reward<'info>(
    token_program: &Program<'info, Token>,
    protocol_state: &Account<'info, ProtocolState>,
    lat_mint: &Account<'info, Mint>,
    mint_authority: &UncheckedAccount<'info>,
    to: &Account<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    let state_key = protocol_state.key();
    let seeds = &[
        MINT_AUTHORITY_SEED,
        state_key.as_ref(),
        &[protocol_state.mint_authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: lat_mint.to_account_info(),
                to: to.to_account_info(),
                authority: mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Transfer `amount` out of the staking vault, signed by the vault-authority PDA
pub(crate) fn release_from_vault<'info>(
    token_program: &Program<'info, Token>,
    protocol_state: &Account<'info, ProtocolState>,
    staking_vault: &Account<'info, TokenAccount>,
    vault_authority: &UncheckedAccount<'info>,
    to: &Account<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    let state_key = protocol_state.key();
    let seeds = &[
        VAULT_AUTHORITY_SEED,
        state_key.as_ref(),
        &[protocol_state.vault_authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: staking_vault.to_account_info(),
                to: to.to_account_info(),
                authority: vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
