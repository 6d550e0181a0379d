//! Deterministic record addressing
//!
//! Every record key the program reads or writes is `derive(namespace, identity)`
//! under this program's ID. Clients and tests use the same helpers, so no
//! directory account is ever needed.

use anchor_lang::prelude::*;
use crate::constants::*;

/// PDA for `namespace` scoped to `identity`
pub fn derive(namespace: &[u8], identity: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[namespace, identity.as_ref()], &crate::ID)
}

pub fn protocol_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROTOCOL_STATE_SEED], &crate::ID)
}

pub fn trader_stats_address(trader: &Pubkey) -> (Pubkey, u8) {
    derive(TRADER_STATS_SEED, trader)
}

pub fn stake_position_address(provider: &Pubkey) -> (Pubkey, u8) {
    derive(STAKE_POSITION_SEED, provider)
}

pub fn mint_authority_address(protocol_state: &Pubkey) -> (Pubkey, u8) {
    derive(MINT_AUTHORITY_SEED, protocol_state)
}

pub fn vault_authority_address(protocol_state: &Pubkey) -> (Pubkey, u8) {
    derive(VAULT_AUTHORITY_SEED, protocol_state)
}

pub fn lat_mint_address(protocol_state: &Pubkey) -> (Pubkey, u8) {
    derive(LAT_MINT_SEED, protocol_state)
}

pub fn staking_vault_address(protocol_state: &Pubkey) -> (Pubkey, u8) {
    derive(STAKING_VAULT_SEED, protocol_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_identity_same_record() {
        let trader = Pubkey::new_from_array([4; 32]);
        assert_eq!(trader_stats_address(&trader), trader_stats_address(&trader));
    }

    #[test]
    fn namespaces_do_not_collide() {
        let who = Pubkey::new_from_array([4; 32]);
        assert_ne!(trader_stats_address(&who).0, stake_position_address(&who).0);

        let (state, _) = protocol_state_address();
        assert_ne!(mint_authority_address(&state).0, vault_authority_address(&state).0);
        assert_ne!(lat_mint_address(&state).0, staking_vault_address(&state).0);
    }

    #[test]
    fn identities_do_not_collide() {
        let a = Pubkey::new_from_array([4; 32]);
        let b = Pubkey::new_from_array([5; 32]);
        assert_ne!(stake_position_address(&a).0, stake_position_address(&b).0);
    }
}
