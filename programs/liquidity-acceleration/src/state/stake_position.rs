use anchor_lang::prelude::*;
use crate::errors::LatError;
use crate::rewards;
use crate::state::ProtocolState;

/// A liquidity provider's LAT stake
/// One StakePosition per provider, created on first stake
#[account]
#[derive(Default, Debug)]
pub struct StakePosition {
    /// The provider's wallet address
    pub owner: Pubkey,

    /// LAT currently held in the vault for this provider
    pub staked_amount: u64,

    /// Timestamp of the first stake
    pub stake_started_at: i64,

    /// Accrual checkpoint
    pub last_stake_update_at: i64,

    /// Accrued but unclaimed LAT, payable by the next claim
    pub pending_stake_rewards: u64,

    /// Accrued LAT beyond what fits in `pending_stake_rewards`
    pub reward_carry: u128,

    /// Withdrawals are refused before this timestamp; never moves backwards
    pub vesting_unlock_at: i64,

    /// Lifetime LAT claimed
    pub total_rewards_claimed: u64,

    /// PDA bump seed
    pub bump: u8,
}

/// New values for a StakePosition, computed up front and committed after the
/// ledger CPI succeeds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeTransition {
    pub staked_amount: u64,
    pub pending_stake_rewards: u64,
    pub reward_carry: u128,
    pub vesting_unlock_at: i64,
    pub last_stake_update_at: i64,
    pub total_rewards_claimed: u64,
    /// Reward folded into pending by this transition
    pub accrued: u128,
    /// LAT the ledger must mint to the provider (claims only)
    pub payout: u64,
}

impl StakePosition {
    pub const LEN: usize = 8  // discriminator
        + 32  // owner
        + 8   // staked_amount
        + 8   // stake_started_at
        + 8   // last_stake_update_at
        + 8   // pending_stake_rewards
        + 16  // reward_carry
        + 8   // vesting_unlock_at
        + 8   // total_rewards_claimed
        + 1   // bump
        + 16; // padding

    pub fn is_new(&self) -> bool {
        self.owner == Pubkey::default()
    }

    pub fn is_vesting(&self, now: i64) -> bool {
        now < self.vesting_unlock_at
    }

    /// Reward earned since the last checkpoint, boost included
    pub fn accrued_since_update(&self, protocol: &ProtocolState, now: i64) -> u128 {
        let elapsed = rewards::elapsed_seconds(self.last_stake_update_at, now);
        protocol.boosted_stake_accrual(self.staked_amount, elapsed)
    }

    /// Everything owed to the provider, pending and carry together
    pub fn unclaimed(&self) -> u128 {
        (self.pending_stake_rewards as u128).saturating_add(self.reward_carry)
    }

    /// Accrual since the checkpoint and the unclaimed total with it folded in.
    /// Never fails, so settlement cannot hold principal hostage.
    fn settled(&self, protocol: &ProtocolState, now: i64) -> (u128, u128) {
        let accrued = self.accrued_since_update(protocol, now);
        (accrued, self.unclaimed().saturating_add(accrued))
    }

    fn checkpoint(&self, now: i64) -> i64 {
        self.last_stake_update_at.max(now)
    }

    /// Deposit `amount` more LAT; extends (never shortens) the vesting lock
    pub fn plan_stake(
        &self,
        protocol: &ProtocolState,
        amount: u64,
        now: i64,
    ) -> Result<StakeTransition> {
        require!(amount > 0, LatError::InvalidAmount);

        let (accrued, unclaimed) = self.settled(protocol, now);
        let (pending, carry) = rewards::split_payable(unclaimed);
        let staked_amount = self.staked_amount
            .checked_add(amount)
            .ok_or(LatError::ArithmeticOverflow)?;
        let lock_until = now
            .checked_add(protocol.stake_vesting_duration)
            .ok_or(LatError::ArithmeticOverflow)?;

        Ok(StakeTransition {
            staked_amount,
            pending_stake_rewards: pending,
            reward_carry: carry,
            vesting_unlock_at: self.vesting_unlock_at.max(lock_until),
            last_stake_update_at: self.checkpoint(now),
            total_rewards_claimed: self.total_rewards_claimed,
            accrued,
            payout: 0,
        })
    }

    /// Fold accrual in and pay out as much as one mint can carry. Anything
    /// above `u64::MAX` stays behind for the next claim.
    pub fn plan_claim(&self, protocol: &ProtocolState, now: i64) -> Result<StakeTransition> {
        let (accrued, unclaimed) = self.settled(protocol, now);
        require!(unclaimed > 0, LatError::NothingToClaim);

        let (payout, rest) = rewards::split_payable(unclaimed);
        let (pending, carry) = rewards::split_payable(rest);

        Ok(StakeTransition {
            staked_amount: self.staked_amount,
            pending_stake_rewards: pending,
            reward_carry: carry,
            vesting_unlock_at: self.vesting_unlock_at,
            last_stake_update_at: self.checkpoint(now),
            total_rewards_claimed: self.total_rewards_claimed.saturating_add(payout),
            accrued,
            payout,
        })
    }

    /// Take `amount` back out of the vault once vested; pending is kept, not paid
    pub fn plan_withdraw(
        &self,
        protocol: &ProtocolState,
        amount: u64,
        now: i64,
    ) -> Result<StakeTransition> {
        require!(!self.is_vesting(now), LatError::StillVesting);
        require!(
            amount > 0 && amount <= self.staked_amount,
            LatError::InsufficientStake
        );

        let (accrued, unclaimed) = self.settled(protocol, now);
        let (pending, carry) = rewards::split_payable(unclaimed);

        Ok(StakeTransition {
            staked_amount: self.staked_amount - amount,
            pending_stake_rewards: pending,
            reward_carry: carry,
            vesting_unlock_at: self.vesting_unlock_at,
            last_stake_update_at: self.checkpoint(now),
            total_rewards_claimed: self.total_rewards_claimed,
            accrued,
            payout: 0,
        })
    }

    /// Claim the record for `provider` on first use
    pub fn open(&mut self, provider: Pubkey, bump: u8, now: i64) {
        if self.is_new() {
            self.owner = provider;
            self.stake_started_at = now;
            self.last_stake_update_at = now;
            self.bump = bump;
        }
    }

    pub fn commit(&mut self, transition: &StakeTransition) {
        self.staked_amount = transition.staked_amount;
        self.pending_stake_rewards = transition.pending_stake_rewards;
        self.reward_carry = transition.reward_carry;
        self.vesting_unlock_at = transition.vesting_unlock_at;
        self.last_stake_update_at = transition.last_stake_update_at;
        self.total_rewards_claimed = transition.total_rewards_claimed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const T0: i64 = 1_700_000_000;

    fn protocol() -> ProtocolState {
        let mut state = ProtocolState::default();
        state
            .configure(Pubkey::new_from_array([9; 32]), 5, 3, 60, 1_000, 150, T0)
            .unwrap();
        state
    }

    fn staked(amount: u64, at: i64) -> StakePosition {
        let protocol = protocol();
        let mut position = StakePosition::default();
        position.open(Pubkey::new_from_array([3; 32]), 255, at);
        let t = position.plan_stake(&protocol, amount, at).unwrap();
        position.commit(&t);
        position
    }

    #[test]
    fn first_stake_sets_lock() {
        let position = staked(100, T0);
        assert_eq!(position.staked_amount, 100);
        assert_eq!(position.stake_started_at, T0);
        assert_eq!(position.vesting_unlock_at, T0 + SEVEN_DAYS);
        assert_eq!(position.pending_stake_rewards, 0);
    }

    #[test]
    fn top_up_settles_accrual_and_extends_lock() {
        let protocol = protocol();
        let mut position = staked(100, T0);
        let t = position.plan_stake(&protocol, 50, T0 + 10).unwrap();
        assert_eq!(t.accrued, 3_000);
        position.commit(&t);

        assert_eq!(position.staked_amount, 150);
        assert_eq!(position.pending_stake_rewards, 3_000);
        assert_eq!(position.vesting_unlock_at, T0 + 10 + SEVEN_DAYS);
        assert_eq!(position.last_stake_update_at, T0 + 10);
    }

    #[test]
    fn shorter_vesting_never_shortens_existing_lock() {
        let mut protocol = protocol();
        let mut position = staked(100, T0);
        protocol.stake_vesting_duration = ONE_DAY;
        let t = position.plan_stake(&protocol, 1, T0 + 60).unwrap();
        position.commit(&t);
        assert_eq!(position.vesting_unlock_at, T0 + SEVEN_DAYS);
    }

    #[test]
    fn claim_pays_boosted_accrual() {
        let mut protocol = protocol();
        let position = staked(100, T0);

        let t = position.plan_claim(&protocol, T0 + 1).unwrap();
        assert_eq!(t.payout, 300);

        protocol.pool_trading_volume = 1_000;
        let t = position.plan_claim(&protocol, T0 + 1).unwrap();
        assert_eq!(t.payout, 450);
        assert_eq!(t.pending_stake_rewards, 0);
        assert_eq!(t.last_stake_update_at, T0 + 1);
        assert_eq!(t.total_rewards_claimed, 450);
    }

    #[test]
    fn claim_with_nothing_accrued_fails() {
        let protocol = protocol();
        let position = staked(100, T0);
        let err = position.plan_claim(&protocol, T0).unwrap_err();
        assert_eq!(err, error!(LatError::NothingToClaim));

        let empty = StakePosition::default();
        assert!(empty.plan_claim(&protocol, T0 + 100).is_err());
    }

    #[test]
    fn withdraw_before_unlock_is_refused_for_any_amount() {
        let protocol = protocol();
        let position = staked(100, T0);
        for amount in [0, 1, 100, 101] {
            let err = position
                .plan_withdraw(&protocol, amount, T0 + SEVEN_DAYS - 1)
                .unwrap_err();
            assert_eq!(err, error!(LatError::StillVesting));
        }
    }

    #[test]
    fn withdraw_checks_amount_after_unlock() {
        let protocol = protocol();
        let position = staked(100, T0);
        let unlocked = T0 + SEVEN_DAYS;
        for amount in [0, 101] {
            let err = position.plan_withdraw(&protocol, amount, unlocked).unwrap_err();
            assert_eq!(err, error!(LatError::InsufficientStake));
        }
    }

    #[test]
    fn partial_withdraw_keeps_lock_and_pending() {
        let protocol = protocol();
        let mut position = staked(100, T0);
        let unlocked = T0 + SEVEN_DAYS;
        let t = position.plan_withdraw(&protocol, 40, unlocked).unwrap();
        position.commit(&t);

        assert_eq!(position.staked_amount, 60);
        assert_eq!(position.vesting_unlock_at, unlocked);
        assert_eq!(position.pending_stake_rewards, 100 * 3 * SEVEN_DAYS as u64);
        assert_eq!(t.payout, 0);
    }

    // 10M LAT at 6 decimals
    const LARGE_STAKE: u64 = 10_000_000_000_000;

    #[test]
    fn large_stake_withdraws_long_after_unlock() {
        let protocol = protocol();
        let mut position = staked(LARGE_STAKE, T0);
        let later = T0 + 30 * ONE_DAY;

        let t = position.plan_withdraw(&protocol, LARGE_STAKE, later).unwrap();
        position.commit(&t);

        let owed = LARGE_STAKE as u128 * 3 * (30 * ONE_DAY) as u128;
        assert_eq!(t.accrued, owed);
        assert_eq!(position.staked_amount, 0);
        assert_eq!(position.pending_stake_rewards, u64::MAX);
        assert_eq!(position.unclaimed(), owed);
    }

    #[test]
    fn large_stake_can_still_top_up() {
        let protocol = protocol();
        let mut position = staked(LARGE_STAKE, T0);
        let t = position.plan_stake(&protocol, 1, T0 + 30 * ONE_DAY).unwrap();
        position.commit(&t);
        assert_eq!(position.staked_amount, LARGE_STAKE + 1);
        assert!(position.reward_carry > 0);
    }

    #[test]
    fn oversized_rewards_are_claimed_in_pieces() {
        let protocol = protocol();
        let mut position = staked(LARGE_STAKE, T0);
        let later = T0 + 30 * ONE_DAY;
        let owed = position.accrued_since_update(&protocol, later);

        let mut paid: u128 = 0;
        let mut claims = 0;
        while position.unclaimed() > 0 {
            let t = position.plan_claim(&protocol, later).unwrap();
            assert!(t.payout > 0);
            paid += t.payout as u128;
            position.commit(&t);
            claims += 1;
        }

        assert_eq!(paid, owed);
        assert_eq!(claims, 5);
        assert_eq!(position.total_rewards_claimed, u64::MAX);

        let err = position.plan_claim(&protocol, later).unwrap_err();
        assert_eq!(err, error!(LatError::NothingToClaim));
    }
}
