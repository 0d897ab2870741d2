use anchor_lang::prelude::*;

use crate::error::FarmError;
use crate::state::{MasterChef, UserInfo};
use crate::utils::{pool_emission, spread_over_shares};

#[account]
#[derive(Default, InitSpace)]
pub struct PoolInfo {
    pub chef: Pubkey,              // MasterChef this pool belongs to
    pub pid: u64,                  // Sequential pool id
    pub lp_mint: Pubkey,           // Staked token
    pub lp_vault: Pubkey,          // Holds every staked token of the pool
    pub alloc_point: u64,          // Weight in the chef's emission
    pub last_reward_time: i64,     // Accrual is settled up to here
    pub acc_gov_per_share: u128,   // Scaled by ACC_GOV_PRECISION
    pub acc_remainder: u128,       // Scaled GOV not yet spread over shares
    pub total_staked: u64,         // Sum of UserInfo::amount
    pub bump: u8,
}

impl PoolInfo {
    /// Accumulator and carried remainder as they would read after an
    /// update at `now`.
    fn accrue(&self, chef: &MasterChef, now: i64) -> Result<(u128, u128)> {
        if now <= self.last_reward_time || self.total_staked == 0 {
            return Ok((self.acc_gov_per_share, self.acc_remainder));
        }
        let elapsed = now
            .checked_sub(self.last_reward_time)
            .and_then(|v| u64::try_from(v).ok())
            .ok_or(FarmError::MathOverflow)?;
        let reward = pool_emission(
            elapsed,
            chef.gov_per_second,
            self.alloc_point,
            chef.total_alloc_point,
        )?;
        let (increment, remainder) =
            spread_over_shares(reward, self.acc_remainder, self.total_staked)?;
        let acc = self
            .acc_gov_per_share
            .checked_add(increment)
            .ok_or(FarmError::MathOverflow)?;
        Ok((acc, remainder))
    }

    pub fn acc_gov_per_share_at(&self, chef: &MasterChef, now: i64) -> Result<u128> {
        Ok(self.accrue(chef, now)?.0)
    }

    /// Settles accrual up to `now`. Returns false when nothing changed.
    ///
    /// An empty pool only moves `last_reward_time` forward, so the first
    /// depositor does not collect emission from before they arrived.
    /// Division dust is carried in `acc_remainder`, so the total accrued
    /// does not depend on how often this runs.
    pub fn update(&mut self, chef: &MasterChef, now: i64) -> Result<bool> {
        if now <= self.last_reward_time {
            return Ok(false);
        }
        let (acc, remainder) = self.accrue(chef, now)?;
        self.acc_gov_per_share = acc;
        self.acc_remainder = remainder;
        self.last_reward_time = now;
        Ok(true)
    }

    /// Pending GOV for `user` as of `now`, without mutating anything.
    pub fn pending_for(&self, user: &UserInfo, chef: &MasterChef, now: i64) -> Result<u64> {
        user.pending(self.acc_gov_per_share_at(chef, now)?)
    }

    /// Updates the pool, stakes `amount` for `user` and returns the reward
    /// to pay out. `amount == 0` only harvests.
    pub fn deposit(
        &mut self,
        chef: &MasterChef,
        user: &mut UserInfo,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        self.update(chef, now)?;
        let reward = user.pending(self.acc_gov_per_share)?;
        user.amount = user
            .amount
            .checked_add(amount)
            .ok_or(FarmError::MathOverflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(FarmError::MathOverflow)?;
        user.sync_reward_debt(self.acc_gov_per_share)?;
        Ok(reward)
    }

    /// Updates the pool, unstakes `amount` for `user` and returns the
    /// reward to pay out. Nothing is touched when `amount` exceeds the stake.
    pub fn withdraw(
        &mut self,
        chef: &MasterChef,
        user: &mut UserInfo,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        require!(amount <= user.amount, FarmError::InsufficientStake);
        self.update(chef, now)?;
        let reward = user.pending(self.acc_gov_per_share)?;
        user.amount -= amount;
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(FarmError::MathOverflow)?;
        user.sync_reward_debt(self.acc_gov_per_share)?;
        Ok(reward)
    }

    /// Updates the pool and settles `user` without touching the stake.
    /// Pending is zero afterwards.
    pub fn claim(&mut self, chef: &MasterChef, user: &mut UserInfo, now: i64) -> Result<u64> {
        self.update(chef, now)?;
        let reward = user.pending(self.acc_gov_per_share)?;
        user.sync_reward_debt(self.acc_gov_per_share)?;
        Ok(reward)
    }

    /// Drops the whole stake of `user`, forfeiting pending GOV.
    /// Returns the principal to send back. Never fails.
    pub fn emergency_withdraw(&mut self, user: &mut UserInfo) -> u64 {
        let amount = user.amount;
        user.amount = 0;
        user.reward_debt = 0;
        self.total_staked = self.total_staked.saturating_sub(amount);
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ACC_GOV_PRECISION;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(_) => u32::MAX,
        }
    }

    fn chef() -> MasterChef {
        MasterChef {
            gov_per_second: 100,
            total_alloc_point: 1_000,
            ..Default::default()
        }
    }

    fn pool(alloc_point: u64) -> PoolInfo {
        PoolInfo {
            alloc_point,
            ..Default::default()
        }
    }

    fn user() -> UserInfo {
        UserInfo {
            owner: Pubkey::new_unique(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_pool_only_moves_the_clock() {
        let chef = chef();
        let mut pool = pool(1_000);
        assert!(pool.update(&chef, 50).unwrap());
        assert_eq!(pool.acc_gov_per_share, 0);
        assert_eq!(pool.acc_remainder, 0);
        assert_eq!(pool.last_reward_time, 50);
    }

    #[test]
    fn update_is_noop_at_same_time() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 10, 0).unwrap();
        assert!(pool.update(&chef, 10).unwrap());
        let acc = pool.acc_gov_per_share;
        assert!(!pool.update(&chef, 10).unwrap());
        assert!(!pool.update(&chef, 5).unwrap());
        assert_eq!(pool.acc_gov_per_share, acc);
    }

    #[test]
    fn nothing_accrues_before_start() {
        let chef = chef();
        let mut pool = PoolInfo {
            last_reward_time: 1_000,
            ..pool(1_000)
        };
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 500, 900).unwrap();
        pool.update(&chef, 900).unwrap();
        assert_eq!(pool.acc_gov_per_share, 0);
        assert_eq!(pool.pending_for(&alice, &chef, 1_000).unwrap(), 0);
        assert_eq!(pool.pending_for(&alice, &chef, 1_010).unwrap(), 1_000);
    }

    #[test]
    fn accumulator_never_decreases() {
        let chef = chef();
        let mut pool = pool(250);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 7, 0).unwrap();
        let mut last = pool.acc_gov_per_share;
        for now in [1, 2, 3, 10, 11, 100, 101, 1_000] {
            pool.update(&chef, now).unwrap();
            assert!(pool.acc_gov_per_share >= last);
            last = pool.acc_gov_per_share;
        }
    }

    #[test]
    fn emission_follows_weight() {
        let chef = chef();
        let mut pool = pool(250);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 1_000, 0).unwrap();
        pool.update(&chef, 40).unwrap();
        // 40 s * 100 GOV/s * 250 / 1000
        assert_eq!(pool.acc_gov_per_share, ACC_GOV_PRECISION);
        assert_eq!(alice.pending(pool.acc_gov_per_share).unwrap(), 1_000);
    }

    #[test]
    fn update_frequency_does_not_change_accrual() {
        let chef = MasterChef {
            gov_per_second: 1_000,
            total_alloc_point: 300,
            ..Default::default()
        };
        let stake = 1_000_000_000_000_000 - 10_000;
        let mut frequent = pool(100);
        let mut alice = user();
        let mut bob = user();
        frequent.deposit(&chef, &mut alice, stake, 0).unwrap();
        frequent.deposit(&chef, &mut bob, stake, 0).unwrap();

        let mut lazy = frequent.clone();
        lazy.update(&chef, 100).unwrap();
        for now in 1..=100 {
            frequent.update(&chef, now).unwrap();
        }

        assert!(frequent.acc_gov_per_share > 0);
        assert_eq!(frequent.acc_gov_per_share, lazy.acc_gov_per_share);
        let lazy_pending = alice.pending(lazy.acc_gov_per_share).unwrap();
        assert_eq!(lazy_pending, 15_999);
        assert_eq!(alice.pending(frequent.acc_gov_per_share).unwrap(), lazy_pending);
    }

    #[test]
    fn pending_view_matches_update() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 3, 0).unwrap();
        let viewed = pool.pending_for(&alice, &chef, 77).unwrap();
        pool.update(&chef, 77).unwrap();
        assert_eq!(alice.pending(pool.acc_gov_per_share).unwrap(), viewed);
    }

    #[test]
    fn deposit_settles_previous_reward() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        assert_eq!(pool.deposit(&chef, &mut alice, 100, 0).unwrap(), 0);
        assert_eq!(pool.deposit(&chef, &mut alice, 50, 10).unwrap(), 1_000);
        assert_eq!(alice.amount, 150);
        assert_eq!(pool.total_staked, 150);
        assert_eq!(pool.last_reward_time, 10);
        assert_eq!(alice.pending(pool.acc_gov_per_share).unwrap(), 0);
    }

    #[test]
    fn zero_deposit_harvests() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 100, 0).unwrap();
        assert_eq!(pool.deposit(&chef, &mut alice, 0, 3).unwrap(), 300);
        assert_eq!(alice.amount, 100);
    }

    #[test]
    fn withdraw_over_balance_leaves_state_untouched() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 100, 0).unwrap();
        let (pool_before, debt_before) = (pool.clone(), alice.reward_debt);

        let err = pool.withdraw(&chef, &mut alice, 101, 5).unwrap_err();
        assert_eq!(error_code(err), u32::from(FarmError::InsufficientStake));
        assert_eq!(alice.amount, 100);
        assert_eq!(alice.reward_debt, debt_before);
        assert_eq!(pool.total_staked, pool_before.total_staked);
        assert_eq!(pool.last_reward_time, pool_before.last_reward_time);
        assert_eq!(pool.acc_gov_per_share, pool_before.acc_gov_per_share);
    }

    #[test]
    fn full_withdraw_clears_pending() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        pool.deposit(&chef, &mut alice, 100, 0).unwrap();
        assert_eq!(pool.withdraw(&chef, &mut alice, 100, 5).unwrap(), 500);
        assert_eq!(alice.amount, 0);
        assert_eq!(pool.total_staked, 0);
        pool.update(&chef, 50).unwrap();
        assert_eq!(alice.pending(pool.acc_gov_per_share).unwrap(), 0);
    }

    #[test]
    fn claim_zeroes_pending() {
        let chef = chef();
        let mut pool = pool(333);
        let mut alice = user();
        let mut bob = user();
        pool.deposit(&chef, &mut alice, 7, 0).unwrap();
        pool.deposit(&chef, &mut bob, 13, 0).unwrap();
        for now in [3, 19, 20, 1_234] {
            let expected = pool.pending_for(&alice, &chef, now).unwrap();
            assert_eq!(pool.claim(&chef, &mut alice, now).unwrap(), expected);
            assert_eq!(alice.pending(pool.acc_gov_per_share).unwrap(), 0);
            assert_eq!(alice.amount, 7);
        }
    }

    #[test]
    fn emergency_withdraw_forfeits_reward() {
        let chef = chef();
        let mut pool = pool(1_000);
        let mut alice = user();
        let mut bob = user();
        pool.deposit(&chef, &mut alice, 40, 0).unwrap();
        pool.deposit(&chef, &mut bob, 60, 0).unwrap();
        pool.update(&chef, 100).unwrap();
        assert!(alice.pending(pool.acc_gov_per_share).unwrap() > 0);

        assert_eq!(pool.emergency_withdraw(&mut alice), 40);
        assert_eq!(alice.amount, 0);
        assert_eq!(alice.reward_debt, 0);
        assert_eq!(pool.total_staked, 60);
        assert_eq!(alice.pending(pool.acc_gov_per_share).unwrap(), 0);
        assert_eq!(pool.emergency_withdraw(&mut alice), 0);
    }
}
