use anchor_lang::prelude::*;

use crate::error::FarmError;
use crate::state::PoolInfo;

/// Global farm configuration, one per GOV mint.
#[account]
#[derive(Default, InitSpace)]
pub struct MasterChef {
    pub authority: Pubkey,       // Admin allowed to add/set pools and the emission rate
    pub gov_mint: Pubkey,        // Reward token
    pub reward_vault: Pubkey,    // GOV held for payouts, owned by this PDA
    pub gov_per_second: u64,     // Emission across all pools
    pub total_alloc_point: u64,  // Sum of every pool's alloc_point
    pub start_time: i64,         // No GOV accrues before this timestamp
    pub pool_count: u64,         // Next pid
    pub bump: u8,
    pub reward_vault_bump: u8,
}

impl MasterChef {
    /// A start in the past means emission begins now.
    pub fn schedule_start(&mut self, start_time: i64, now: i64) {
        self.start_time = start_time.max(now);
    }

    /// Registers a new pool under the next pid and returns its initial state.
    pub fn add_pool(
        &mut self,
        chef_key: Pubkey,
        lp_mint: Pubkey,
        lp_vault: Pubkey,
        alloc_point: u64,
        now: i64,
        bump: u8,
    ) -> Result<PoolInfo> {
        let pool = PoolInfo {
            chef: chef_key,
            pid: self.pool_count,
            lp_mint,
            lp_vault,
            alloc_point,
            last_reward_time: now.max(self.start_time),
            acc_gov_per_share: 0,
            acc_remainder: 0,
            total_staked: 0,
            bump,
        };

        self.total_alloc_point = self
            .total_alloc_point
            .checked_add(alloc_point)
            .ok_or(FarmError::MathOverflow)?;
        self.pool_count = self
            .pool_count
            .checked_add(1)
            .ok_or(FarmError::MathOverflow)?;
        Ok(pool)
    }

    /// Re-weights `pool`. Accrual up to `now` is settled at the old weight.
    pub fn set_pool_weight(&mut self, pool: &mut PoolInfo, alloc_point: u64, now: i64) -> Result<()> {
        pool.update(self, now)?;
        self.total_alloc_point = self
            .total_alloc_point
            .checked_sub(pool.alloc_point)
            .and_then(|v| v.checked_add(alloc_point))
            .ok_or(FarmError::MathOverflow)?;
        pool.alloc_point = alloc_point;
        Ok(())
    }
}
