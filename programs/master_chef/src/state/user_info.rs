use anchor_lang::prelude::*;

use crate::utils::{accumulated_reward, pending_reward};

#[account]
#[derive(Default, InitSpace)]
pub struct UserInfo {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    /// `amount * acc_gov_per_share / ACC_GOV_PRECISION` at the last settlement.
    pub reward_debt: u128,
    pub bump: u8,
}

impl UserInfo {
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn pending(&self, acc_gov_per_share: u128) -> Result<u64> {
        pending_reward(self.amount, acc_gov_per_share, self.reward_debt)
    }

    pub fn sync_reward_debt(&mut self, acc_gov_per_share: u128) -> Result<()> {
        self.reward_debt = accumulated_reward(self.amount, acc_gov_per_share)?;
        Ok(())
    }
}
