use anchor_lang::prelude::*;

declare_id!("AmjogYgKzfXh5FzWrq7pUJLUr6iG4pbBJdc11LVMwK73");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod master_chef {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, gov_per_second: u64, start_time: i64) -> Result<()> {
        instructions::admin::initialize(ctx, gov_per_second, start_time)
    }

    pub fn add_pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, AddPool<'info>>,
        alloc_point: u64,
        with_update: bool,
    ) -> Result<()> {
        instructions::pool::add_pool(ctx, alloc_point, with_update)
    }

    pub fn set_pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetPool<'info>>,
        alloc_point: u64,
        with_update: bool,
    ) -> Result<()> {
        instructions::pool::set_pool(ctx, alloc_point, with_update)
    }

    pub fn set_gov_per_second<'info>(
        ctx: Context<'_, '_, 'info, 'info, AdminOnly<'info>>,
        gov_per_second: u64,
        with_update: bool,
    ) -> Result<()> {
        instructions::admin::set_gov_per_second(ctx, gov_per_second, with_update)
    }

    pub fn set_authority(ctx: Context<AdminOnly>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::set_authority(ctx, new_authority)
    }

    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::admin::fund_rewards(ctx, amount)
    }

    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::pool::update_pool(ctx)
    }

    pub fn mass_update_pools<'info>(
        ctx: Context<'_, '_, 'info, 'info, MassUpdatePools<'info>>,
    ) -> Result<()> {
        instructions::pool::mass_update_pools(ctx)
    }

    pub fn deposit(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::farm::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::farm::withdraw(ctx, amount)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::farm::claim_reward(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawTokens>) -> Result<()> {
        instructions::farm::emergency_withdraw(ctx)
    }

    pub fn pending_gov(ctx: Context<PendingGov>) -> Result<u64> {
        instructions::farm::pending_gov(ctx)
    }
}
