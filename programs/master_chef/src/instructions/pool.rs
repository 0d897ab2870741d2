use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CHEF_SEED, LP_VAULT_SEED, POOL_SEED};
use crate::error::FarmError;
use crate::events::{PoolAdded, PoolSet, PoolUpdated};
use crate::state::{MasterChef, PoolInfo};
use crate::utils::mass_update;

/// --------------------------------------------
/// ADD POOL
/// --------------------------------------------
pub fn add_pool<'info>(
    ctx: Context<'_, '_, 'info, 'info, AddPool<'info>>,
    alloc_point: u64,
    with_update: bool,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let chef_key = ctx.accounts.chef.key();

    if with_update {
        mass_update(&ctx.accounts.chef, chef_key, ctx.remaining_accounts, now)?;
    }

    let pool = ctx.accounts.chef.add_pool(
        chef_key,
        ctx.accounts.lp_mint.key(),
        ctx.accounts.lp_vault.key(),
        alloc_point,
        now,
        ctx.bumps.pool,
    )?;

    emit!(PoolAdded {
        pid: pool.pid,
        lp_mint: pool.lp_mint,
        alloc_point,
    });
    ctx.accounts.pool.set_inner(pool);
    Ok(())
}

/// --------------------------------------------
/// SET POOL WEIGHT
/// --------------------------------------------
pub fn set_pool<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetPool<'info>>,
    alloc_point: u64,
    with_update: bool,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let chef_key = ctx.accounts.chef.key();

    if with_update {
        mass_update(&ctx.accounts.chef, chef_key, ctx.remaining_accounts, now)?;
    }

    let pool = &mut ctx.accounts.pool;
    ctx.accounts.chef.set_pool_weight(pool, alloc_point, now)?;

    emit!(PoolSet {
        pid: pool.pid,
        alloc_point,
    });
    Ok(())
}

/// --------------------------------------------
/// UPDATE POOL
/// --------------------------------------------
pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    if pool.update(&ctx.accounts.chef, now)? {
        emit!(PoolUpdated {
            pid: pool.pid,
            last_reward_time: pool.last_reward_time,
            total_staked: pool.total_staked,
            acc_gov_per_share: pool.acc_gov_per_share,
        });
    }
    Ok(())
}

pub fn mass_update_pools<'info>(
    ctx: Context<'_, '_, 'info, 'info, MassUpdatePools<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let chef_key = ctx.accounts.chef.key();
    mass_update(&ctx.accounts.chef, chef_key, ctx.remaining_accounts, now)
}

// -----------------------------------
// ACCOUNTS STRUCTS
// -----------------------------------

#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(
        mut,
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        init,
        payer = authority,
        seeds = [POOL_SEED, chef.key().as_ref(), &chef.pool_count.to_le_bytes()],
        bump,
        space = 8 + PoolInfo::INIT_SPACE
    )]
    pub pool: Box<Account<'info, PoolInfo>>,

    pub lp_mint: Box<Account<'info, Mint>>,

    /// Seeded by the mint, so one mint backs at most one pool.
    #[account(
        init,
        payer = authority,
        seeds = [LP_VAULT_SEED, chef.key().as_ref(), lp_mint.key().as_ref()],
        bump,
        token::mint = lp_mint,
        token::authority = chef
    )]
    pub lp_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct SetPool<'info> {
    #[account(
        mut,
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool.pid.to_le_bytes()],
        bump = pool.bump,
        has_one = chef @ FarmError::InvalidPool
    )]
    pub pool: Box<Account<'info, PoolInfo>>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(seeds = [CHEF_SEED, chef.gov_mint.as_ref()], bump = chef.bump)]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool.pid.to_le_bytes()],
        bump = pool.bump,
        has_one = chef @ FarmError::InvalidPool
    )]
    pub pool: Box<Account<'info, PoolInfo>>,
}

#[derive(Accounts)]
pub struct MassUpdatePools<'info> {
    #[account(seeds = [CHEF_SEED, chef.gov_mint.as_ref()], bump = chef.bump)]
    pub chef: Box<Account<'info, MasterChef>>,
}
