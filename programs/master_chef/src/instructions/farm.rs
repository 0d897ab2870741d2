use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CHEF_SEED, POOL_SEED, USER_SEED};
use crate::error::FarmError;
use crate::events::{Deposit, EmergencyWithdraw, RewardClaimed, Withdraw};
use crate::state::{MasterChef, PoolInfo, UserInfo};
use crate::utils::{pay_reward, transfer_from_owner, transfer_from_vault};

/// --------------------------------------------
/// DEPOSIT (amount 0 only harvests)
/// --------------------------------------------
pub fn deposit(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let user_info = &mut ctx.accounts.user_info;

    // First deposit creates the position
    if !user_info.is_initialized() {
        user_info.pool = pool.key();
        user_info.owner = ctx.accounts.owner.key();
        user_info.bump = ctx.bumps.user_info;
    }

    let reward = pool.deposit(&ctx.accounts.chef, user_info, amount, now)?;

    pay_reward(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_vault,
        &ctx.accounts.user_gov,
        &ctx.accounts.chef,
        reward,
    )?;
    transfer_from_owner(
        &ctx.accounts.token_program,
        &ctx.accounts.user_lp,
        &ctx.accounts.lp_vault,
        &ctx.accounts.owner,
        amount,
    )?;

    msg!("Deposit: pid {} amount {} reward {}", pool.pid, amount, reward);
    emit!(Deposit {
        user: ctx.accounts.owner.key(),
        pid: pool.pid,
        amount,
    });
    Ok(())
}

/// --------------------------------------------
/// WITHDRAW
/// --------------------------------------------
pub fn withdraw(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let reward = pool.withdraw(&ctx.accounts.chef, &mut ctx.accounts.user_info, amount, now)?;

    pay_reward(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_vault,
        &ctx.accounts.user_gov,
        &ctx.accounts.chef,
        reward,
    )?;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.lp_vault,
        &ctx.accounts.user_lp,
        &ctx.accounts.chef,
        amount,
    )?;

    msg!("Withdraw: pid {} amount {} reward {}", pool.pid, amount, reward);
    emit!(Withdraw {
        user: ctx.accounts.owner.key(),
        pid: pool.pid,
        amount,
    });
    Ok(())
}

/// --------------------------------------------
/// CLAIM REWARD
/// --------------------------------------------
pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    let reward = pool.claim(&ctx.accounts.chef, &mut ctx.accounts.user_info, now)?;

    pay_reward(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_vault,
        &ctx.accounts.user_gov,
        &ctx.accounts.chef,
        reward,
    )?;

    emit!(RewardClaimed {
        user: ctx.accounts.owner.key(),
        pid: pool.pid,
        amount: reward,
    });
    Ok(())
}

/// --------------------------------------------
/// EMERGENCY WITHDRAW
/// --------------------------------------------

// Principal only. Pending GOV is forfeited and the reward math is not touched.
pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawTokens>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let amount = pool.emergency_withdraw(&mut ctx.accounts.user_info);

    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.lp_vault,
        &ctx.accounts.user_lp,
        &ctx.accounts.chef,
        amount,
    )?;

    msg!("EmergencyWithdraw: pid {} amount {}", pool.pid, amount);
    emit!(EmergencyWithdraw {
        user: ctx.accounts.owner.key(),
        pid: pool.pid,
        amount,
    });
    Ok(())
}

/// --------------------------------------------
/// PENDING GOV (view)
/// --------------------------------------------
pub fn pending_gov(ctx: Context<PendingGov>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    match &ctx.accounts.user_info {
        Some(user_info) => ctx
            .accounts
            .pool
            .pending_for(user_info, &ctx.accounts.chef, now),
        None => Ok(0),
    }
}

// -----------------------------------
// ACCOUNTS STRUCTS
// -----------------------------------

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = reward_vault
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool.pid.to_le_bytes()],
        bump = pool.bump,
        has_one = chef @ FarmError::InvalidPool,
        has_one = lp_vault
    )]
    pub pool: Box<Account<'info, PoolInfo>>,

    /// Created on the first deposit
    #[account(
        init_if_needed,
        payer = owner,
        seeds = [USER_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump,
        space = 8 + UserInfo::INIT_SPACE
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    #[account(mut)]
    pub lp_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// Source of the staked tokens
    #[account(mut, token::mint = pool.lp_mint)]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    /// Receives settled GOV
    #[account(mut, token::mint = chef.gov_mint)]
    pub user_gov: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    #[account(
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = reward_vault
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool.pid.to_le_bytes()],
        bump = pool.bump,
        has_one = chef @ FarmError::InvalidPool,
        has_one = lp_vault
    )]
    pub pool: Box<Account<'info, PoolInfo>>,

    #[account(
        mut,
        seeds = [USER_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = user_info.bump,
        has_one = pool,
        has_one = owner @ FarmError::Unauthorized
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    #[account(mut)]
    pub lp_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = pool.lp_mint)]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = chef.gov_mint)]
    pub user_gov: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = reward_vault
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool.pid.to_le_bytes()],
        bump = pool.bump,
        has_one = chef @ FarmError::InvalidPool
    )]
    pub pool: Box<Account<'info, PoolInfo>>,

    #[account(
        mut,
        seeds = [USER_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = user_info.bump,
        has_one = pool,
        has_one = owner @ FarmError::Unauthorized
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    #[account(mut)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = chef.gov_mint)]
    pub user_gov: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct EmergencyWithdrawTokens<'info> {
    #[account(seeds = [CHEF_SEED, chef.gov_mint.as_ref()], bump = chef.bump)]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(
        mut,
        seeds = [POOL_SEED, chef.key().as_ref(), &pool.pid.to_le_bytes()],
        bump = pool.bump,
        has_one = chef @ FarmError::InvalidPool,
        has_one = lp_vault
    )]
    pub pool: Box<Account<'info, PoolInfo>>,

    #[account(
        mut,
        seeds = [USER_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = user_info.bump,
        has_one = pool,
        has_one = owner @ FarmError::Unauthorized
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    #[account(mut)]
    pub lp_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = pool.lp_mint)]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct PendingGov<'info> {
    #[account(seeds = [CHEF_SEED, chef.gov_mint.as_ref()], bump = chef.bump)]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(has_one = chef @ FarmError::InvalidPool)]
    pub pool: Box<Account<'info, PoolInfo>>,

    /// Absent when the account never deposited
    #[account(has_one = pool)]
    pub user_info: Option<Account<'info, UserInfo>>,
}
