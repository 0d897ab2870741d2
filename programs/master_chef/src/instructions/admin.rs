use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CHEF_SEED, REWARD_VAULT_SEED};
use crate::error::FarmError;
use crate::events::{AuthorityTransferred, GovPerSecondUpdated, RewardsFunded};
use crate::state::MasterChef;
use crate::utils::{mass_update, transfer_from_owner};

pub fn initialize(ctx: Context<Initialize>, gov_per_second: u64, start_time: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let chef = &mut ctx.accounts.chef;

    chef.authority = ctx.accounts.authority.key();
    chef.gov_mint = ctx.accounts.gov_mint.key();
    chef.reward_vault = ctx.accounts.reward_vault.key();
    chef.gov_per_second = gov_per_second;
    chef.total_alloc_point = 0;
    chef.schedule_start(start_time, now);
    chef.pool_count = 0;
    chef.bump = ctx.bumps.chef;
    chef.reward_vault_bump = ctx.bumps.reward_vault;

    msg!(
        "MasterChef initialized: {} GOV/s from {}",
        gov_per_second,
        chef.start_time
    );
    Ok(())
}

/// Changes the global emission. With `with_update`, every pool must be
/// passed in remaining accounts so accrual up to now uses the old rate.
pub fn set_gov_per_second<'info>(
    ctx: Context<'_, '_, 'info, 'info, AdminOnly<'info>>,
    gov_per_second: u64,
    with_update: bool,
) -> Result<()> {
    if with_update {
        let now = Clock::get()?.unix_timestamp;
        let chef_key = ctx.accounts.chef.key();
        mass_update(&ctx.accounts.chef, chef_key, ctx.remaining_accounts, now)?;
    }

    ctx.accounts.chef.gov_per_second = gov_per_second;

    emit!(GovPerSecondUpdated { gov_per_second });
    Ok(())
}

pub fn set_authority(ctx: Context<AdminOnly>, new_authority: Pubkey) -> Result<()> {
    let chef = &mut ctx.accounts.chef;
    let previous = chef.authority;
    chef.authority = new_authority;

    emit!(AuthorityTransferred {
        previous,
        new_authority,
    });
    Ok(())
}

pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, FarmError::InvalidAmount);

    transfer_from_owner(
        &ctx.accounts.token_program,
        &ctx.accounts.funder_gov,
        &ctx.accounts.reward_vault,
        &ctx.accounts.funder,
        amount,
    )?;

    emit!(RewardsFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });
    Ok(())
}

// -----------------------------------
// ACCOUNTS STRUCTS
// -----------------------------------

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        seeds = [CHEF_SEED, gov_mint.key().as_ref()],
        bump,
        space = 8 + MasterChef::INIT_SPACE
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    pub gov_mint: Box<Account<'info, Mint>>,

    /// GOV paid out to farmers, owned by the chef PDA
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, chef.key().as_ref()],
        bump,
        token::mint = gov_mint,
        token::authority = chef
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct AdminOnly<'info> {
    #[account(
        mut,
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct FundRewards<'info> {
    #[account(
        seeds = [CHEF_SEED, chef.gov_mint.as_ref()],
        bump = chef.bump,
        has_one = reward_vault
    )]
    pub chef: Box<Account<'info, MasterChef>>,

    #[account(mut)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = chef.gov_mint)]
    pub funder_gov: Box<Account<'info, TokenAccount>>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
