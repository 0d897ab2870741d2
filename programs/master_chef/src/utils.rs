use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ACC_GOV_PRECISION, CHEF_SEED};
use crate::error::FarmError;
use crate::state::{MasterChef, PoolInfo};

/// GOV emitted to one pool over `elapsed` seconds, scaled by
/// `ACC_GOV_PRECISION`.
pub fn pool_emission(
    elapsed: u64,
    gov_per_second: u64,
    alloc_point: u64,
    total_alloc_point: u64,
) -> Result<u128> {
    if total_alloc_point == 0 {
        return Ok(0);
    }
    u128::from(elapsed)
        .checked_mul(u128::from(gov_per_second))
        .and_then(|v| v.checked_mul(u128::from(alloc_point)))
        .and_then(|v| v.checked_mul(ACC_GOV_PRECISION))
        .and_then(|v| v.checked_div(u128::from(total_alloc_point)))
        .ok_or_else(|| FarmError::MathOverflow.into())
}

/// Spreads a scaled reward plus the carried remainder over `total_staked`.
/// Returns the accumulator increment and the remainder to carry forward.
pub fn spread_over_shares(
    scaled_reward: u128,
    carry: u128,
    total_staked: u64,
) -> Result<(u128, u128)> {
    if total_staked == 0 {
        return Ok((0, carry));
    }
    let total = scaled_reward
        .checked_add(carry)
        .ok_or(FarmError::MathOverflow)?;
    let staked = u128::from(total_staked);
    Ok((total / staked, total % staked))
}

/// Total GOV ever earned by `amount` at accumulator `acc_gov_per_share`.
/// Also the `reward_debt` snapshot after a settlement.
pub fn accumulated_reward(amount: u64, acc_gov_per_share: u128) -> Result<u128> {
    u128::from(amount)
        .checked_mul(acc_gov_per_share)
        .map(|v| v / ACC_GOV_PRECISION)
        .ok_or_else(|| FarmError::MathOverflow.into())
}

pub fn pending_reward(amount: u64, acc_gov_per_share: u128, reward_debt: u128) -> Result<u64> {
    let pending = accumulated_reward(amount, acc_gov_per_share)?
        .checked_sub(reward_debt)
        .ok_or(FarmError::MathOverflow)?;
    u64::try_from(pending).map_err(|_| FarmError::MathOverflow.into())
}

/// Moves tokens out of a chef-owned vault, signing as the MasterChef PDA.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    chef: &Account<'info, MasterChef>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let bump = [chef.bump];
    let seeds: &[&[u8]] = &[CHEF_SEED, chef.gov_mint.as_ref(), &bump];
    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: destination.to_account_info(),
        authority: chef.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, &[seeds]),
        amount,
    )
}

/// Moves tokens from a user-owned account; `owner` signs the transaction.
pub fn transfer_from_owner<'info>(
    token_program: &Program<'info, Token>,
    source: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let cpi_accounts = Transfer {
        from: source.to_account_info(),
        to: destination.to_account_info(),
        authority: owner.to_account_info(),
    };
    token::transfer(
        CpiContext::new(token_program.to_account_info(), cpi_accounts),
        amount,
    )
}

pub fn ensure_reward_funds(vault_balance: u64, amount: u64) -> Result<()> {
    require!(vault_balance >= amount, FarmError::InsufficientRewards);
    Ok(())
}

/// Pays a settled reward out of the reward vault.
pub fn pay_reward<'info>(
    token_program: &Program<'info, Token>,
    reward_vault: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    chef: &Account<'info, MasterChef>,
    amount: u64,
) -> Result<()> {
    ensure_reward_funds(reward_vault.amount, amount)?;
    transfer_from_vault(token_program, reward_vault, destination, chef, amount)
}

/// Brings every pool of `chef` up to `now`.
///
/// `pools` must hold each of the chef's pools exactly once, writable.
pub fn mass_update<'info>(
    chef: &MasterChef,
    chef_key: Pubkey,
    pools: &'info [AccountInfo<'info>],
    now: i64,
) -> Result<()> {
    let supplied = u64::try_from(pools.len()).map_err(|_| FarmError::IncompletePoolList)?;
    require!(supplied == chef.pool_count, FarmError::IncompletePoolList);

    let mut seen = vec![false; pools.len()];
    for info in pools {
        require!(info.is_writable, FarmError::PoolNotWritable);
        let mut pool = Account::<PoolInfo>::try_from(info)?;
        require_keys_eq!(pool.chef, chef_key, FarmError::InvalidPool);

        let slot = usize::try_from(pool.pid)
            .ok()
            .and_then(|pid| seen.get_mut(pid))
            .ok_or(FarmError::IncompletePoolList)?;
        require!(!*slot, FarmError::IncompletePoolList);
        *slot = true;

        pool.update(chef, now)?;
        pool.exit(&crate::ID)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(_) => u32::MAX,
        }
    }

    #[test]
    fn emission_is_split_by_weight() {
        // 100 s at 10 GOV/s, pool holds 1 of 4 points
        assert_eq!(pool_emission(100, 10, 1, 4).unwrap(), 250 * ACC_GOV_PRECISION);
        assert_eq!(pool_emission(100, 10, 0, 4).unwrap(), 0);
        assert_eq!(pool_emission(100, 10, 1, 0).unwrap(), 0);
    }

    #[test]
    fn emission_keeps_fractional_gov() {
        // 1 s at 1000 GOV/s for 100 of 300 points is 333.33.. GOV
        assert_eq!(pool_emission(1, 1_000, 100, 300).unwrap(), 333_333_333_333_333);
    }

    #[test]
    fn spread_carries_the_remainder() {
        assert_eq!(spread_over_shares(10, 0, 3).unwrap(), (3, 1));
        assert_eq!(spread_over_shares(10, 2, 3).unwrap(), (4, 0));
        assert_eq!(spread_over_shares(2, 0, 1_000).unwrap(), (0, 2));
    }

    #[test]
    fn spread_without_stake_keeps_carry() {
        assert_eq!(spread_over_shares(1_000, 7, 0).unwrap(), (0, 7));
    }

    #[test]
    fn pending_subtracts_debt() {
        let acc = 3 * ACC_GOV_PRECISION;
        assert_eq!(pending_reward(10, acc, 0).unwrap(), 30);
        assert_eq!(pending_reward(10, acc, 30).unwrap(), 0);
        assert_eq!(pending_reward(10, acc, 12).unwrap(), 18);
    }

    #[test]
    fn debt_above_accumulated_is_rejected() {
        assert!(pending_reward(10, ACC_GOV_PRECISION, 11).is_err());
    }

    #[test]
    fn reward_vault_shortfall_is_rejected() {
        assert!(ensure_reward_funds(100, 100).is_ok());
        assert!(ensure_reward_funds(100, 0).is_ok());
        let err = ensure_reward_funds(99, 100).unwrap_err();
        assert_eq!(error_code(err), u32::from(FarmError::InsufficientRewards));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(pool_emission(u64::MAX, u64::MAX, u64::MAX, 1).is_err());
        assert!(accumulated_reward(u64::MAX, u128::MAX).is_err());
        assert!(spread_over_shares(u128::MAX, 1, 1).is_err());
    }
}
