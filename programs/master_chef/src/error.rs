use anchor_lang::prelude::*;

#[error_code]
pub enum FarmError {
    #[msg("Caller is not authorized to perform this action.")]
    Unauthorized,
    #[msg("Withdraw amount exceeds the staked balance.")]
    InsufficientStake,
    #[msg("Reward vault does not hold enough GOV to settle.")]
    InsufficientRewards,
    #[msg("Arithmetic overflow in reward accounting.")]
    MathOverflow,
    #[msg("Pool does not belong to this MasterChef.")]
    InvalidPool,
    #[msg("Pool account must be writable.")]
    PoolNotWritable,
    #[msg("Every pool must be supplied exactly once for a mass update.")]
    IncompletePoolList,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
}
