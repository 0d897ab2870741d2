// PDA seeds
pub const CHEF_SEED: &[u8] = b"master_chef";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
pub const POOL_SEED: &[u8] = b"pool";
pub const LP_VAULT_SEED: &[u8] = b"lp_vault";
pub const USER_SEED: &[u8] = b"user";

/// Fixed-point scale of `PoolInfo::acc_gov_per_share`.
pub const ACC_GOV_PRECISION: u128 = 1_000_000_000_000;
