use anchor_lang::prelude::*;

#[event]
pub struct Deposit {
    pub user: Pubkey,
    pub pid: u64,
    pub amount: u64,
}

#[event]
pub struct Withdraw {
    pub user: Pubkey,
    pub pid: u64,
    pub amount: u64,
}

#[event]
pub struct EmergencyWithdraw {
    pub user: Pubkey,
    pub pid: u64,
    pub amount: u64,
}

#[event]
pub struct RewardClaimed {
    pub user: Pubkey,
    pub pid: u64,
    pub amount: u64,
}

#[event]
pub struct PoolAdded {
    pub pid: u64,
    pub lp_mint: Pubkey,
    pub alloc_point: u64,
}

#[event]
pub struct PoolSet {
    pub pid: u64,
    pub alloc_point: u64,
}

#[event]
pub struct PoolUpdated {
    pub pid: u64,
    pub last_reward_time: i64,
    pub total_staked: u64,
    pub acc_gov_per_share: u128,
}

#[event]
pub struct GovPerSecondUpdated {
    pub gov_per_second: u64,
}

#[event]
pub struct RewardsFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AuthorityTransferred {
    pub previous: Pubkey,
    pub new_authority: Pubkey,
}
