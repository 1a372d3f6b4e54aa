//! Reading staking program accounts.

use program_codec::source::{AccountSource, fetch_many, fetch_state};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_staking_state, find_user_stake},
    state::{StakingState, UserStakingAccount},
};

/// `None` until the program is initialized.
pub async fn fetch_staking_state<S>(source: &S) -> crate::Result<Option<StakingState>>
where
    S: AccountSource + ?Sized,
{
    fetch_state(source, &find_staking_state().0).await
}

/// `None` if `owner` never staked.
pub async fn fetch_user_staking_account<S>(
    source: &S,
    owner: &Pubkey,
) -> crate::Result<Option<UserStakingAccount>>
where
    S: AccountSource + ?Sized,
{
    fetch_state(source, &find_user_stake(owner).0).await
}

/// Staking records of `owners`, in the same order, owners without one skipped.
pub async fn fetch_user_staking_accounts<S>(
    source: &S,
    owners: &[Pubkey],
) -> crate::Result<Vec<UserStakingAccount>>
where
    S: AccountSource + ?Sized,
{
    let addresses = owners
        .iter()
        .map(|owner| find_user_stake(owner).0)
        .collect::<Vec<_>>();
    let users = fetch_many::<UserStakingAccount, _>(source, &addresses)
        .await?
        .into_iter()
        .flatten()
        .collect();
    Ok(users)
}
