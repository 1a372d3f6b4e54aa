//! Reading bounty program accounts.

use program_codec::source::{AccountSource, fetch_many, fetch_state};
use solana_pubkey::Pubkey;

use crate::{
    MAX_BOUNTY_SCAN,
    pda::{find_bounty, find_lp_claim, find_protocol_state},
    state::{BountyState, LpClaimState, ProtocolState},
};

/// `None` until the protocol is initialized.
pub async fn fetch_protocol_state<S>(source: &S) -> crate::Result<Option<ProtocolState>>
where
    S: AccountSource + ?Sized,
{
    fetch_state(source, &find_protocol_state().0).await
}

pub async fn fetch_bounty<S>(source: &S, id: u64) -> crate::Result<Option<BountyState>>
where
    S: AccountSource + ?Sized,
{
    fetch_state(source, &find_bounty(id).0).await
}

pub async fn fetch_lp_claim<S>(
    source: &S,
    bounty_id: u64,
    lp: &Pubkey,
) -> crate::Result<Option<LpClaimState>>
where
    S: AccountSource + ?Sized,
{
    let (bounty, _) = find_bounty(bounty_id);
    fetch_state(source, &find_lp_claim(&bounty, lp).0).await
}

/// Bounties `0..count` in ascending id order, missing ones skipped.
///
/// `count` above [`MAX_BOUNTY_SCAN`] is rejected before any request.
pub async fn fetch_all_bounties<S>(source: &S, count: u64) -> crate::Result<Vec<BountyState>>
where
    S: AccountSource + ?Sized,
{
    if count > MAX_BOUNTY_SCAN {
        return Err(crate::Error::TooManyAccounts {
            count,
            max: MAX_BOUNTY_SCAN,
        });
    }
    let addresses = (0..count).map(|id| find_bounty(id).0).collect::<Vec<_>>();
    let bounties = fetch_many::<BountyState, _>(source, &addresses)
        .await?
        .into_iter()
        .flatten()
        .collect();
    Ok(bounties)
}

/// Every bounty the protocol has created so far.
pub async fn fetch_all_bounties_from_protocol<S>(source: &S) -> crate::Result<Vec<BountyState>>
where
    S: AccountSource + ?Sized,
{
    match fetch_protocol_state(source).await? {
        Some(protocol) => fetch_all_bounties(source, protocol.total_bounties).await,
        None => Ok(Vec::new()),
    }
}
