//! Anchor-style 8-byte type tags.

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// `sha256("{namespace}:{name}")[..8]`
pub fn discriminator(namespace: &str, name: &str) -> Discriminator {
    let preimage = format!("{}:{}", namespace, name);
    let mut disc = [0u8; DISCRIMINATOR_LEN];
    disc.copy_from_slice(&solana_program::hash::hash(preimage.as_bytes()).to_bytes()[..8]);
    disc
}

/// Prefix of instruction data.
pub fn anchor_sighash(name: &str) -> Discriminator {
    discriminator("global", name)
}

/// Prefix of account data, `name` is the account struct name.
pub fn account_discriminator(name: &str) -> Discriminator {
    discriminator("account", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_sighash() {
        assert_eq!(
            anchor_sighash("stake"),
            [206, 176, 202, 18, 200, 209, 179, 108]
        );
    }

    #[test]
    fn test_namespaces_differ() {
        assert_ne!(anchor_sighash("stake"), account_discriminator("stake"));
        assert_eq!(discriminator("global", "stake"), anchor_sighash("stake"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            account_discriminator("BountyState"),
            account_discriminator("BountyState")
        );
        assert_ne!(
            account_discriminator("BountyState"),
            account_discriminator("LpClaimState")
        );
    }
}
