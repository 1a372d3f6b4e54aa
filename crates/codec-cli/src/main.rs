#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use program_codec::{
    config::{ClientConfig, SolanaNet},
    source::AccountSource,
    utils::{amount_to_ui_amount, ui_amount_to_amount},
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};
use solana_program::instruction::Instruction;
use solana_pubkey::Pubkey;
use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chain-inspect")]
struct Args {
    /// TOML client config, `-` reads STDIN
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Cluster to use instead of a config file
    #[arg(long, conflicts_with = "config")]
    cluster: Option<SolanaNet>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the bounty protocol state
    Protocol,
    /// Print one bounty
    Bounty { id: u64 },
    /// Print every bounty created so far
    Bounties,
    /// Print the claim of a liquidity provider on a bounty
    Claim {
        #[arg(long)]
        bounty_id: u64,
        #[arg(long)]
        lp: Pubkey,
    },
    /// Print the staking state
    Staking,
    /// Print the staking record of an owner
    User {
        owner: Pubkey,
        /// Decimals of the stake mint
        #[arg(long, default_value_t = 9)]
        decimals: u8,
    },
    /// Build a stake instruction without sending it
    PreviewStake {
        #[arg(long)]
        owner: Pubkey,
        #[arg(long)]
        stake_mint: Pubkey,
        /// Amount in UI units, e.g. `1.5`
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value_t = 9)]
        decimals: u8,
        /// Lock tier index, 0 to 6
        #[arg(long, default_value_t = 0)]
        tier: u8,
    },
}

fn read_config(path: &Path) -> anyhow::Result<ClientConfig> {
    let s = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("reading STDIN")?
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    toml::from_str(&s).context("parsing config")
}

fn get_config(args: &Args) -> ClientConfig {
    match (&args.config, args.cluster) {
        (Some(path), _) => read_config(path)
            .map_err(|error| {
                tracing::warn!("invalid config file, using default: {:#}", error);
            })
            .unwrap_or_default(),
        (None, Some(cluster)) => ClientConfig::new(cluster),
        (None, None) => {
            tracing::info!("no config specified, using default");
            ClientConfig::default()
        }
    }
}

#[serde_as]
#[derive(Serialize)]
struct AccountView {
    #[serde_as(as = "DisplayFromStr")]
    pubkey: Pubkey,
    is_signer: bool,
    is_writable: bool,
}

#[serde_as]
#[derive(Serialize)]
struct InstructionView {
    #[serde_as(as = "DisplayFromStr")]
    program_id: Pubkey,
    accounts: Vec<AccountView>,
    data: String,
}

impl From<Instruction> for InstructionView {
    fn from(ix: Instruction) -> Self {
        Self {
            program_id: ix.program_id,
            accounts: ix
                .accounts
                .into_iter()
                .map(|meta| AccountView {
                    pubkey: meta.pubkey,
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data: ix.data.iter().map(|b| format!("{:02x}", b)).collect(),
        }
    }
}

#[derive(Serialize)]
struct UserView {
    #[serde(flatten)]
    account: token_staking::UserStakingAccount,
    total_staked: u64,
    total_staked_ui: Decimal,
    unlocked_positions: Vec<u8>,
    can_claim: bool,
    claimable_rewards: Option<[u64; token_staking::MAX_REWARD_TOKENS]>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn now() -> anyhow::Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

async fn run<S: AccountSource + ?Sized>(source: &S, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Protocol => {
            let state = lp_bounty::fetch_protocol_state(source).await?;
            print_json(&state)
        }
        Commands::Bounty { id } => {
            let bounty = lp_bounty::fetch_bounty(source, id)
                .await?
                .map(lp_bounty::BountyView::from);
            print_json(&bounty)
        }
        Commands::Bounties => {
            let bounties = lp_bounty::fetch_all_bounties_from_protocol(source)
                .await?
                .into_iter()
                .map(lp_bounty::BountyView::from)
                .collect::<Vec<_>>();
            print_json(&bounties)
        }
        Commands::Claim { bounty_id, lp } => {
            let claim = lp_bounty::fetch_lp_claim(source, bounty_id, &lp).await?;
            print_json(&claim)
        }
        Commands::Staking => {
            let state = token_staking::fetch_staking_state(source).await?;
            print_json(&state)
        }
        Commands::User { owner, decimals } => {
            let Some(account) = token_staking::fetch_user_staking_account(source, &owner).await?
            else {
                return print_json(&None::<UserView>);
            };
            let state = token_staking::fetch_staking_state(source).await?;
            let now = now()?;
            let total_staked = account.total_staked();
            let view = UserView {
                total_staked,
                total_staked_ui: amount_to_ui_amount(total_staked, decimals),
                unlocked_positions: account.unlocked_positions(now),
                can_claim: account.can_claim(now),
                claimable_rewards: state.map(|state| account.claimable_rewards(&state)),
                account,
            };
            print_json(&Some(view))
        }
        Commands::PreviewStake {
            owner,
            stake_mint,
            amount,
            decimals,
            tier,
        } => {
            let amount = ui_amount_to_amount(amount, decimals)?;
            let ix = token_staking::stake(&owner, &stake_mint, amount, tier)?;
            print_json(&InstructionView::from(ix))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = get_config(&args);
    tracing::debug!("using {} at {}", config.cluster.as_str(), config.url);

    let client = config.build_client();
    run(&client, args.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use program_codec::source::MemoryAccounts;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["chain-inspect", "--cluster", "mainnet", "bounty", "3"])
            .unwrap();
        assert_eq!(args.cluster, Some(SolanaNet::Mainnet));
        assert!(matches!(args.command, Commands::Bounty { id: 3 }));

        let owner = Pubkey::new_unique();
        let args = Args::try_parse_from([
            "chain-inspect",
            "preview-stake",
            "--owner",
            &owner.to_string(),
            "--stake-mint",
            &Pubkey::new_unique().to_string(),
            "--amount",
            "1.5",
            "--tier",
            "3",
        ])
        .unwrap();
        match args.command {
            Commands::PreviewStake {
                owner: parsed,
                amount,
                decimals,
                tier,
                ..
            } => {
                assert_eq!(parsed, owner);
                assert_eq!(amount, Decimal::new(15, 1));
                assert_eq!(decimals, 9);
                assert_eq!(tier, 3);
            }
            command => panic!("unexpected command {:?}", command),
        }
    }

    #[test]
    fn test_config_conflicts_with_cluster() {
        let result = Args::try_parse_from([
            "chain-inspect",
            "--config",
            "client.toml",
            "--cluster",
            "mainnet",
            "staking",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_fallback() {
        let args = Args::try_parse_from([
            "chain-inspect",
            "--config",
            "/nonexistent/chain-inspect.toml",
            "staking",
        ])
        .unwrap();
        assert_eq!(get_config(&args), ClientConfig::default());
    }

    #[test]
    fn test_read_config() {
        let path = std::env::temp_dir().join(format!("chain-inspect-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "url = \"http://127.0.0.1:8899\"\ncluster = \"localnet\"\ncommitment = \"finalized\"\n",
        )
        .unwrap();
        let config = read_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.cluster, SolanaNet::Localnet);
        assert_eq!(config.timeout_in_secs, 30);
    }

    #[test]
    fn test_instruction_view() {
        let owner = Pubkey::new_unique();
        let ix = token_staking::stake(&owner, &Pubkey::new_unique(), 1_000, 1).unwrap();
        let view = InstructionView::from(ix);
        assert_eq!(view.data.len(), 17 * 2);
        assert!(view.data.starts_with("ceb0ca12c8d1b36c"));
        assert_eq!(view.accounts[0].pubkey, owner);
        assert!(view.accounts[0].is_signer);
    }

    #[tokio::test]
    async fn test_run_against_empty_cluster() {
        let source = MemoryAccounts::new();
        run(&source, Commands::Bounties).await.unwrap();
        run(
            &source,
            Commands::User {
                owner: Pubkey::new_unique(),
                decimals: 6,
            },
        )
        .await
        .unwrap();
        source.set_offline(true);
        assert!(run(&source, Commands::Protocol).await.is_err());
    }
}
