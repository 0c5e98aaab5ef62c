//! CLI parse: clap types for the deployment patcher. No behavior; definitions only.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Chain patched when `--chain-key` is not given (the local Anvil test chain).
pub const DEFAULT_CHAIN_KEY: &str = "anvil";

/// Update deployment.toml with contract addresses
#[derive(Parser, Debug)]
#[command(name = "update-deployment", version)]
#[command(args_override_self = true)]
#[command(about = "Update deployment.toml with contract addresses and deployment metadata")]
pub struct Cli {
    /// Chain key in deployment.toml
    #[arg(long, default_value = DEFAULT_CHAIN_KEY)]
    pub chain_key: String,

    /// Deployment file to update (default: deployment.toml)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Declares the field flags once, generating both the clap struct and the ordered
/// `(flag, value)` listing the patcher consumes.
macro_rules! field_args {
    ($( $(#[doc = $doc:literal])* $field:ident ),* $(,)?) => {
        // Each supplied flag sets the hyphenated key of the same name.
        #[derive(Args, Debug, Clone, Default)]
        pub struct FieldArgs {
            $(
                $(#[doc = $doc])*
                #[arg(long)]
                pub $field: Option<String>,
            )*
        }

        impl FieldArgs {
            /// Every field flag with its value, `None` when not supplied.
            pub fn flags(&self) -> Vec<(&'static str, Option<&str>)> {
                vec![$((stringify!($field), self.$field.as_deref())),*]
            }
        }
    };
}

field_args! {
    /// Admin address
    admin,

    /// ZKC proxy address
    zkc,
    /// ZKC implementation address
    zkc_impl,
    /// Previous ZKC implementation address
    zkc_impl_prev,
    /// ZKC deployer address
    zkc_deployer,
    /// ZKC admin address
    zkc_admin,
    /// Git commit hash of the ZKC deployment
    zkc_commit,

    /// veZKC proxy address
    vezkc,
    /// veZKC implementation address
    vezkc_impl,
    /// Previous veZKC implementation address
    vezkc_impl_prev,
    /// veZKC deployer address
    vezkc_deployer,
    /// veZKC admin address
    vezkc_admin,
    /// Git commit hash of the veZKC deployment
    vezkc_commit,

    /// StakingRewards proxy address
    staking_rewards,
    /// StakingRewards implementation address
    staking_rewards_impl,
    /// Previous StakingRewards implementation address
    staking_rewards_impl_prev,
    /// StakingRewards deployer address
    staking_rewards_deployer,
    /// StakingRewards admin address
    staking_rewards_admin,
    /// Git commit hash of the StakingRewards deployment
    staking_rewards_commit,

    /// SupplyCalculator proxy address
    supply_calculator,
    /// SupplyCalculator implementation address
    supply_calculator_impl,
    /// Previous SupplyCalculator implementation address
    supply_calculator_impl_prev,
    /// SupplyCalculator deployer address
    supply_calculator_deployer,
    /// SupplyCalculator admin address
    supply_calculator_admin,
    /// Git commit hash of the SupplyCalculator deployment
    supply_calculator_commit,

    /// POVW minter address
    povw_minter,
    /// Staking minter address
    staking_minter,

    /// Git commit hash of deployment
    deployment_commit,
    /// RPC URL for the network
    rpc_url,
    /// Etherscan API key
    etherscan_api_key,
}
