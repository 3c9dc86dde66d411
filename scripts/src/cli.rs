//! Definitions of CLI arguments for the deploy script

use std::{io, path::PathBuf, time::Duration};

use clap::Parser;
use tracing::{info, Level};

use crate::{
    artifacts::load_crowdfunding_artifacts,
    client::setup_client,
    commands::deploy_crowdfunding,
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOY_TIMEOUT_SECS, DEFAULT_NUM_DEPLOY_CONFIRMATIONS,
        DEFAULT_RPC_URL,
    },
    errors::ScriptError,
    types::DeployOptions,
    utils::write_deployed_addresses,
};

/// Deploy the `FundToken` contract and a `CrowdFunding` contract referencing it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private keys of the signers, in order: owner, funder, creator.
    /// If omitted, the node's own accounts are used.
    #[arg(short, long = "pkey", env = "PKEY", value_delimiter = ',')]
    pub priv_keys: Vec<String>,

    /// Directory containing the Hardhat or Foundry compilation artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Number of confirmations to wait for on each deployment
    #[arg(short, long, default_value_t = DEFAULT_NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,

    /// Seconds to wait for each deployment to confirm
    #[arg(short, long = "timeout-secs", default_value_t = DEFAULT_DEPLOY_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Path of a `deployments.json` file in which to record the deployed addresses
    #[arg(short, long)]
    pub deployments: Option<PathBuf>,

    /// Maximum level of the logs written to stderr
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    /// The deployment options described by the arguments
    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions {
            confirmations: self.confirmations,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Run the deployment against the configured network
    pub async fn run(self) -> Result<(), ScriptError> {
        let artifacts = load_crowdfunding_artifacts(&self.artifacts)?;
        let client = setup_client(&self.priv_keys, &self.rpc_url).await?;

        let deployed =
            deploy_crowdfunding(&client, &artifacts, &self.deploy_options(), &mut io::stdout())
                .await?;

        if let Some(deployments_path) = &self.deployments {
            write_deployed_addresses(deployments_path, &deployed)?;
            info!(path = %deployments_path.display(), "deployments written");
        }

        Ok(())
    }
}
