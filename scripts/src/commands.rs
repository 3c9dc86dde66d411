//! Implementations of the deploy scripts

use std::io::Write;

use alloy::{
    primitives::{Address, U256},
    sol_types::SolConstructor,
};
use tracing::{debug, info};

use crate::{
    artifacts::{ContractArtifact, CrowdfundingArtifacts},
    client::DeployClient,
    constants::{CROWDFUNDING_LABEL, CROWDFUNDING_PARAM, FUND_TOKEN_LABEL},
    errors::ScriptError,
    solidity::CrowdFunding,
    types::{DeployOptions, DeployedContracts, SignerRoles},
};

/// Deploy the `FundToken` contract, then the `CrowdFunding` contract referencing it.
///
/// Each address is written to `out` as soon as its deployment confirms, so a
/// failure of the second deployment still leaves the first address reported.
/// Nothing is retried or rolled back.
pub async fn deploy_crowdfunding<C: DeployClient, W: Write>(
    client: &C,
    artifacts: &CrowdfundingArtifacts,
    options: &DeployOptions,
    out: &mut W,
) -> Result<DeployedContracts, ScriptError> {
    let signers = client.signers().await?;
    let roles = SignerRoles::from_signers(&signers)?;
    info!(owner = %roles.owner, "deploying as owner");
    debug!(funder = ?roles.funder, creator = ?roles.creator, "unused signers");

    let fund_token =
        deploy_contract(client, roles.owner, &artifacts.fund_token, &[], options).await?;
    report_address(out, FUND_TOKEN_LABEL, fund_token)?;

    let constructor_args = crowdfunding_constructor_args(fund_token);
    let crowdfunding = deploy_contract(
        client,
        roles.owner,
        &artifacts.crowdfunding,
        &constructor_args,
        options,
    )
    .await?;
    report_address(out, CROWDFUNDING_LABEL, crowdfunding)?;

    Ok(DeployedContracts {
        fund_token,
        crowdfunding,
    })
}

/// ABI-encode the `CrowdFunding` constructor arguments
pub fn crowdfunding_constructor_args(fund_token: Address) -> Vec<u8> {
    CrowdFunding::constructorCall {
        fundToken: fund_token,
        initialParam: U256::from(CROWDFUNDING_PARAM),
    }
    .abi_encode()
}

/// Deploy a single contract, bounding the wait for confirmation by the configured timeout
async fn deploy_contract<C: DeployClient>(
    client: &C,
    from: Address,
    artifact: &ContractArtifact,
    constructor_args: &[u8],
    options: &DeployOptions,
) -> Result<Address, ScriptError> {
    info!(contract = %artifact.name, "deploying contract");

    let code = artifact.deploy_code(constructor_args);
    let address = tokio::time::timeout(options.timeout, client.deploy(from, code, options))
        .await
        .map_err(|_| ScriptError::ConfirmationTimeout(artifact.name.clone()))??;

    info!(contract = %artifact.name, %address, "contract deployed");
    Ok(address)
}

/// Write a single `Address of <label>: <address>` line and flush it
fn report_address<W: Write>(out: &mut W, label: &str, address: Address) -> Result<(), ScriptError> {
    writeln!(out, "Address of {}: {}", label, address)
        .and_then(|_| out.flush())
        .map_err(|e| ScriptError::Output(e.to_string()))
}
