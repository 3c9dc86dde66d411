//! The client through which contracts are deployed

use std::str::FromStr;

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::{debug, info};

use crate::{errors::ScriptError, types::DeployOptions};

/// A client able to list its signers and deploy contracts on their behalf
///
/// The deployment scripts are written against this trait so that they can be
/// exercised without a live network.
#[allow(async_fn_in_trait)]
pub trait DeployClient {
    /// The ordered set of addresses the client can send transactions from
    async fn signers(&self) -> Result<Vec<Address>, ScriptError>;

    /// Send a deployment transaction from `from` carrying `code`, and wait for it
    /// to be confirmed, returning the address of the created contract
    async fn deploy(
        &self,
        from: Address,
        code: Bytes,
        options: &DeployOptions,
    ) -> Result<Address, ScriptError>;
}

/// A [`DeployClient`] backed by a JSON-RPC provider
pub struct AlloyDeployClient {
    /// The provider used to send transactions
    provider: DynProvider,
    /// The addresses of the locally held private keys, in the order given
    local_signers: Vec<Address>,
}

impl AlloyDeployClient {
    /// Wrap a provider whose wallet holds the given local signers.
    ///
    /// With no local signers, the signer set is read from the node.
    pub fn new(provider: DynProvider, local_signers: Vec<Address>) -> Self {
        Self {
            provider,
            local_signers,
        }
    }
}

/// Parse the given private keys into local signers, keeping their order
pub fn parse_signers(priv_keys: &[String]) -> Result<Vec<PrivateKeySigner>, ScriptError> {
    priv_keys
        .iter()
        .map(|key| {
            PrivateKeySigner::from_str(key)
                .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
        })
        .collect()
}

/// Sets up a deploy client against the given RPC URL.
///
/// If private keys are given, transactions are signed locally and the signer set
/// is the keys' addresses in order. Otherwise the node's own accounts are used.
pub async fn setup_client(
    priv_keys: &[String],
    rpc_url: &str,
) -> Result<AlloyDeployClient, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let signers = parse_signers(priv_keys)?;
    let local_signers = signers.iter().map(|signer| signer.address()).collect();

    let provider = match signers.split_first() {
        Some((first, rest)) => {
            let mut wallet = EthereumWallet::from(first.clone());
            for signer in rest {
                wallet.register_signer(signer.clone());
            }
            DynProvider::new(ProviderBuilder::new().wallet(wallet).connect_http(url))
        }
        None => DynProvider::new(ProviderBuilder::new().connect_http(url)),
    };

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!(chain_id, rpc_url, "connected to network");

    Ok(AlloyDeployClient::new(provider, local_signers))
}

/// The address of the contract created by a confirmed deployment transaction,
/// failing if the transaction reverted or created nothing
pub fn deployed_contract_address(receipt: &TransactionReceipt) -> Result<Address, ScriptError> {
    let tx_hash = receipt.transaction_hash;
    if !receipt.status() {
        return Err(ScriptError::DeploymentReverted(format!("{tx_hash:#x}")));
    }

    receipt
        .contract_address
        .ok_or_else(|| ScriptError::MissingContractAddress(format!("{tx_hash:#x}")))
}

impl DeployClient for AlloyDeployClient {
    async fn signers(&self) -> Result<Vec<Address>, ScriptError> {
        if !self.local_signers.is_empty() {
            return Ok(self.local_signers.clone());
        }

        self.provider
            .get_accounts()
            .await
            .map_err(|e| ScriptError::SignerRetrieval(e.to_string()))
    }

    async fn deploy(
        &self,
        from: Address,
        code: Bytes,
        options: &DeployOptions,
    ) -> Result<Address, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(code);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        let tx_hash = *pending_tx.tx_hash();
        debug!(%tx_hash, "deployment transaction sent");

        let receipt = pending_tx
            .with_required_confirmations(options.confirmations)
            .with_timeout(Some(options.timeout))
            .get_receipt()
            .await
            .map_err(|e| ScriptError::Confirmation(e.to_string()))?;

        deployed_contract_address(&receipt)
    }
}
