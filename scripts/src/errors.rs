//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
///
/// Every variant is fatal: the first error aborts the deployment and is
/// surfaced to the caller as-is.
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error fetching the signer set from the client
    SignerRetrieval(String),
    /// The client returned an empty signer set
    NoSigners,
    /// Error reading a compilation artifact from disk
    ReadArtifact(String),
    /// More than one compilation artifact matches a contract name
    AmbiguousArtifact(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// Error sending a contract deployment transaction
    ContractDeployment(String),
    /// Error waiting for a deployment transaction to be confirmed
    Confirmation(String),
    /// A deployment was not confirmed within the configured timeout
    ConfirmationTimeout(String),
    /// A deployment transaction was mined but reverted
    DeploymentReverted(String),
    /// A confirmed deployment receipt carried no contract address
    MissingContractAddress(String),
    /// Error writing the deployment report
    Output(String),
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::SignerRetrieval(s) => write!(f, "error retrieving signers: {}", s),
            ScriptError::NoSigners => write!(f, "no signers available to deploy with"),
            ScriptError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            ScriptError::AmbiguousArtifact(s) => write!(f, "ambiguous artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::Confirmation(s) => write!(f, "error confirming deployment: {}", s),
            ScriptError::ConfirmationTimeout(s) => {
                write!(f, "timed out waiting for deployment of {}", s)
            }
            ScriptError::DeploymentReverted(s) => write!(f, "deployment reverted: {}", s),
            ScriptError::MissingContractAddress(s) => {
                write!(f, "receipt has no contract address: {}", s)
            }
            ScriptError::Output(s) => write!(f, "error writing output: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
