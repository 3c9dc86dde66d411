//! Constants used in the deploy scripts

/// The name of the token contract, as it appears in the build artifacts
pub const FUND_TOKEN_CONTRACT_NAME: &str = "FundToken";

/// The name of the crowdfunding contract, as it appears in the build artifacts
pub const CROWDFUNDING_CONTRACT_NAME: &str = "CrowdFunding";

/// The label under which the token contract address is reported
pub const FUND_TOKEN_LABEL: &str = "FundToken";

/// The label under which the crowdfunding contract address is reported
pub const CROWDFUNDING_LABEL: &str = "MetaTask";

/// The fixed numeric parameter passed to the crowdfunding contract's constructor,
/// after the token address
pub const CROWDFUNDING_PARAM: u64 = 100;

/// The default RPC URL, a local development node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// The default directory in which compilation artifacts are looked up
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default number of confirmations to wait for on each deployment transaction
pub const DEFAULT_NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The default time, in seconds, to wait for a deployment transaction to confirm
pub const DEFAULT_DEPLOY_TIMEOUT_SECS: u64 = 120;

/// The directory holding compiler build info, never searched for contract artifacts
pub const BUILD_INFO_SEGMENT: &str = "build-info";

/// The extension of a Solidity source file, used in artifact directory names
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of a JSON artifact file
pub const JSON_EXTENSION: &str = "json";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The token contract key in the `deployments.json` file
pub const FUND_TOKEN_CONTRACT_KEY: &str = "fund_token_contract";

/// The crowdfunding contract key in the `deployments.json` file
pub const CROWDFUNDING_CONTRACT_KEY: &str = "crowdfunding_contract";
