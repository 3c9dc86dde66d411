//! Type definitions used throughout the scripts

use std::time::Duration;

use alloy::primitives::Address;

use crate::errors::ScriptError;

/// Options controlling how long a deployment is waited on
#[derive(Clone, Copy, Debug)]
pub struct DeployOptions {
    /// The number of confirmations to wait for on each deployment transaction
    pub confirmations: u64,
    /// The maximum time to wait for a single deployment to confirm
    pub timeout: Duration,
}

/// The roles assigned to the leading positions of the signer set
///
/// Only the owner sends transactions, the funder and creator are
/// retrieved but not used by the deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignerRoles {
    /// The deploying account
    pub owner: Address,
    /// The second signer, if present
    pub funder: Option<Address>,
    /// The third signer, if present
    pub creator: Option<Address>,
}

impl SignerRoles {
    /// Assign roles to the first three signers, failing if there are none
    pub fn from_signers(signers: &[Address]) -> Result<Self, ScriptError> {
        let owner = *signers.first().ok_or(ScriptError::NoSigners)?;
        Ok(Self {
            owner,
            funder: signers.get(1).copied(),
            creator: signers.get(2).copied(),
        })
    }
}

/// The addresses of the contracts created by a successful deployment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContracts {
    /// The `FundToken` contract address
    pub fund_token: Address,
    /// The `CrowdFunding` contract address
    pub crowdfunding: Address,
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::SignerRoles;
    use crate::errors::ScriptError;

    #[test]
    fn test_roles_from_full_signer_set() {
        let signers: Vec<Address> = (1..=4).map(Address::repeat_byte).collect();
        let roles = SignerRoles::from_signers(&signers).unwrap();

        assert_eq!(roles.owner, signers[0]);
        assert_eq!(roles.funder, Some(signers[1]));
        assert_eq!(roles.creator, Some(signers[2]));
    }

    #[test]
    fn test_roles_from_single_signer() {
        let owner = Address::repeat_byte(7);
        let roles = SignerRoles::from_signers(&[owner]).unwrap();

        assert_eq!(roles.owner, owner);
        assert_eq!(roles.funder, None);
        assert_eq!(roles.creator, None);
    }

    #[test]
    fn test_roles_from_empty_signer_set() {
        let res = SignerRoles::from_signers(&[]);
        assert!(matches!(res, Err(ScriptError::NoSigners)));
    }
}
