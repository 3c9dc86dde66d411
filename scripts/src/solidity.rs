//! Definitions of Solidity interfaces used during deployment

use alloy::sol;

sol! {
    contract CrowdFunding {
        constructor(address fundToken, uint256 initialParam);
    }
}
