//! Utilities for the deploy scripts.

use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::{
    constants::{CROWDFUNDING_CONTRACT_KEY, DEPLOYMENTS_KEY, FUND_TOKEN_CONTRACT_KEY},
    errors::ScriptError,
    types::DeployedContracts,
};

/// Read the `deployments.json` file, treating a missing file as empty
fn get_json_from_file(file_path: &Path) -> Result<Value, ScriptError> {
    if !file_path.exists() {
        return Ok(Value::Object(Map::new()));
    }

    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;
    serde_json::from_str(&file_contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record the deployed addresses in the `deployments.json` file,
/// creating it if needed and preserving any other entries
pub fn write_deployed_addresses(
    file_path: &Path,
    deployed: &DeployedContracts,
) -> Result<(), ScriptError> {
    let mut parsed_json = get_json_from_file(file_path)?;

    let deployments = parsed_json
        .as_object_mut()
        .ok_or_else(|| ScriptError::ReadDeployments("expected a JSON object".to_string()))?
        .entry(DEPLOYMENTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!("expected `{DEPLOYMENTS_KEY}` to be an object"))
        })?;

    deployments.insert(
        FUND_TOKEN_CONTRACT_KEY.to_string(),
        Value::String(format!("{:#x}", deployed.fund_token)),
    );
    deployments.insert(
        CROWDFUNDING_CONTRACT_KEY.to_string(),
        Value::String(format!("{:#x}", deployed.crowdfunding)),
    );

    let contents = serde_json::to_string_pretty(&parsed_json)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::Address;
    use serde_json::{json, Value};

    use super::write_deployed_addresses;
    use crate::{errors::ScriptError, types::DeployedContracts};

    fn deployed() -> DeployedContracts {
        DeployedContracts {
            fund_token: Address::repeat_byte(0x11),
            crowdfunding: Address::repeat_byte(0x22),
        }
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");

        write_deployed_addresses(&path, &deployed()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "deployments": {
                    "fund_token_contract": format!("0x{}", "11".repeat(20)),
                    "crowdfunding_contract": format!("0x{}", "22".repeat(20)),
                }
            })
        );
    }

    #[test]
    fn test_write_preserves_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(
            &path,
            r#"{ "network": "devnet", "deployments": { "other_contract": "0x01" } }"#,
        )
        .unwrap();

        write_deployed_addresses(&path, &deployed()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["network"], "devnet");
        assert_eq!(written["deployments"]["other_contract"], "0x01");
        assert_eq!(
            written["deployments"]["crowdfunding_contract"],
            format!("0x{}", "22".repeat(20))
        );
    }

    #[test]
    fn test_write_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "[]").unwrap();

        let res = write_deployed_addresses(&path, &deployed());
        assert!(matches!(res, Err(ScriptError::ReadDeployments(_))));
    }
}
