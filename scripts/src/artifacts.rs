//! Resolution of contract compilation artifacts
//!
//! Artifacts are looked up by contract name anywhere under an artifacts root, as
//! `<Source>.sol/<Name>.json` at any depth. This covers both the Hardhat layout
//! (a hex `bytecode` string) and the Foundry layout (the hex string nested under
//! `bytecode.object`), regardless of which source file declares the contract.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{
        BUILD_INFO_SEGMENT, CROWDFUNDING_CONTRACT_NAME, FUND_TOKEN_CONTRACT_NAME, JSON_EXTENSION,
        SOLIDITY_EXTENSION,
    },
    errors::ScriptError,
};

/// The `bytecode` field of an artifact, which differs between toolchains
#[derive(Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    /// Hardhat: the creation bytecode as a hex string
    Hex(Bytes),
    /// Foundry: the creation bytecode nested in an object
    Object {
        /// The creation bytecode as a hex string
        object: Bytes,
    },
}

/// The subset of an artifact file needed for deployment
#[derive(Deserialize)]
struct RawArtifact {
    /// The creation bytecode
    bytecode: BytecodeField,
}

/// A compiled contract, able to produce deployment code for given constructor arguments
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The name of the contract
    pub name: String,
    /// The creation bytecode of the contract
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Construct the deployment code: the creation bytecode followed by
    /// the ABI-encoded constructor arguments
    pub fn deploy_code(&self, constructor_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        code.into()
    }
}

/// The artifacts of the two contracts created by a crowdfunding deployment
#[derive(Clone, Debug)]
pub struct CrowdfundingArtifacts {
    /// The `FundToken` artifact
    pub fund_token: ContractArtifact,
    /// The `CrowdFunding` artifact
    pub crowdfunding: ContractArtifact,
}

/// Load both crowdfunding deployment artifacts from the given root
pub fn load_crowdfunding_artifacts(root: &Path) -> Result<CrowdfundingArtifacts, ScriptError> {
    Ok(CrowdfundingArtifacts {
        fund_token: load_artifact(root, FUND_TOKEN_CONTRACT_NAME)?,
        crowdfunding: load_artifact(root, CROWDFUNDING_CONTRACT_NAME)?,
    })
}

/// Load the artifact of the named contract from the given root
pub fn load_artifact(root: &Path, name: &str) -> Result<ContractArtifact, ScriptError> {
    let file_name = format!("{name}.{JSON_EXTENSION}");
    let mut matches = Vec::new();
    find_artifacts(root, &file_name, &mut matches)?;
    matches.sort();

    let path = match matches.as_slice() {
        [] => {
            return Err(ScriptError::ReadArtifact(format!(
                "no artifact for {} under {}",
                name,
                root.display()
            )))
        }
        [path] => path,
        paths => {
            let paths = paths
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ScriptError::AmbiguousArtifact(format!("{name}: {paths}")));
        }
    };

    debug!(contract = name, path = %path.display(), "loading artifact");

    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ReadArtifact(e.to_string()))?;
    parse_artifact(name, &contents)
}

/// Parse an artifact from its JSON contents
pub fn parse_artifact(name: &str, contents: &str) -> Result<ContractArtifact, ScriptError> {
    let raw: RawArtifact =
        serde_json::from_str(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = match raw.bytecode {
        BytecodeField::Hex(bytes) | BytecodeField::Object { object: bytes } => bytes,
    };

    // Interfaces and abstract contracts compile to empty bytecode
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactParsing(format!(
            "{} has no creation bytecode",
            name
        )));
    }

    Ok(ContractArtifact {
        name: name.to_string(),
        bytecode,
    })
}

/// Recursively collect the files named `file_name` that sit in a `*.sol` directory.
///
/// `build-info` directories are skipped, and debug files (`<Name>.dbg.json`)
/// never match since only the exact file name is accepted.
fn find_artifacts(
    dir: &Path,
    file_name: &str,
    matches: &mut Vec<PathBuf>,
) -> Result<(), ScriptError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| ScriptError::ReadArtifact(format!("{}: {}", dir.display(), e)))?;

    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ReadArtifact(e.to_string()))?
            .path();

        if path.is_dir() {
            if path.file_name().is_some_and(|name| name == BUILD_INFO_SEGMENT) {
                continue;
            }
            find_artifacts(&path, file_name, matches)?;
        } else if path.file_name().is_some_and(|name| name == file_name)
            && dir.extension().is_some_and(|ext| ext == SOLIDITY_EXTENSION)
        {
            matches.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use alloy::primitives::Bytes;

    use super::{load_artifact, load_crowdfunding_artifacts, parse_artifact, ContractArtifact};
    use crate::errors::ScriptError;

    #[test]
    fn test_parse_hardhat_artifact() {
        let contents = r#"{
            "contractName": "FundToken",
            "abi": [],
            "bytecode": "0x6080604052",
            "deployedBytecode": "0x6080"
        }"#;
        let artifact = parse_artifact("FundToken", contents).unwrap();

        assert_eq!(artifact.name, "FundToken");
        assert_eq!(artifact.bytecode, Bytes::from(vec![0x60, 0x80, 0x60, 0x40, 0x52]));
    }

    #[test]
    fn test_parse_foundry_artifact() {
        let contents = r#"{
            "abi": [],
            "bytecode": { "object": "0x6080", "linkReferences": {} }
        }"#;
        let artifact = parse_artifact("CrowdFunding", contents).unwrap();

        assert_eq!(artifact.bytecode, Bytes::from(vec![0x60, 0x80]));
    }

    #[test]
    fn test_reject_empty_bytecode() {
        let res = parse_artifact("IFundToken", r#"{ "bytecode": "0x" }"#);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_reject_malformed_artifact() {
        let res = parse_artifact("FundToken", r#"{ "abi": [] }"#);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_deploy_code_appends_args() {
        let artifact = ContractArtifact {
            name: "CrowdFunding".to_string(),
            bytecode: Bytes::from(vec![0x60, 0x80]),
        };

        assert_eq!(artifact.deploy_code(&[]), Bytes::from(vec![0x60, 0x80]));
        assert_eq!(
            artifact.deploy_code(&[0x01, 0x02]),
            Bytes::from(vec![0x60, 0x80, 0x01, 0x02])
        );
    }

    #[test]
    fn test_load_from_both_layouts() {
        let root = tempfile::tempdir().unwrap();

        let hardhat_dir = root.path().join("contracts").join("FundToken.sol");
        fs::create_dir_all(&hardhat_dir).unwrap();
        fs::write(hardhat_dir.join("FundToken.json"), r#"{ "bytecode": "0x01" }"#).unwrap();

        let foundry_dir = root.path().join("CrowdFunding.sol");
        fs::create_dir_all(&foundry_dir).unwrap();
        fs::write(
            foundry_dir.join("CrowdFunding.json"),
            r#"{ "bytecode": { "object": "0x02" } }"#,
        )
        .unwrap();

        let artifacts = load_crowdfunding_artifacts(root.path()).unwrap();
        assert_eq!(artifacts.fund_token.bytecode, Bytes::from(vec![0x01]));
        assert_eq!(artifacts.crowdfunding.bytecode, Bytes::from(vec![0x02]));
    }

    /// Write an artifact with the given bytecode at `root/<relative path>`
    fn write_artifact(root: &Path, relative: &str, bytecode: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!(r#"{{ "bytecode": "{bytecode}" }}"#)).unwrap();
    }

    #[test]
    fn test_load_from_nested_source_dir() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(
            root.path(),
            "contracts/token/FundToken.sol/FundToken.json",
            "0x03",
        );

        let artifact = load_artifact(root.path(), "FundToken").unwrap();
        assert_eq!(artifact.bytecode, Bytes::from(vec![0x03]));
    }

    #[test]
    fn test_load_from_differently_named_source() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(
            root.path(),
            "contracts/Crowdfunding.sol/CrowdFunding.json",
            "0x04",
        );

        let artifact = load_artifact(root.path(), "CrowdFunding").unwrap();
        assert_eq!(artifact.bytecode, Bytes::from(vec![0x04]));
    }

    #[test]
    fn test_skips_debug_and_build_info_files() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(root.path(), "contracts/FundToken.sol/FundToken.json", "0x05");
        write_artifact(root.path(), "contracts/FundToken.sol/FundToken.dbg.json", "0x06");
        write_artifact(root.path(), "build-info/FundToken.sol/FundToken.json", "0x07");

        let artifact = load_artifact(root.path(), "FundToken").unwrap();
        assert_eq!(artifact.bytecode, Bytes::from(vec![0x05]));
    }

    #[test]
    fn test_ignores_json_outside_source_dirs() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(root.path(), "FundToken.json", "0x08");

        let res = load_artifact(root.path(), "FundToken");
        assert!(matches!(res, Err(ScriptError::ReadArtifact(_))));
    }

    #[test]
    fn test_ambiguous_artifact() {
        let root = tempfile::tempdir().unwrap();
        write_artifact(root.path(), "contracts/a/FundToken.sol/FundToken.json", "0x01");
        write_artifact(root.path(), "contracts/b/FundToken.sol/FundToken.json", "0x02");

        let res = load_artifact(root.path(), "FundToken");
        assert!(matches!(res, Err(ScriptError::AmbiguousArtifact(_))));
    }

    #[test]
    fn test_missing_root() {
        let root = tempfile::tempdir().unwrap();
        let res = load_artifact(&root.path().join("missing"), "FundToken");
        assert!(matches!(res, Err(ScriptError::ReadArtifact(_))));
    }

    #[test]
    fn test_missing_artifact() {
        let root = tempfile::tempdir().unwrap();
        let res = load_artifact(root.path(), "FundToken");
        assert!(matches!(res, Err(ScriptError::ReadArtifact(_))));
    }
}
