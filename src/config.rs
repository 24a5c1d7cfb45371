//! Node configuration resolution and the protocol-magic reader.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Environment variable naming the node-configuration directory root.
pub const NODE_CONFIGS_ENV: &str = "CARDANO_NODE_CONFIGS";

/// Resolve a dot-prefixed path against the current working directory;
/// anything else passes through untouched.
pub fn absolute_path(path: &str) -> Result<PathBuf> {
    match path.strip_prefix('.') {
        Some(rest) => {
            let cwd = env::current_dir().context("resolve current working directory")?;
            Ok(cwd.join(rest.trim_start_matches('/')))
        }
        None => Ok(PathBuf::from(path)),
    }
}

/// Node-configuration root from `CARDANO_NODE_CONFIGS`.
pub fn node_configs_root() -> Result<PathBuf> {
    let raw = env::var(NODE_CONFIGS_ENV).with_context(|| format!("{NODE_CONFIGS_ENV} not set"))?;
    absolute_path(&raw)
}

/// Protocol magic of `env_name`, read from its `byron-genesis.json` under
/// the configured node-config root.
pub fn protocol_magic(env_name: &str) -> Result<u32> {
    protocol_magic_at(&node_configs_root()?, env_name)
}

/// Same as [`protocol_magic`] with an explicit config root.
pub fn protocol_magic_at(configs_root: &Path, env_name: &str) -> Result<u32> {
    let genesis_path = configs_root.join(env_name).join("byron-genesis.json");
    let raw =
        fs::read_to_string(&genesis_path).with_context(|| format!("read {}", genesis_path.display()))?;
    let genesis: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse {}", genesis_path.display()))?;

    let magic = genesis
        .get("protocolConsts")
        .and_then(|consts| consts.get("protocolMagic"))
        .and_then(|magic| magic.as_u64())
        .ok_or_else(|| {
            anyhow!(
                "protocolConsts.protocolMagic not found in {}",
                genesis_path.display()
            )
        })?;

    u32::try_from(magic).with_context(|| format!("protocol magic {magic} out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_resolves_dot_prefix() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(absolute_path("./configs").unwrap(), cwd.join("configs"));
        assert_eq!(absolute_path(".").unwrap(), cwd);
    }

    #[test]
    fn test_absolute_path_passes_through_plain_paths() {
        assert_eq!(
            absolute_path("/opt/cardano/configs").unwrap(),
            PathBuf::from("/opt/cardano/configs")
        );
    }

    #[test]
    fn test_protocol_magic_at_extracts_constant() {
        let root = tempfile::tempdir().unwrap();
        let env_dir = root.path().join("preprod");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(
            env_dir.join("byron-genesis.json"),
            r#"{"protocolConsts": {"k": 2160, "protocolMagic": 1}}"#,
        )
        .unwrap();

        assert_eq!(protocol_magic_at(root.path(), "preprod").unwrap(), 1);
    }

    #[test]
    fn test_protocol_magic_at_missing_field() {
        let root = tempfile::tempdir().unwrap();
        let env_dir = root.path().join("mainnet");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(env_dir.join("byron-genesis.json"), r#"{"protocolConsts": {}}"#).unwrap();

        let err = protocol_magic_at(root.path(), "mainnet").unwrap_err();
        assert!(format!("{err}").contains("protocolConsts.protocolMagic"));
    }

    #[test]
    fn test_protocol_magic_at_missing_file() {
        let root = tempfile::tempdir().unwrap();
        assert!(protocol_magic_at(root.path(), "preview").is_err());
    }
}
