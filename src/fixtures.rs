//! Fixture wallet mnemonics.
//!
//! The e2e suite keeps mnemonics of funded wallets in a JSON document named
//! by `TESTS_E2E_FIXTURES_FILE`, keyed platform -> kind -> type -> word
//! list. The document is parsed into a typed mapping up front so a missing
//! entry fails naming the full key path instead of a bare lookup error.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::{env, fs};

use crate::platform::Platform;

/// Environment variable naming the fixture document.
pub const FIXTURES_FILE_ENV: &str = "TESTS_E2E_FIXTURES_FILE";

/// Fixture wallets hold funds and assets; target wallets are empty
/// counterparts scenarios send to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletKind {
    Fixture,
    Target,
}

impl WalletKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WalletKind::Fixture => "fixture",
            WalletKind::Target => "target",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletType {
    Shelley,
    Shared,
    Icarus,
    Random,
}

impl WalletType {
    pub fn as_str(self) -> &'static str {
        match self {
            WalletType::Shelley => "shelley",
            WalletType::Shared => "shared",
            WalletType::Icarus => "icarus",
            WalletType::Random => "random",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type WalletMap = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>;

/// Parsed fixture document.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureWallets(WalletMap);

impl FixtureWallets {
    /// Load and validate the fixture document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!(
                "fixture file {} does not exist! (Hint: generate the template fixture file \
                 and feed it with mnemonics of wallets with funds and assets)",
                path.display()
            );
        }
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parse fixture document {}", path.display()))
    }

    /// Load the document named by `TESTS_E2E_FIXTURES_FILE`.
    pub fn from_env() -> Result<Self> {
        let path =
            env::var(FIXTURES_FILE_ENV).with_context(|| format!("{FIXTURES_FILE_ENV} not set"))?;
        Self::load(path)
    }

    /// Mnemonic sentence stored at `platform/kind/type`.
    pub fn mnemonics(
        &self,
        platform: Platform,
        kind: WalletKind,
        wallet_type: WalletType,
    ) -> Result<&[String]> {
        let platform_key = platform.fixture_key();
        let kinds = self
            .0
            .get(platform_key)
            .ok_or_else(|| anyhow!("fixture document has no entry for platform {platform_key}"))?;
        let types = kinds
            .get(kind.as_str())
            .ok_or_else(|| anyhow!("fixture document has no entry at {platform_key}/{kind}"))?;
        let words = types.get(wallet_type.as_str()).ok_or_else(|| {
            anyhow!("fixture document has no entry at {platform_key}/{kind}/{wallet_type}")
        })?;
        Ok(words)
    }
}

/// Mnemonics for the requested wallet on the current platform, straight from
/// the configured fixture document.
pub fn fixture_wallet_mnemonics(kind: WalletKind, wallet_type: WalletType) -> Result<Vec<String>> {
    let wallets = FixtureWallets::from_env()?;
    let platform = Platform::current()?;
    Ok(wallets.mnemonics(platform, kind, wallet_type)?.to_vec())
}
