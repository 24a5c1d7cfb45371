//! Host platform detection.
//!
//! The platform is resolved once and passed explicitly to whatever needs it,
//! instead of being re-sniffed from a platform string on every call.

use anyhow::{bail, Result};
use std::fmt;

/// Operating systems the e2e suite runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    /// Resolve the platform the current process runs on.
    pub fn current() -> Result<Self> {
        if cfg!(target_os = "linux") {
            Ok(Platform::Linux)
        } else if cfg!(target_os = "macos") {
            Ok(Platform::Macos)
        } else if cfg!(target_os = "windows") {
            Ok(Platform::Windows)
        } else {
            bail!("unsupported platform: {}", std::env::consts::OS)
        }
    }

    /// Key under which the fixture document stores this platform's wallets.
    pub fn fixture_key(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
        }
    }

    /// Hydra artifact id for the wallet binary distribution.
    ///
    /// Windows binaries are cross-built on linux, hence the `linux.windows`
    /// prefix.
    pub fn wallet_artifact(self) -> &'static str {
        match self {
            Platform::Linux => "linux.musl.cardano-wallet-linux64",
            Platform::Macos => "macos.intel.cardano-wallet-macos-intel",
            Platform::Windows => "linux.windows.cardano-wallet-win64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fixture_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_resolves_on_supported_targets() {
        // The suite only ever runs on the three supported platforms.
        let platform = Platform::current().unwrap();
        assert!(matches!(
            platform,
            Platform::Linux | Platform::Macos | Platform::Windows
        ));
    }

    #[test]
    fn test_fixture_keys() {
        assert_eq!(Platform::Linux.fixture_key(), "linux");
        assert_eq!(Platform::Macos.fixture_key(), "macos");
        assert_eq!(Platform::Windows.fixture_key(), "windows");
    }

    #[test]
    fn test_wallet_artifacts() {
        assert_eq!(
            Platform::Linux.wallet_artifact(),
            "linux.musl.cardano-wallet-linux64"
        );
        assert_eq!(
            Platform::Windows.wallet_artifact(),
            "linux.windows.cardano-wallet-win64"
        );
    }
}
