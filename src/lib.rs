//! Support helpers for the cardano-wallet end-to-end test suite.
//!
//! Stateless, blocking glue consumed by test scenarios:
//!
//! - **Key/address derivation**: `cardano-address`/`bech32` CLI pipelines
//!   behind the [`derivation::KeyDeriver`] seam
//! - **Fixture resolution**: funded-wallet mnemonics from the document named
//!   by `TESTS_E2E_FIXTURES_FILE`
//! - **Remote resources**: URLs for wallet binaries, node configs and
//!   node-db snapshots, plus a blocking download
//! - **Encodings**: hex, base64, base16 and asset-name conversions
//!
//! Every call is independent; nothing is cached and nothing is retried. A
//! subscriber for the `tracing` output is the consuming harness's business.

pub mod config;
pub mod derivation;
pub mod encoding;
pub mod fixtures;
pub mod net;
pub mod platform;
pub mod shell;

pub use derivation::{
    account_extended_public_key, byron_address, CardanoAddressCli, ChainCode, KeyDeriver,
    WalletStyle,
};
pub use fixtures::{fixture_wallet_mnemonics, FixtureWallets, WalletKind, WalletType};
pub use platform::Platform;
