//! Remote resource locator: URLs for wallet binaries, node configs and
//! node-db snapshots, plus a blocking download.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::platform::Platform;

/// Hydra URL of the latest wallet binary distribution.
///
/// With `pr`, points at that pull request's build instead of mainline.
pub fn latest_binary_url(platform: Platform, pr: Option<&str>) -> String {
    let artifact = platform.wallet_artifact();
    match pr {
        Some(pr) => format!(
            "https://hydra.iohk.io/job/Cardano/cardano-wallet-pr-{pr}/{artifact}/latest/download-by-type/file/binary-dist"
        ),
        None => format!(
            "https://hydra.iohk.io/job/Cardano/cardano-wallet/{artifact}/latest/download-by-type/file/binary-dist"
        ),
    }
}

/// Base URL of the latest node configs for `env`.
///
/// Recognized environments live in the per-environment directories of the
/// Cardano book; anything else falls back to the legacy per-file Hydra
/// prefix.
pub fn latest_configs_base_url(env: &str) -> String {
    match env {
        "mainnet" | "testnet" | "preview" | "preprod" | "shelley-qa" => {
            format!("https://book.world.dev.cardano.org/environments/{env}/")
        }
        _ if env.contains("vasil") => {
            format!("https://book.world.dev.cardano.org/environments/{env}/")
        }
        _ => format!(
            "https://hydra.iohk.io/job/Cardano/iohk-nix/cardano-deployment/latest/download/1/{env}-"
        ),
    }
}

/// URL of the latest node-db snapshot, updated at the end of every epoch.
pub fn latest_node_db_url(env: &str) -> Result<&'static str> {
    match env {
        "testnet" => {
            Ok("https://updates-cardano-testnet.s3.amazonaws.com/cardano-node-state/db-testnet.tar.gz")
        }
        "mainnet" => {
            Ok("https://update-cardano-mainnet.iohk.io/cardano-node-state/db-mainnet.tar.gz")
        }
        other => bail!("unsupported env {other:?}, supported are: 'mainnet' or 'testnet'"),
    }
}

/// Blocking GET writing the raw body to `file`, or to the URL's last path
/// segment in the working directory.
///
/// No retry, no checksum verification. Non-2xx responses are not
/// special-cased: the body is written and the status logged either way; only
/// transport-level failures are errors.
pub fn download(url: &str, file: Option<&Path>) -> Result<PathBuf> {
    let target = match file {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(
            url.rsplit('/')
                .next()
                .filter(|segment| !segment.is_empty())
                .unwrap_or(url),
        ),
    };

    let response = match ureq::Agent::new().get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(e) => return Err(anyhow!("failed to GET {}: {}", url, e)),
    };

    let status = response.status();
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .with_context(|| format!("read response body from {url}"))?;
    fs::write(&target, &body).with_context(|| format!("write {}", target.display()))?;
    info!("{} -> {}", url, status);

    Ok(target)
}
