//! JSON output for tooling integration
//!
//! When --json-progress is enabled, progress and results are emitted as
//! JSON lines to stdout and all styled output is suppressed.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assets::GeneratedAsset;

/// Last progress emission timestamp (milliseconds since epoch)
static LAST_PROGRESS_MS: AtomicU64 = AtomicU64::new(0);

/// Minimum spacing between two progress lines
const PROGRESS_INTERVAL_MS: u64 = 40;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonMessage {
    /// Progress update
    Progress {
        current: u64,
        total: u64,
        message: String,
    },
    /// An output PNG was written
    AssetWritten {
        target: String,
        path: String,
        width: u32,
        height: u32,
        bytes: u64,
        duration_ms: u128,
    },
    /// Generation aborted
    Failed { error: String },
    /// Final summary
    Summary { written: usize, duration_secs: f64 },
}

impl JsonMessage {
    /// Emit JSON message to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    /// Emit a progress message, throttled to one line per 40ms
    ///
    /// The final step (current == total) is always emitted.
    pub fn progress(current: u64, total: u64, message: impl Into<String>) {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let last_ms = LAST_PROGRESS_MS.load(Ordering::Relaxed);

        if now_ms.saturating_sub(last_ms) >= PROGRESS_INTERVAL_MS || current == total {
            LAST_PROGRESS_MS.store(now_ms, Ordering::Relaxed);
            Self::Progress {
                current,
                total,
                message: message.into(),
            }
            .emit();
        }
    }

    pub fn asset_written(asset: &GeneratedAsset) -> Self {
        Self::AssetWritten {
            target: format!("{:?}", asset.target).to_lowercase(),
            path: asset.path.display().to_string(),
            width: asset.width,
            height: asset.height,
            bytes: asset.bytes,
            duration_ms: asset.duration.as_millis(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn summary(written: usize, duration_secs: f64) -> Self {
        Self::Summary {
            written,
            duration_secs,
        }
    }
}
