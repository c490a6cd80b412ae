use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::provider::{ProviderError, StatsProvider};

const BYTES_PER_GB: f64 = 1e9;

/// Platform family used by the device normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Windows,
    Unix,
}

impl PlatformKind {
    pub fn current() -> Self {
        if cfg!(windows) {
            PlatformKind::Windows
        } else {
            PlatformKind::Unix
        }
    }
}

/// One distinct physical disk in the final report.
///
/// Sizes are decimal gigabytes (bytes / 1e9), matching what disk vendors
/// print on the label rather than GiB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskReport {
    pub device: String,
    pub mountpoint: String,
    pub total_gb: f64,
    pub free_gb: f64,
    pub free_pct: f64,
}

/// Collapse partitions on the same physical disk to one identifier.
///
/// Unix device names drop their trailing run of digits (`/dev/sda1` ->
/// `/dev/sda`); Windows drive letters are uppercased. A heuristic, not a
/// device-topology lookup.
pub fn normalize_device(raw: &str, platform: PlatformKind) -> String {
    match platform {
        PlatformKind::Windows => raw.to_uppercase(),
        PlatformKind::Unix => raw
            .trim_end_matches(|c: char| c.is_ascii_digit())
            .to_string(),
    }
}

/// Walk every mounted partition, deduplicate by normalized device and gather
/// usage statistics.
///
/// A listing failure aborts the run. A usage failure for a single mountpoint
/// (permission denied, stale network mount, pseudo filesystem) drops that
/// partition from the report without failing the rest, so an empty report is
/// a valid outcome.
pub fn collect(provider: &impl StatsProvider) -> Result<Vec<DiskReport>, ProviderError> {
    collect_for(provider, PlatformKind::current())
}

fn collect_for(
    provider: &impl StatsProvider,
    platform: PlatformKind,
) -> Result<Vec<DiskReport>, ProviderError> {
    let partitions = provider.partitions()?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut reports = Vec::new();

    for partition in partitions {
        let device = normalize_device(&partition.device, platform);
        if seen.contains(&device) {
            continue;
        }

        let Ok(usage) = provider.usage(&partition.mountpoint) else {
            continue;
        };
        // Pseudo filesystems report zero capacity; a percentage over zero
        // total is meaningless, so they are dropped like failed queries.
        if usage.total_bytes == 0 {
            continue;
        }

        reports.push(DiskReport {
            device: device.clone(),
            mountpoint: partition.mountpoint,
            total_gb: usage.total_bytes as f64 / BYTES_PER_GB,
            free_gb: usage.free_bytes as f64 / BYTES_PER_GB,
            free_pct: usage.free_bytes as f64 / usage.total_bytes as f64 * 100.0,
        });
        seen.insert(device);
    }

    Ok(reports)
}
