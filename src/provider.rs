use nix::sys::statvfs::statvfs;
use sysinfo::Disks;
use thiserror::Error;

/// One mounted volume as reported by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub device: String,
    pub mountpoint: String,
}

/// Capacity counters for one mountpoint.
#[derive(Debug, Clone, Copy)]
pub struct Usage {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to list mounted partitions: {0}")]
    List(String),
    #[error("failed to stat {mountpoint}: {source}")]
    Usage {
        mountpoint: String,
        source: nix::Error,
    },
}

/// Platform abstraction over partition listing and usage queries.
///
/// The listing includes every mount the platform reports, virtual and
/// network filesystems included.
pub trait StatsProvider {
    fn partitions(&self) -> Result<Vec<Partition>, ProviderError>;
    fn usage(&self, mountpoint: &str) -> Result<Usage, ProviderError>;
}

/// Live provider: sysinfo for enumeration, statvfs for usage counters.
#[derive(Default)]
pub struct SysinfoProvider;

impl SysinfoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl StatsProvider for SysinfoProvider {
    fn partitions(&self) -> Result<Vec<Partition>, ProviderError> {
        let disks = Disks::new_with_refreshed_list();
        Ok(disks
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mountpoint: disk.mount_point().to_string_lossy().to_string(),
            })
            .collect())
    }

    fn usage(&self, mountpoint: &str) -> Result<Usage, ProviderError> {
        let stat = statvfs(mountpoint).map_err(|source| ProviderError::Usage {
            mountpoint: mountpoint.to_string(),
            source,
        })?;
        // f_frsize is the unit the block counts are expressed in; free space
        // uses the unprivileged count so the numbers line up with df.
        let frag_size = stat.fragment_size() as u64;
        Ok(Usage {
            total_bytes: stat.blocks() as u64 * frag_size,
            free_bytes: stat.blocks_available() as u64 * frag_size,
        })
    }
}
