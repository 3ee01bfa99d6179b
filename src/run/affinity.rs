//! Advisory processor affinity
//!
//! The mask is applied to the calling thread before the search starts, so
//! worker threads spawned afterwards inherit it. Failure is never fatal; the
//! coordinator logs it and carries on.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AffinityError {
    #[error("affinity mask {mask} selects none of the {available} available processors")]
    NoProcessor { mask: AffinityMask, available: usize },

    #[error("processor affinity is not supported on this platform")]
    Unsupported,

    #[error("failed to set processor affinity: {0}")]
    Os(#[from] std::io::Error),
}

/// Bitmask of processors, bit `n` selecting processor `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinityMask(u64);

impl AffinityMask {
    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Processor indices selected by the mask, limited to `available`.
    pub fn cpus(&self, available: usize) -> Vec<usize> {
        (0..available.min(64))
            .filter(|cpu| self.0 & (1 << cpu) != 0)
            .collect()
    }
}

impl std::fmt::Display for AffinityMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl std::str::FromStr for AffinityMask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse::<u64>(),
        };
        parsed
            .map(AffinityMask)
            .map_err(|e| format!("Invalid affinity mask '{}': {}", s, e))
    }
}

/// Restrict the current thread to the processors in `mask`.
///
/// Returns the processor indices that were applied.
pub fn apply(mask: AffinityMask) -> Result<Vec<usize>, AffinityError> {
    let available = num_cpus::get();
    let cpus = mask.cpus(available);
    if cpus.is_empty() {
        return Err(AffinityError::NoProcessor { mask, available });
    }
    set_thread_affinity(&cpus)?;
    Ok(cpus)
}

#[cfg(target_os = "linux")]
fn set_thread_affinity(cpus: &[usize]) -> Result<(), AffinityError> {
    // SAFETY: cpu_set_t is plain data; CPU_ZERO/CPU_SET only touch the local set
    // and sched_setaffinity reads it for the duration of the call.
    let result = unsafe {
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        for &cpu in cpus {
            libc::CPU_SET(cpu, &mut set);
        }
        libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
    };
    if result != 0 {
        return Err(std::io::Error::last_os_error().into());
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn set_thread_affinity(_cpus: &[usize]) -> Result<(), AffinityError> {
    Err(AffinityError::Unsupported)
}
