//! Counters sysinfo does not expose, read from `/proc` on Linux.
//!
//! Other platforms report `MetricCollection` errors and the collector
//! degrades the affected fields to zero.

use crate::error::{DashError, Result};

/// Cumulative CPU time spent in user and system mode, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuTimes {
    pub user_s: f64,
    pub system_s: f64,
}

/// Read aggregate CPU times since boot
#[cfg(target_os = "linux")]
pub fn read_cpu_times() -> Result<CpuTimes> {
    let stat = std::fs::read_to_string("/proc/stat")?;
    parse_cpu_times(&stat, clock_ticks_per_second())
}

#[cfg(not(target_os = "linux"))]
pub fn read_cpu_times() -> Result<CpuTimes> {
    Err(DashError::metric_collection(
        "CPU times are not supported on this platform",
    ))
}

/// Read the memory used by kernel buffers, in bytes
#[cfg(target_os = "linux")]
pub fn read_buffers_bytes() -> Result<u64> {
    let meminfo = std::fs::read_to_string("/proc/meminfo")?;
    parse_buffers_bytes(&meminfo)
}

#[cfg(not(target_os = "linux"))]
pub fn read_buffers_bytes() -> Result<u64> {
    Err(DashError::metric_collection(
        "Buffer memory is not supported on this platform",
    ))
}

#[cfg(target_os = "linux")]
fn clock_ticks_per_second() -> f64 {
    // SAFETY: sysconf has no preconditions and only reads a constant
    let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks > 0 {
        ticks as f64
    } else {
        100.0
    }
}

/// Parse the aggregate `cpu` line of `/proc/stat`.
///
/// Fields are `user nice system idle ...` in clock ticks; only the `user`
/// and `system` columns are reported.
pub fn parse_cpu_times(stat: &str, ticks_per_second: f64) -> Result<CpuTimes> {
    let line = stat
        .lines()
        .find(|line| line.starts_with("cpu "))
        .ok_or_else(|| DashError::metric_collection("missing aggregate cpu line in /proc/stat"))?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|field| field.parse::<u64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| DashError::metric_collection(format!("invalid /proc/stat field: {}", e)))?;

    if fields.len() < 3 {
        return Err(DashError::metric_collection(
            "aggregate cpu line in /proc/stat is too short",
        ));
    }

    Ok(CpuTimes {
        user_s: fields[0] as f64 / ticks_per_second,
        system_s: fields[2] as f64 / ticks_per_second,
    })
}

/// Parse the `Buffers:` entry of `/proc/meminfo` (reported in kB)
pub fn parse_buffers_bytes(meminfo: &str) -> Result<u64> {
    let line = meminfo
        .lines()
        .find(|line| line.starts_with("Buffers:"))
        .ok_or_else(|| DashError::metric_collection("missing Buffers entry in /proc/meminfo"))?;

    let kib = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| DashError::metric_collection("empty Buffers entry in /proc/meminfo"))?
        .parse::<u64>()
        .map_err(|e| DashError::metric_collection(format!("invalid Buffers value: {}", e)))?;

    Ok(kib * 1024)
}
