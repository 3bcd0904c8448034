//! Kernel identity as reported by `uname(2)`.

use crate::error::{DashError, Result};

/// Operating system name and kernel build string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KernelIdentity {
    /// e.g. `Linux`, `Darwin`
    pub sysname: String,
    /// e.g. `#1 SMP PREEMPT_DYNAMIC ...`
    pub version: String,
}

#[cfg(unix)]
pub fn kernel_identity() -> Result<KernelIdentity> {
    // SAFETY: utsname is plain old data; uname only writes into the buffer
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return Err(DashError::from(std::io::Error::last_os_error()));
    }

    Ok(KernelIdentity {
        sysname: c_field(&uts.sysname),
        version: c_field(&uts.version),
    })
}

#[cfg(not(unix))]
pub fn kernel_identity() -> Result<KernelIdentity> {
    Err(DashError::metric_collection(
        "uname is not available on this platform",
    ))
}

/// NUL-terminated `utsname` field to a `String`
#[cfg(unix)]
fn c_field(raw: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = raw.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
    String::from_utf8_lossy(&bytes).trim().to_string()
}
