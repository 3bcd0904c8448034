// Platform-specific code module

pub mod procfs;
pub mod uname;

pub use procfs::{read_buffers_bytes, read_cpu_times, CpuTimes};
pub use uname::{kernel_identity, KernelIdentity};
