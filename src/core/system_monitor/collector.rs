use std::collections::HashSet;
use std::path::Path;

use sysinfo::{Components, CpuRefreshKind, Disk, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::error::{DashError, Result};
use crate::platform::{self, procfs, KernelIdentity};

use super::metrics::{percent_of, round_percent, MetricsSnapshot};

/// Sensor label prefixes that identify a CPU temperature, in priority order
pub const TEMPERATURE_SENSOR_GROUPS: [&str; 4] = ["acpi_thermal", "acpitz", "k10temp", "coretemp"];

const UNKNOWN: &str = "Desconhecido";

/// Source of metrics snapshots consumed by the render loop.
///
/// Implementations never fail as a whole: a field that cannot be read is
/// degraded to its default value.
pub trait MetricsProvider: Send {
    fn snapshot(&mut self) -> MetricsSnapshot;
}

/// Collects host metrics through sysinfo and `/proc`
pub struct MetricsCollector {
    system: System,
    components: Components,
    disks: Disks,
    networks: Networks,
    /// Fields whose read failure was already reported at warn level
    reported_failures: HashSet<&'static str>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Self {
            system: System::new_with_specifics(refresh_kind),
            components: Components::new_with_refreshed_list(),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            reported_failures: HashSet::new(),
        }
    }

    /// Unwrap a platform read, substituting the default value on failure.
    ///
    /// Each field is reported at warn level once, then at debug level.
    fn degrade<T: Default>(&mut self, field: &'static str, result: Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                if self.reported_failures.insert(field) {
                    log::warn!("Falha ao ler {}: {}", field, e);
                } else {
                    log::debug!("Falha ao ler {}: {}", field, e);
                }
                T::default()
            }
        }
    }

    fn collect_cpu(&mut self, snapshot: &mut MetricsSnapshot) {
        let cpus = self.system.cpus();

        snapshot.cpu_percent = round_percent(self.system.global_cpu_usage() as f64);
        snapshot.cpu_freq_mhz = mean_frequency_mhz(cpus.iter().map(|cpu| cpu.frequency()));
        snapshot.cpu_cores_logical = cpus.len();
        snapshot.cpu_cores_physical = System::physical_core_count().unwrap_or(0);

        let times = procfs::read_cpu_times();
        let times = self.degrade("tempos de CPU", times);
        snapshot.cpu_time_user_s = times.user_s;
        snapshot.cpu_time_system_s = times.system_s;
    }

    fn collect_memory(&mut self, snapshot: &mut MetricsSnapshot) {
        let total = self.system.total_memory();
        let available = self.system.available_memory();

        snapshot.mem_total_bytes = total;
        snapshot.mem_available_bytes = available;
        snapshot.mem_used_bytes = self.system.used_memory();
        snapshot.mem_percent = percent_of(total.saturating_sub(available), total);

        let buffers = procfs::read_buffers_bytes();
        snapshot.mem_buffers_bytes = self.degrade("memória de buffers", buffers);
    }

    fn collect_disk(&mut self, snapshot: &mut MetricsSnapshot) {
        let (read, written) = self.disks.iter().fold((0u64, 0u64), |(read, written), disk| {
            let usage = disk.usage();
            (
                read.saturating_add(usage.total_read_bytes),
                written.saturating_add(usage.total_written_bytes),
            )
        });
        snapshot.disk_read_bytes = read;
        snapshot.disk_write_bytes = written;

        let root = select_root(self.disks.list(), Disk::mount_point)
            .map(|disk| (disk.total_space(), disk.available_space()))
            .ok_or_else(|| DashError::metric_collection("no root filesystem found"));

        let (total, free) = self.degrade("uso do disco", root);
        let used = total.saturating_sub(free);
        snapshot.disk_total_bytes = total;
        snapshot.disk_free_bytes = free;
        snapshot.disk_used_bytes = used;
        snapshot.disk_percent = percent_of(used, total);
    }

    fn collect_network(&self, snapshot: &mut MetricsSnapshot) {
        for data in self.networks.values() {
            snapshot.net_bytes_recv = snapshot.net_bytes_recv.saturating_add(data.total_received());
            snapshot.net_bytes_sent = snapshot.net_bytes_sent.saturating_add(data.total_transmitted());
        }
    }

    /// Kernel name and build string, falling back to sysinfo's OS name/version
    fn collect_identity(&mut self, snapshot: &mut MetricsSnapshot) {
        let identity = platform::kernel_identity();
        let KernelIdentity { sysname, version } = self.degrade("identificação do sistema", identity);

        snapshot.system_name = known_or(sysname, System::name);
        snapshot.system_version = known_or(version, System::os_version);
    }

    fn collect_temperature(&self) -> Option<f64> {
        let readings = self
            .components
            .iter()
            .map(|component| (component.label(), component.temperature()));

        match pick_temperature(readings) {
            Ok(celsius) => Some(celsius),
            Err(e) => {
                log::debug!("{}", e);
                None
            }
        }
    }
}

impl MetricsProvider for MetricsCollector {
    fn snapshot(&mut self) -> MetricsSnapshot {
        self.system.refresh_cpu_all();
        self.system.refresh_memory();
        self.disks.refresh(true);
        self.networks.refresh(true);
        self.components.refresh(true);

        let mut snapshot = MetricsSnapshot {
            temperature_c: self.collect_temperature(),
            system_arch: std::env::consts::ARCH.to_string(),
            ..Default::default()
        };

        self.collect_identity(&mut snapshot);
        self.collect_cpu(&mut snapshot);
        self.collect_memory(&mut snapshot);
        self.collect_disk(&mut snapshot);
        self.collect_network(&mut snapshot);

        snapshot
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// The filesystem mounted at `/`, or the first one on platforms without it
fn select_root<T>(disks: &[T], mount_point: impl Fn(&T) -> &Path) -> Option<&T> {
    disks
        .iter()
        .find(|disk| mount_point(disk) == Path::new("/"))
        .or_else(|| disks.first())
}

/// Mean of the per-core frequencies, 0 when no core reports one
fn mean_frequency_mhz(frequencies: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = frequencies.fold((0u64, 0u64), |(sum, count), mhz| (sum + mhz, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn known_or(value: String, fallback: fn() -> Option<String>) -> String {
    if !value.is_empty() {
        return value;
    }
    fallback().unwrap_or_else(|| UNKNOWN.to_string())
}

/// First reading from a known sensor group.
///
/// Groups are tried in `TEMPERATURE_SENSOR_GROUPS` order; within a group the
/// first sensor with a reading wins.
pub fn pick_temperature<'a, I>(readings: I) -> Result<f64>
where
    I: IntoIterator<Item = (&'a str, Option<f32>)>,
{
    let readings: Vec<(String, f32)> = readings
        .into_iter()
        .filter_map(|(label, celsius)| celsius.map(|c| (label.to_lowercase(), c)))
        .collect();

    TEMPERATURE_SENSOR_GROUPS
        .iter()
        .find_map(|group| {
            readings
                .iter()
                .find(|(label, _)| label.starts_with(group))
                .map(|(_, celsius)| *celsius as f64)
        })
        .ok_or_else(|| DashError::sensor_unavailable("Nenhum sensor de temperatura disponível."))
}
