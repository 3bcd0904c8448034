//! Per-tab view model.
//!
//! Each formatter maps a [`MetricsSnapshot`] to the table shown in its tab.
//! Formatters only read their argument, so the same snapshot always yields
//! the same table.

use crate::core::navigation::Tab;
use crate::core::system_monitor::MetricsSnapshot;

use super::formatters::{format_gb, format_mb, format_percent};

const PROPERTY_COLUMNS: [&str; 2] = ["Propriedade", "Valor"];

/// Titled two-column table of `(label, value)` rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub columns: [&'static str; 2],
    pub rows: Vec<(String, String)>,
}

impl Table {
    fn new(title: &str, columns: [&'static str; 2]) -> Self {
        Self {
            title: title.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: &str, value: impl Into<String>) -> Self {
        self.rows.push((label.to_string(), value.into()));
        self
    }

    /// Value of the first row labelled `label`
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Content of a tab: a table, or a message when the data is unavailable
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Table(Table),
    Error(String),
}

impl TabContent {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            TabContent::Table(table) => Some(table),
            TabContent::Error(_) => None,
        }
    }
}

/// Format the content of `tab`
pub fn format_tab(tab: Tab, snapshot: &MetricsSnapshot) -> TabContent {
    match tab {
        Tab::System => format_system_info(snapshot),
        Tab::Memory => format_memory_info(snapshot),
        Tab::Cpu => format_cpu_info(snapshot),
        Tab::Disk => format_disk_info(snapshot),
        Tab::Network => format_network_info(snapshot),
        Tab::Temperature => format_temperature_info(snapshot),
    }
}

pub fn format_system_info(snapshot: &MetricsSnapshot) -> TabContent {
    TabContent::Table(
        Table::new("Informações do Sistema", PROPERTY_COLUMNS)
            .row("Sistema", snapshot.system_name.as_str())
            .row("Versão", snapshot.system_version.as_str())
            .row("Arquitetura", snapshot.system_arch.as_str()),
    )
}

pub fn format_memory_info(snapshot: &MetricsSnapshot) -> TabContent {
    TabContent::Table(
        Table::new("Monitoramento de Memória", PROPERTY_COLUMNS)
            .row("Total", format_gb(snapshot.mem_total_bytes))
            .row("Disponível", format_gb(snapshot.mem_available_bytes))
            .row("Usado", format_gb(snapshot.mem_used_bytes))
            .row("Percentual", format_percent(snapshot.mem_percent))
            .row("Utilizado por Buffers", format_gb(snapshot.mem_buffers_bytes)),
    )
}

pub fn format_cpu_info(snapshot: &MetricsSnapshot) -> TabContent {
    TabContent::Table(
        Table::new("Monitoramento de CPU", PROPERTY_COLUMNS)
            .row("Uso de CPU", format_percent(snapshot.cpu_percent))
            .row("Frequência", format!("{:.2} MHz", snapshot.cpu_freq_mhz))
            .row("Núcleos físicos", snapshot.cpu_cores_physical.to_string())
            .row("Núcleos lógicos", snapshot.cpu_cores_logical.to_string())
            .row("Tempo de usuário", format!("{:.2} s", snapshot.cpu_time_user_s))
            .row("Tempo de sistema", format!("{:.2} s", snapshot.cpu_time_system_s)),
    )
}

pub fn format_disk_info(snapshot: &MetricsSnapshot) -> TabContent {
    TabContent::Table(
        Table::new("Monitoramento de Disco", PROPERTY_COLUMNS)
            .row("Total", format_gb(snapshot.disk_total_bytes))
            .row("Usado", format_gb(snapshot.disk_used_bytes))
            .row("Livre", format_gb(snapshot.disk_free_bytes))
            .row("Leituras", format_gb(snapshot.disk_read_bytes))
            .row("Escritas", format_gb(snapshot.disk_write_bytes))
            .row("Percentual", format_percent(snapshot.disk_percent)),
    )
}

pub fn format_network_info(snapshot: &MetricsSnapshot) -> TabContent {
    TabContent::Table(
        Table::new("Monitoramento de Rede", PROPERTY_COLUMNS)
            .row("Bytes Enviados", format_mb(snapshot.net_bytes_sent))
            .row("Bytes Recebidos", format_mb(snapshot.net_bytes_recv)),
    )
}

pub fn format_temperature_info(snapshot: &MetricsSnapshot) -> TabContent {
    match snapshot.temperature_c {
        Some(celsius) => TabContent::Table(
            Table::new("Temperatura do Sistema", ["Componente", "Temperatura"])
                .row("CPU", format!("{:.1} °C", celsius)),
        ),
        None => TabContent::Error(
            "Erro ao obter temperaturas: Nenhum sensor de temperatura disponível.".to_string(),
        ),
    }
}
