use sysdash::core::{MetricsSnapshot, Tab};
use sysdash::ui::system_formatters::{
    format_cpu_info, format_memory_info, format_tab, format_temperature_info,
};
use sysdash::ui::TabContent;

const GIB: u64 = 1024 * 1024 * 1024;

#[test]
fn test_memory_table_rows() {
    let snapshot = MetricsSnapshot {
        mem_total_bytes: 16 * GIB,
        mem_available_bytes: 8 * GIB,
        mem_used_bytes: 7 * GIB,
        mem_percent: 50.0,
        mem_buffers_bytes: GIB,
        ..Default::default()
    };

    let content = format_memory_info(&snapshot);
    let table = content.as_table().expect("memory tab is always a table");

    assert_eq!(table.title, "Monitoramento de Memória");
    let expected = vec![
        ("Total", "16.00 GB"),
        ("Disponível", "8.00 GB"),
        ("Usado", "7.00 GB"),
        ("Percentual", "50%"),
        ("Utilizado por Buffers", "1.00 GB"),
    ];
    let rows: Vec<(&str, &str)> = table
        .rows
        .iter()
        .map(|(label, value)| (label.as_str(), value.as_str()))
        .collect();
    assert_eq!(rows, expected);
}

#[test]
fn test_cpu_table_rows() {
    let snapshot = MetricsSnapshot {
        cpu_percent: 30.0,
        cpu_freq_mhz: 3000.0,
        cpu_cores_physical: 4,
        cpu_cores_logical: 8,
        cpu_time_user_s: 10.5,
        cpu_time_system_s: 5.25,
        ..Default::default()
    };

    let content = format_cpu_info(&snapshot);
    let table = content.as_table().expect("cpu tab is always a table");

    assert_eq!(table.value("Uso de CPU"), Some("30%"));
    assert_eq!(table.value("Frequência"), Some("3000.00 MHz"));
    assert_eq!(table.value("Núcleos físicos"), Some("4"));
    assert_eq!(table.value("Núcleos lógicos"), Some("8"));
    assert_eq!(table.value("Tempo de usuário"), Some("10.50 s"));
    assert_eq!(table.value("Tempo de sistema"), Some("5.25 s"));
}

#[test]
fn test_missing_temperature_sensor_is_an_error_value() {
    let snapshot = MetricsSnapshot {
        temperature_c: None,
        ..Default::default()
    };

    match format_temperature_info(&snapshot) {
        TabContent::Error(message) => {
            assert!(message.starts_with("Erro ao obter temperaturas"));
        }
        TabContent::Table(table) => panic!("expected an error, got {:?}", table),
    }
}

#[test]
fn test_formatters_are_pure() {
    let snapshot = MetricsSnapshot {
        cpu_percent: 12.3,
        mem_total_bytes: 4 * GIB,
        disk_percent: 61.7,
        net_bytes_sent: 123_456_789,
        temperature_c: Some(51.25),
        system_name: "Linux".to_string(),
        ..Default::default()
    };

    for tab in Tab::ALL {
        let first = format_tab(tab, &snapshot);
        for _ in 0..3 {
            assert_eq!(format_tab(tab, &snapshot), first, "tab {:?} changed", tab);
        }
    }
}
