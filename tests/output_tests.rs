use power_trace_plot::aggregator::power_breakdown;
use power_trace_plot::output::{read_power_bars, store_power_bars};
use power_trace_plot::parser::{ModuleRole, ModuleSeries};
use pretty_assertions::assert_eq;

#[test]
fn test_breakdown_csv_round_trip() {
    let modules = vec![
        ModuleSeries::new("total", ModuleRole::Aggregate, vec![10.0, 11.0, 12.5]),
        ModuleSeries::new("zebra", ModuleRole::Component, vec![4.0, 4.333, 5.0]),
        ModuleSeries::new("apple", ModuleRole::Component, vec![6.0, 6.667, 7.5]),
    ];
    let rows = power_breakdown(&modules).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("power-bars-bench.csv");
    store_power_bars(&path, &rows).unwrap();

    let stored = read_power_bars(&path).unwrap();
    let names: Vec<&str> = stored.iter().map(|r| r.module.as_str()).collect();
    assert_eq!(names, vec!["total", "apple", "zebra"]);

    for stored_row in &stored {
        let row = rows.iter().find(|r| r.module == stored_row.module).unwrap();
        assert!((row.mean_power - stored_row.predicted_power).abs() <= 0.005 + 1e-9);
    }
}

#[test]
fn test_breakdown_csv_header() {
    let modules = vec![ModuleSeries::new("core", ModuleRole::Component, vec![1.0, 2.0])];
    let rows = power_breakdown(&modules).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/power-bars-bench.csv");
    store_power_bars(&path, &rows).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Module,Predicted Power\r\ncore,1.50\r\n");
}
