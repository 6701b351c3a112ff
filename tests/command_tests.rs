use image::GenericImageView;
use power_trace_plot::commands::{execute_plot, PlotArgs};
use power_trace_plot::output::read_power_bars;
use power_trace_plot::utils::config::{BAR_FIGURE_SIZE, TRACE_FIGURE_SIZE};
use std::fs;
use std::path::{Path, PathBuf};

const BENCH1: &str = "window,100\ntotal,core,uncore\n3.0,2.0,1.0\n3.5,2.5,1.0\n4.0,3.0,1.0\n";
const BENCH2: &str = "window,100\ntotal,core,uncore\n5.0,4.0,1.0\n5.0,4.0,1.0\n";

fn write_trace(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn png_size(path: &Path) -> (u32, u32) {
    assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
    image::open(path).unwrap().dimensions()
}

#[test]
fn test_end_to_end_two_benchmarks() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("plots");

    let args = PlotArgs {
        power: vec![
            write_trace(input.path(), "bench1.csv", BENCH1),
            write_trace(input.path(), "bench2.csv", BENCH2),
        ],
        dir: out_dir.clone(),
        skip: None,
    };

    let report = execute_plot(args).unwrap();

    assert_eq!(report.benchmarks.len(), 2);
    assert_eq!(report.file_count(), 12);
    for bench in ["bench1", "bench2"] {
        assert!(out_dir.join(format!("{bench}-trace.png")).is_file());
        assert!(out_dir.join(format!("power-bars-{bench}.png")).is_file());
        assert!(out_dir.join(format!("power-bars-{bench}.csv")).is_file());
        for module in ["total", "core", "uncore"] {
            assert!(out_dir.join(module).join(format!("{bench}.png")).is_file());
        }
    }

    let stored = read_power_bars(out_dir.join("power-bars-bench1.csv")).unwrap();
    let names: Vec<&str> = stored.iter().map(|r| r.module.as_str()).collect();
    assert_eq!(names, vec!["total", "core", "uncore"]);
    assert_eq!(stored[0].predicted_power, 3.5);
    assert_eq!(stored[1].predicted_power, 2.5);
}

#[test]
fn test_rendered_pngs_decode() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let args = PlotArgs {
        power: vec![write_trace(input.path(), "bench1.csv", BENCH1)],
        dir: output.path().to_path_buf(),
        skip: None,
    };
    execute_plot(args).unwrap();

    let out_dir = output.path();
    assert_eq!(png_size(&out_dir.join("bench1-trace.png")), TRACE_FIGURE_SIZE);
    assert_eq!(png_size(&out_dir.join("core").join("bench1.png")), TRACE_FIGURE_SIZE);
    assert_eq!(png_size(&out_dir.join("power-bars-bench1.png")), BAR_FIGURE_SIZE);
}

#[test]
fn test_skip_trims_breakdown() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let args = PlotArgs {
        power: vec![write_trace(input.path(), "bench1.csv", BENCH1)],
        dir: output.path().to_path_buf(),
        skip: Some(150),
    };

    execute_plot(args).unwrap();

    let stored = read_power_bars(output.path().join("power-bars-bench1.csv")).unwrap();
    assert_eq!(stored[0].predicted_power, 3.75);
    assert_eq!(stored[1].predicted_power, 2.75);
}

#[test]
fn test_skip_past_end_fails() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let args = PlotArgs {
        power: vec![write_trace(input.path(), "bench1.csv", BENCH1)],
        dir: output.path().to_path_buf(),
        skip: Some(10_000),
    };

    assert!(execute_plot(args).is_err());
}

#[test]
fn test_malformed_trace_aborts_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let args = PlotArgs {
        power: vec![
            write_trace(input.path(), "bad.csv", "cycles,100\ncore\n1\n"),
            write_trace(input.path(), "bench2.csv", BENCH2),
        ],
        dir: output.path().to_path_buf(),
        skip: None,
    };

    let err = execute_plot(args).unwrap_err();

    assert!(format!("{err:#}").contains("window"));
    assert!(!output.path().join("bench2-trace.png").exists());
}
