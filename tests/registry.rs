use std::fs;

use sigview::config::SourcePaths;
use sigview::{LineKind, RawSeries, SeriesColor, SeriesLoader, SeriesRegistry, SourceKind, PALETTE};

fn raw(name: &str, kind: SourceKind, values: &[f64]) -> RawSeries {
    RawSeries {
        name: name.to_string(),
        kind,
        values: values.to_vec(),
    }
}

fn example_series() -> Vec<RawSeries> {
    vec![
        raw("Raw Input (noisy)", SourceKind::RawInput, &[2048.0, 2000.0]),
        raw("Clean Input", SourceKind::CleanInput, &[2048.0, 2048.0]),
        raw("out1", SourceKind::Processed, &[2040.5, 2010.2]),
    ]
}

#[test]
fn example_registry_assignment() {
    let reg = SeriesRegistry::register(example_series());
    assert_eq!(reg.len(), 3);

    let orders: Vec<usize> = reg.iter().map(|s| s.order).collect();
    assert_eq!(orders, [0, 1, 2]);

    let colors: Vec<SeriesColor> = reg.iter().map(|s| s.look.color).collect();
    assert_eq!(colors, [SeriesColor::BLACK, SeriesColor::ORANGE, PALETTE[0]]);

    let styles: Vec<LineKind> = reg.iter().map(|s| s.look.style).collect();
    assert_eq!(styles, [LineKind::Dashed, LineKind::Dashed, LineKind::Solid]);

    let visible: Vec<bool> = reg.iter().map(|s| s.look.default_visible).collect();
    assert_eq!(visible, [true, true, false]);
}

#[test]
fn empty_series_never_get_an_order() {
    let reg = SeriesRegistry::register(vec![
        raw("Raw Input (noisy)", SourceKind::RawInput, &[]),
        raw("a", SourceKind::Processed, &[1.0]),
        raw("b", SourceKind::Processed, &[]),
        raw("c", SourceKind::Processed, &[2.0]),
    ]);
    let names: Vec<(&str, usize)> = reg.iter().map(|s| (s.name(), s.order)).collect();
    assert_eq!(names, [("a", 0), ("c", 1)]);
    assert_eq!(reg.get(1).unwrap().look.color, PALETTE[1]);
}

#[test]
fn palette_wraps_after_ten_processed_series() {
    let series: Vec<RawSeries> = (0..11)
        .map(|i| raw(&format!("out{i:02}"), SourceKind::Processed, &[i as f64]))
        .collect();
    let reg = SeriesRegistry::register(series);
    assert_eq!(reg.get(10).unwrap().look.color, reg.get(0).unwrap().look.color);
    for i in 1..10 {
        assert_ne!(reg.get(i).unwrap().look.color, reg.get(0).unwrap().look.color);
    }
}

#[test]
fn palette_counts_processed_series_only() {
    // a missing fixed source shifts orders but not processed colors
    let reg = SeriesRegistry::register(vec![
        raw("Clean Input", SourceKind::CleanInput, &[1.0]),
        raw("out1", SourceKind::Processed, &[1.0]),
    ]);
    assert_eq!(reg.get(1).unwrap().order, 1);
    assert_eq!(reg.get(1).unwrap().look.color, PALETTE[0]);
}

#[test]
fn reloading_reproduces_order_and_color() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = SourcePaths {
        raw_input: tmp.path().join("input_data.txt"),
        clean_input: tmp.path().join("input_clean.txt"),
        processed_dir: tmp.path().join("files_in"),
    };
    fs::write(&paths.raw_input, "800\n").unwrap();
    fs::write(&paths.clean_input, "800\n").unwrap();
    fs::create_dir(&paths.processed_dir).unwrap();
    for name in ["zeta.txt", "alpha.txt", "mid.txt", "beta.txt"] {
        fs::write(paths.processed_dir.join(name), "1.0\n").unwrap();
    }

    let loader = SeriesLoader::new(paths);
    let first = SeriesRegistry::register(loader.load().series);
    let second = SeriesRegistry::register(loader.load().series);

    let summary = |r: &SeriesRegistry| -> Vec<(String, usize, &'static str)> {
        r.iter()
            .map(|s| (s.name().to_string(), s.order, s.look.color.token))
            .collect()
    };
    assert_eq!(summary(&first), summary(&second));
    let names: Vec<String> = first.iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names[2..], ["alpha", "beta", "mid", "zeta"]);
}
