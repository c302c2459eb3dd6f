use proptest::prelude::*;

use sigview::{DashboardController, OffsetSlider, RawSeries, SeriesRegistry, SourceKind};

fn controller_from(columns: Vec<Vec<f64>>) -> DashboardController {
    let series = columns
        .into_iter()
        .enumerate()
        .map(|(i, values)| RawSeries {
            name: format!("s{i}"),
            kind: SourceKind::Processed,
            values,
        })
        .collect();
    DashboardController::new(SeriesRegistry::register(series), OffsetSlider::default(), true)
}

fn columns() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-5000.0f64..5000.0, 1..40), 1..8)
}

proptest! {
    #[test]
    fn display_shift_is_index_times_offset(cols in columns(), offset in -500.0f64..500.0) {
        let mut c = controller_from(cols);
        c.set_offset(offset);
        let applied = c.stack_offset();
        prop_assert!((applied - offset).abs() <= 5.0);
        prop_assert_eq!(applied % 10.0, 0.0);
        for (i, b) in c.bindings().iter().enumerate() {
            for (d, o) in b.y_display().iter().zip(b.y_original()) {
                let expected = i as f64 * applied;
                prop_assert!((d - o - expected).abs() <= 1e-6 * (1.0 + o.abs() + expected.abs()));
            }
        }
    }

    #[test]
    fn reset_restores_originals_exactly(cols in columns(), offsets in prop::collection::vec(-500.0f64..500.0, 1..6)) {
        let mut c = controller_from(cols);
        for o in offsets {
            c.set_offset(o);
        }
        c.reset();
        prop_assert_eq!(c.stack_offset(), 0.0);
        for b in c.bindings() {
            prop_assert_eq!(b.y_display(), b.y_original());
        }
        // a second reset changes nothing
        prop_assert!(!c.reset());
    }

    #[test]
    fn hover_ignores_offset(cols in columns(), offset in -500.0f64..500.0) {
        let before = controller_from(cols.clone());
        let mut after = controller_from(cols.clone());
        after.set_offset(offset);
        for (i, col) in cols.iter().enumerate() {
            for j in 0..col.len() {
                prop_assert_eq!(after.hover(i, j), before.hover(i, j));
                prop_assert_eq!(after.hover(i, j).map(|h| h.value), Some(col[j]));
            }
        }
    }

    #[test]
    fn toggling_twice_is_identity(cols in columns(), picks in prop::collection::vec(0usize..10, 0..12)) {
        let mut c = controller_from(cols);
        let initial = c.visibility().to_vec();
        for &i in &picks {
            c.toggle_series(i);
        }
        for &i in picks.iter().rev() {
            c.toggle_series(i);
        }
        prop_assert_eq!(c.visibility(), initial.as_slice());
    }
}
