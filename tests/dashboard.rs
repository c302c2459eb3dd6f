use sigview::{
    DashboardController, DashboardEvent, OffsetSlider, RawSeries, SeriesRegistry, SourceKind,
};

fn controller() -> DashboardController {
    let series = vec![
        RawSeries {
            name: "Raw Input (noisy)".into(),
            kind: SourceKind::RawInput,
            values: vec![2048.0, 2000.0],
        },
        RawSeries {
            name: "Clean Input".into(),
            kind: SourceKind::CleanInput,
            values: vec![2048.0, 2048.0],
        },
        RawSeries {
            name: "out1".into(),
            kind: SourceKind::Processed,
            values: vec![2040.5, 2010.2],
        },
    ];
    DashboardController::new(SeriesRegistry::register(series), OffsetSlider::default(), true)
}

#[test]
fn initial_state() {
    let c = controller();
    assert_eq!(c.stack_offset(), 0.0);
    assert!(c.legend_visible());
    assert_eq!(c.visibility(), &[true, true, false]);
    for b in c.bindings() {
        assert_eq!(b.y_display(), b.y_original());
        assert_eq!(b.x(), &[0.0, 1.0]);
    }
}

#[test]
fn offset_stacks_every_binding_by_index() {
    let mut c = controller();
    assert!(c.set_offset(100.0));
    let b = c.bindings();
    assert_eq!(b[0].y_display(), &[2048.0, 2000.0]);
    assert_eq!(b[1].y_display(), &[2148.0, 2148.0]);
    // hidden series are stacked too
    assert!(!c.is_visible(2));
    assert_eq!(b[2].y_display(), &[2040.5 + 200.0, 2010.2 + 200.0]);
    assert_eq!(b[2].y_original(), &[2040.5, 2010.2]);
}

#[test]
fn reset_restores_original_values() {
    let mut c = controller();
    c.set_offset(-350.0);
    c.set_offset(480.0);
    assert!(c.dispatch(DashboardEvent::Reset));
    assert_eq!(c.stack_offset(), 0.0);
    for b in c.bindings() {
        assert_eq!(b.y_display(), b.y_original());
    }
    // already at zero: nothing to do
    assert!(!c.reset());
}

#[test]
fn offset_is_clamped_to_slider_range() {
    let mut c = controller();
    c.set_offset(9000.0);
    assert_eq!(c.stack_offset(), 500.0);
    assert_eq!(c.bindings()[1].y_display(), &[2548.0, 2548.0]);
    c.set_offset(-9000.0);
    assert_eq!(c.stack_offset(), -500.0);
}

#[test]
fn legend_clicks_are_independent() {
    let mut c = controller();
    c.set_offset(50.0);
    assert!(c.dispatch(DashboardEvent::ToggleSeries(2)));
    assert!(c.dispatch(DashboardEvent::ToggleSeries(0)));
    assert_eq!(c.visibility(), &[false, true, true]);
    assert_eq!(c.stack_offset(), 50.0);
    assert!(!c.dispatch(DashboardEvent::ToggleSeries(7)));
    c.toggle_series(0);
    assert_eq!(c.visibility(), &[true, true, true]);
}

#[test]
fn legend_toggle_leaves_series_alone() {
    let mut c = controller();
    c.set_offset(20.0);
    c.dispatch(DashboardEvent::ToggleLegend);
    assert!(!c.legend_visible());
    assert_eq!(c.visibility(), &[true, true, false]);
    assert_eq!(c.stack_offset(), 20.0);
    c.toggle_legend();
    assert!(c.legend_visible());
}

#[test]
fn hover_reports_original_value() {
    let mut c = controller();
    c.set_offset(300.0);
    let h = c.hover(2, 1).unwrap();
    assert_eq!(h.series, "out1");
    assert_eq!(h.index, 1);
    assert_eq!(h.value, 2010.2);
    assert_eq!(h.to_string(), "Signal: out1\nIndex: 1\nValue: 2010.2");
    assert!(c.hover(3, 0).is_none());
    assert!(c.hover(0, 2).is_none());
}

#[test]
fn pick_uses_display_position_and_reports_original() {
    let mut c = controller();
    c.set_offset(100.0);
    // series 1 is drawn at 2148 but reports 2048
    let h = c.pick(0.2, 2150.0).unwrap();
    assert_eq!(h.series, "Clean Input");
    assert_eq!(h.index, 0);
    assert_eq!(h.value, 2048.0);
    // hidden series are never picked
    assert_eq!(c.pick(1.0, 2210.2).unwrap().series, "Clean Input");
    c.toggle_series(2);
    assert_eq!(c.pick(1.0, 2210.2).unwrap().series, "out1");
    assert!(c.pick(5.0, 0.0).is_none());
}

#[test]
fn redraw_is_requested_on_change_only() {
    let mut c = controller();
    assert!(c.take_redraw());
    assert!(!c.take_redraw());
    c.set_offset(0.0);
    assert!(!c.take_redraw());
    c.set_offset(10.0);
    assert!(c.take_redraw());
    c.toggle_series(0);
    assert!(c.take_redraw());
}

#[test]
fn empty_dashboard_is_valid() {
    let mut c = DashboardController::new(SeriesRegistry::register(vec![]), OffsetSlider::default(), true);
    assert!(c.bindings().is_empty());
    assert!(c.set_offset(40.0));
    assert!(c.pick(0.0, 0.0).is_none());
}

#[test]
fn offset_snaps_to_slider_step() {
    let mut c = controller();
    assert!(c.set_offset(123.0));
    assert_eq!(c.stack_offset(), 120.0);
    assert_eq!(c.bindings()[1].y_display(), &[2168.0, 2168.0]);
    // rounds to the value already set
    assert!(!c.set_offset(118.0));
    assert!(c.dispatch(DashboardEvent::SetOffset(-4.0)));
    assert_eq!(c.stack_offset(), 0.0);
}

#[test]
fn pick_left_of_the_data_reports_nothing() {
    let c = controller();
    assert!(c.pick(-40.0, 2048.0).is_none());
    assert!(c.pick(-0.6, 2048.0).is_none());
    assert_eq!(c.pick(-0.4, 2048.0).unwrap().index, 0);
}

#[test]
fn missing_samples_are_never_inspected() {
    let series = vec![
        RawSeries {
            name: "gappy".into(),
            kind: SourceKind::Processed,
            values: vec![1.0, f64::NAN, 3.0],
        },
        RawSeries {
            name: "full".into(),
            kind: SourceKind::Processed,
            values: vec![100.0, 100.0, 100.0],
        },
    ];
    let mut c = DashboardController::new(SeriesRegistry::register(series), OffsetSlider::default(), true);
    c.toggle_series(0);
    c.toggle_series(1);
    assert!(c.hover(0, 1).is_none());
    assert_eq!(c.hover(0, 2).unwrap().value, 3.0);
    // the NaN sample does not win the nearest-series search
    assert_eq!(c.pick(1.0, 0.0).unwrap().series, "full");

    c.set_offset(10.0);
    assert!(c.bindings()[0].y_display()[1].is_nan());
    assert_eq!(
        c.bindings()[0].display_segments(),
        vec![vec![[0.0, 1.0]], vec![[2.0, 3.0]]]
    );
}
