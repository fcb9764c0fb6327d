//! End-to-end temporal grid change scenarios.

use approx::assert_relative_eq;
use chrono::NaiveDateTime;
use hydrogrid_geom::IdentityTransform;
use hydrogrid_process::{
    temporal_grid_change, GridProcessConfig, Observation, ProcessError, TimeWindow,
};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

/// Ten point measurements spaced ~10 km apart, each worth 50 in January and
/// 60 in February, on the default 5 km national grid: the comparison must
/// report exactly ten cells, each with change +10.
#[test]
fn ten_stations_report_plus_ten_each() {
    let config = GridProcessConfig::default();
    let mut observations = Vec::new();
    for i in 0..10 {
        // Station i sits in the middle of its own 5 km cell, 10 km apart.
        let x = config.origin_x + i as f64 * 10_000.0 + 2_500.0;
        let y = config.origin_y + 2_500.0;
        observations.push(Observation::point(x, y, 50.0, at("2024-01-15T12:00:00")));
        observations.push(Observation::point(x, y, 60.0, at("2024-02-15T12:00:00")));
    }

    let window1 = TimeWindow::parse("2024-01-01T00:00:00", "2024-01-31T23:59:59").unwrap();
    let window2 = TimeWindow::parse("2024-02-01T00:00:00", "2024-02-29T23:59:59").unwrap();

    let result = temporal_grid_change(
        &observations,
        &window1,
        &window2,
        &config,
        Box::new(IdentityTransform),
        None,
    )
    .unwrap();

    assert_eq!(result.crs, config.output_crs);
    assert_eq!(result.records.len(), 10);
    for record in &result.records {
        assert_relative_eq!(record.change, 10.0, epsilon = 0.001);
    }
}

/// Shuffling the observation order must not change the result.
#[test]
fn observation_order_does_not_matter() {
    let config = GridProcessConfig {
        cell_size: 1000.0,
        origin_x: 0.0,
        origin_y: 0.0,
        ..GridProcessConfig::default()
    };
    let window1 = TimeWindow::parse("2024-01-01T00:00:00", "2024-01-31T23:59:59").unwrap();
    let window2 = TimeWindow::parse("2024-02-01T00:00:00", "2024-02-29T23:59:59").unwrap();

    let forward = vec![
        Observation::point(500.0, 500.0, 10.0, at("2024-01-02T00:00:00")),
        Observation::point(600.0, 600.0, 30.0, at("2024-01-03T00:00:00")),
        Observation::point(1500.0, 500.0, 5.0, at("2024-01-04T00:00:00")),
        Observation::point(500.0, 500.0, 40.0, at("2024-02-02T00:00:00")),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let run = |obs: &[Observation]| {
        temporal_grid_change(
            obs,
            &window1,
            &window2,
            &config,
            Box::new(IdentityTransform),
            None,
        )
        .unwrap()
        .records
    };
    let a = run(&forward);
    let b = run(&reversed);

    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.iter().zip(&b) {
        assert_eq!(ra.index, rb.index);
        assert_relative_eq!(ra.change, rb.change);
    }
}

/// An invalid window never reaches the engines: it is impossible to call
/// the process without a successfully constructed `TimeWindow`.
#[test]
fn invalid_windows_are_rejected_at_the_boundary() {
    // Start after end.
    assert!(matches!(
        TimeWindow::parse("2024-02-01T00:00:00", "2024-01-01T00:00:00"),
        Err(ProcessError::InvertedWindow { .. })
    ));
    // Start equal to end.
    assert!(matches!(
        TimeWindow::parse("2024-01-01T00:00:00", "2024-01-01T00:00:00"),
        Err(ProcessError::EmptyWindow { .. })
    ));
    // Unparseable timestamp.
    assert!(matches!(
        TimeWindow::parse("01/01/2024", "2024-01-02T00:00:00"),
        Err(ProcessError::BadTimestamp { .. })
    ));
}
