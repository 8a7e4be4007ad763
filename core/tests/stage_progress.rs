use palm_classic_core::{region_progress, stage_index, ScrollMetrics};

#[test]
fn stage_index_stays_in_bounds() {
    for stages in 1..=8usize {
        for step in 0..=100 {
            let progress = step as f64 / 100.0;
            let index = stage_index(progress, stages);
            assert!(index < stages, "index {index} out of range for {stages}");
        }
    }
}

#[test]
fn stage_index_saturates_at_last_stage() {
    for stages in 1..=8usize {
        assert_eq!(stage_index(1.0, stages), stages - 1);
    }
}

#[test]
fn stage_index_is_monotonic() {
    for stages in [1usize, 2, 4, 7] {
        let mut last = 0;
        for step in 0..=1000 {
            let progress = step as f64 / 1000.0;
            let index = stage_index(progress, stages);
            assert!(index >= last, "regressed at progress {progress}");
            last = index;
        }
    }
}

#[test]
fn stage_index_reaches_every_stage() {
    let stages = 4usize;
    let mut seen = vec![false; stages];
    for step in 0..=1000 {
        seen[stage_index(step as f64 / 1000.0, stages)] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}

#[test]
fn stage_index_clamps_out_of_range_progress() {
    assert_eq!(stage_index(-0.5, 4), 0);
    assert_eq!(stage_index(1.5, 4), 3);
}

#[test]
fn region_progress_clamps_to_unit_interval() {
    assert_eq!(region_progress(-50.0, 0.0, 100.0), 0.0);
    assert_eq!(region_progress(50.0, 0.0, 100.0), 0.5);
    assert_eq!(region_progress(250.0, 0.0, 100.0), 1.0);
    assert_eq!(region_progress(150.0, 100.0, 300.0), 0.25);
}

#[test]
fn zero_extent_region_reports_zero() {
    let progress = region_progress(120.0, 200.0, 200.0);
    assert_eq!(progress, 0.0);
    assert!(!progress.is_nan());
    // Inverted bounds behave the same way.
    assert_eq!(region_progress(120.0, 300.0, 200.0), 0.0);
}

#[test]
fn document_progress_covers_scrollable_extent() {
    let metrics = ScrollMetrics {
        offset: 600.0,
        viewport_height: 800.0,
        content_height: 2_000.0,
    };
    assert_eq!(metrics.document_progress(), 0.5);

    let short = ScrollMetrics {
        offset: 0.0,
        viewport_height: 800.0,
        content_height: 800.0,
    };
    assert_eq!(short.document_progress(), 0.0);
}
