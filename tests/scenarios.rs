use scratchpad::curve::intersect::{intersect_lines, Intersection};
use scratchpad::curve::tangent::tangents;
use scratchpad::interpolation::history::MIDDLE;
use scratchpad::interpolation::sampler::SAMPLES_PER_SEGMENT;
use scratchpad::utils::color::channels_from_bytes;
use scratchpad::utils::vector::{midpoint, Vec2};
use scratchpad::{ColorError, Interpolator, Settings};

#[test]
fn diagonal_stroke_yields_a_smooth_segment() {
    let mut interpolator = Interpolator::default();
    assert!(interpolator.feed_sample(0.0, 0.0, false).is_empty());
    assert!(interpolator.feed_sample(1.0, 1.0, false).is_empty());
    let path = interpolator.feed_sample(2.0, 2.0, false);

    assert_eq!(path.len(), SAMPLES_PER_SEGMENT);
    assert_eq!((path[0].x, path[0].y), (0.0, 0.0));
    let last = path[SAMPLES_PER_SEGMENT - 1];
    assert!((last.x - 1.0).abs() < 1e-2);
    assert!((last.y - 1.0).abs() < 1e-2);
    for pair in path.windows(2) {
        assert!(pair[1].x > pair[0].x);
        assert!(pair[1].y > pair[0].y);
    }
}

#[test]
fn middle_velocity_is_the_central_difference() {
    let mut interpolator = Interpolator::default();
    interpolator.feed_sample(0.0, 0.0, true);
    interpolator.feed_sample(1.0, 1.0, true);
    interpolator.feed_sample(2.0, 2.0, true);

    let middle = interpolator.history().slot(MIDDLE).unwrap();
    assert_eq!(middle.x.velocity, Some(1.0));
    assert_eq!(middle.y.velocity, Some(1.0));
}

#[test]
fn every_ready_feed_emits_eleven_points() {
    let mut interpolator = Interpolator::default();
    let samples = [
        (12.0, 40.0),
        (30.0, 44.0),
        (61.0, 52.0),
        (60.0, 90.0),
        (20.0, 120.0),
        (20.0, 120.0),
        (300.0, -40.0),
    ];
    for (i, &(x, y)) in samples.iter().enumerate() {
        let path = interpolator.feed_sample(x, y, true);
        if i < 2 {
            assert!(path.is_empty());
        } else {
            assert_eq!(path.len(), SAMPLES_PER_SEGMENT);
        }
    }
}

#[test]
fn corner_tangent_leans_diagonal() {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
    ];
    let t = tangents(&points);
    assert_eq!(t.len(), 3);
    for v in &t {
        assert!((v.length() - 1.0).abs() < 1e-9);
    }
    let diagonal = Vec2::new(1.0, 1.0).normalized().unwrap();
    assert!(t[1].dot(diagonal) > t[0].dot(diagonal));
    assert!(t[1].dot(diagonal) > t[2].dot(diagonal));
}

#[test]
fn tangents_are_unit_for_distinct_points() {
    let points: Vec<Vec2> = (0..20)
        .map(|i| {
            let t = i as f64 * 0.4;
            Vec2::new(50.0 * t.cos() + i as f64, 30.0 * t.sin())
        })
        .collect();
    let t = tangents(&points);
    assert_eq!(t.len(), points.len());
    for v in &t {
        assert!((v.length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn palette_blue_bytes_become_floats() {
    let floats = channels_from_bytes(&[0, 3, 126]).unwrap();
    assert_eq!(floats.len(), 3);
    assert!(floats[0].abs() < 1e-6);
    assert!((floats[1] - 0.0118).abs() < 1e-3);
    assert!((floats[2] - 0.494).abs() < 1e-3);
}

#[test]
fn out_of_range_byte_is_invalid() {
    assert!(matches!(
        channels_from_bytes(&[256, 0, 0]),
        Err(ColorError::OutOfRange { channel: 0, value: 256 })
    ));
}

#[test]
fn coincident_anchors_fall_back_to_the_shared_point() {
    let p = Vec2::new(42.0, -7.0);
    let outcome = intersect_lines(p, p, p, p);
    assert_eq!(outcome, Intersection::NoSolution);
    assert_eq!(outcome.point_or(midpoint(p, p)), p);
}

#[test]
fn parallel_tangents_fall_back_to_the_midpoint() {
    let a = Vec2::new(0.0, 0.0);
    let c = Vec2::new(10.0, 4.0);
    let dir = Vec2::new(1.0, 0.0);
    let outcome = intersect_lines(a, a + dir, c, c + dir);
    assert_eq!(outcome, Intersection::NoSolution);
    assert_eq!(outcome.point_or(midpoint(a, c)), Vec2::new(5.0, 2.0));
}

#[test]
fn settings_file_configures_the_pen() {
    let settings = Settings::from_toml_str(
        r#"
        [pen]
        color = [255, 109, 50]
        outline_scale = 2.5
        "#,
    )
    .unwrap();
    let sheet = scratchpad::app::sheet::SheetModel::from_settings(&settings).unwrap();
    assert_eq!(sheet.pen().color, scratchpad::utils::color::Color::ORANGE);
}
