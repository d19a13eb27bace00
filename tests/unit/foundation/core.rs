use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(ScrollProgress::new(-0.5).get(), 0.0);
    assert_eq!(ScrollProgress::new(1.5).get(), 1.0);
    assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::START);
    assert_eq!(ScrollProgress::new(0.25).get(), 0.25);
}

#[test]
fn progress_from_metrics_divides_by_max_scroll() {
    let m = ScrollMetrics {
        offset_y: 500.0,
        scroll_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert_eq!(ScrollProgress::from_metrics(m).get(), 0.25);
}

#[test]
fn unscrollable_document_is_at_start() {
    let m = ScrollMetrics {
        offset_y: 10.0,
        scroll_height: 800.0,
        viewport_height: 900.0,
    };
    assert_eq!(m.max_scroll(), 0.0);
    assert_eq!(ScrollProgress::from_metrics(m), ScrollProgress::START);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(7, 3), 3);
    assert_eq!(page_count(6, 3), 2);
    assert_eq!(page_count(0, 3), 0);
    assert_eq!(page_count(4, 0), 0);
}

#[test]
fn wrap_index_handles_both_directions() {
    assert_eq!(wrap_index(-1, 3), Some(2));
    assert_eq!(wrap_index(3, 3), Some(0));
    assert_eq!(wrap_index(-7, 3), Some(2));
    assert_eq!(wrap_index(10, 4), Some(2));
    assert_eq!(wrap_index(0, 0), None);
}

#[test]
fn css_numbers_fold_negative_zero() {
    assert_eq!(fmt_num(-0.0), "0");
    assert_eq!(fmt_px(-0.0), "0px");
    assert_eq!(fmt_px(-350.0), "-350px");
    assert_eq!(fmt_num(0.5), "0.5");
}

#[test]
fn axis_vector_points_along_axis() {
    assert_eq!(Axis::X.vector(4.0), Vec2::new(4.0, 0.0));
    assert_eq!(Axis::Y.vector(-2.0), Vec2::new(0.0, -2.0));
    assert_eq!(Axis::Y.css_suffix(), "Y");
}
