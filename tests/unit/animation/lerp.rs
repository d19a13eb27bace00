use super::*;

#[test]
fn f64_lerp_hits_endpoints() {
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 0.0), 2.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 1.0), 4.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &4.0, 0.5), 3.0);
}

#[test]
fn vec2_lerp_is_componentwise() {
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 0.0), 0.5);
    assert_eq!(v, Vec2::new(5.0, 5.0));
}

#[test]
fn tween_holds_outside_window() {
    let t = Tween::over(1.0, 0.0, 0.0, 0.5);
    assert_eq!(t.sample(-1.0), 1.0);
    assert_eq!(t.sample(0.25), 0.5);
    assert_eq!(t.sample(0.5), 0.0);
    assert_eq!(t.sample(0.9), 0.0);
}

#[test]
fn full_tween_spans_unit_range() {
    let t = Tween::full(0.0, 360.0);
    assert_eq!(t.sample(0.5), 180.0);
    assert_eq!(t.window, (0.0, 1.0));
}
