/// Panics unless `a` and `b` are within `tolerance` of each other. A NaN on
/// either side never counts as close.
pub fn assert_eq_approx(a: f64, b: f64, tolerance: f64) {
    if a.is_nan() || b.is_nan() || (a - b).abs() > tolerance {
        panic!(
            "assertion failed: `(left ~= right)`\n  left: `{:?}`,\n right: `{:?}`",
            a, b
        );
    }
}
