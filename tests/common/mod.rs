use approx::assert_relative_eq;
use proxorbit::Point;

#[allow(dead_code)]
pub fn assert_point_close(actual: &Point, expected: (f64, f64, f64), epsilon: f64) {
    assert_relative_eq!(actual.x(), expected.0, epsilon = epsilon);
    assert_relative_eq!(actual.y(), expected.1, epsilon = epsilon);
    assert_relative_eq!(actual.z(), expected.2, epsilon = epsilon);
}
