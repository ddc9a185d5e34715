use approx::assert_relative_eq;
use nalgebra::Vector3;

/// Assert that every component of a force is finite
#[track_caller]
pub fn assert_finite(force: &Vector3<f64>) {
    assert!(force.x.is_finite(), "Force x is not finite: {}", force.x);
    assert!(force.y.is_finite(), "Force y is not finite: {}", force.y);
    assert!(force.z.is_finite(), "Force z is not finite: {}", force.z);
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon, max_relative = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon, max_relative = epsilon);
}
