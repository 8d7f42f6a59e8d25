//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. They rely on debug assertions to flag unexpected values while
//! keeping the call-sites ergonomic.

use glam::Vec3;

/// Floor the value and clamp it into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f32) -> i32 {
    let floored = value.floor();
    let clamped = floored.clamp(i32::MIN as f32, i32::MAX as f32);
    clamped as i32
}

/// Asserts in debug builds that every component of `value` is finite.
///
/// NaN or infinite components indicate a broken upstream contract (for
/// example an input behaviour writing garbage acceleration); integration
/// would silently poison every later position, so fail loudly instead.
pub fn debug_assert_finite(value: Vec3, context: &str) {
    debug_assert!(
        value.is_finite(),
        "non-finite {context}: {value:?} entered the simulation"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_truncates_toward_negative_infinity() {
        assert_eq!(floor_to_i32(2.9), 2);
        assert_eq!(floor_to_i32(-0.1), -1);
    }

    #[test]
    fn floor_saturates_out_of_range_values() {
        assert_eq!(floor_to_i32(f32::MAX), i32::MAX);
        assert_eq!(floor_to_i32(f32::MIN), i32::MIN);
    }
}
