use crate::{VpError, VpResult};

/// Floating point type used throughout the pipeline
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> VpResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VpError::NonFinite { what, value: v })
    }
}

/// Check that every value in a slice is finite, reporting the first offender.
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> VpResult<()> {
    for &v in values {
        ensure_finite(v, what)?;
    }
    Ok(())
}

/// Direction of a monotonic sequence, or `None` if it turns back on itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Monotonic {
    Increasing,
    Decreasing,
    Constant,
}

pub fn monotonic_direction(values: &[Real]) -> Option<Monotonic> {
    let mut up = false;
    let mut down = false;
    for w in values.windows(2) {
        if w[1] > w[0] {
            up = true;
        } else if w[1] < w[0] {
            down = true;
        }
    }
    match (up, down) {
        (true, true) => None,
        (true, false) => Some(Monotonic::Increasing),
        (false, true) => Some(Monotonic::Decreasing),
        (false, false) => Some(Monotonic::Constant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_all_finite_reports_infinity() {
        assert!(ensure_all_finite(&[1.0, 2.0], "ok").is_ok());
        let err = ensure_all_finite(&[1.0, Real::INFINITY], "row").unwrap_err();
        assert!(matches!(err, VpError::NonFinite { what: "row", .. }));
    }

    #[test]
    fn monotonic_direction_cases() {
        assert_eq!(
            monotonic_direction(&[1.0, 2.0, 2.0, 3.0]),
            Some(Monotonic::Increasing)
        );
        assert_eq!(
            monotonic_direction(&[3.0, 1.0, 0.5]),
            Some(Monotonic::Decreasing)
        );
        assert_eq!(monotonic_direction(&[4.0]), Some(Monotonic::Constant));
        assert_eq!(monotonic_direction(&[1.0, 3.0, 2.0]), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sorted_sequences_are_monotonic(mut v in prop::collection::vec(-1e6f64..1e6, 1..40)) {
            v.sort_by(|a, b| a.total_cmp(b));
            prop_assert_ne!(monotonic_direction(&v), None);
            prop_assert_ne!(monotonic_direction(&v), Some(Monotonic::Decreasing));
            v.reverse();
            prop_assert_ne!(monotonic_direction(&v), Some(Monotonic::Increasing));
        }
    }
}
