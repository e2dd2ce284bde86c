//! Repair of the release-velocity jump at the table's tension boundary.
//!
//! No-tension EOS tables leave a spurious discontinuity in the integrated
//! release velocity at very low pressure. The profile is scanned from the
//! peak downward and from column 1 upward; an adjacent pair is anomalous when
//! it differs by more than twice the value at the scanned index. The first
//! hit of each scan bounds one jump region, and every value strictly inside
//! is replaced by the mean of the two boundary values.
//!
//! This is best-effort smoothing of one known artifact. Profiles with a
//! single step (no interior points) or whose scans cross are left alone.

/// Outcome of a jump scan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JumpRepair {
    /// First anomaly found scanning down from the peak (upper side of the jump).
    pub upper: Option<usize>,
    /// First anomaly found scanning up from column 1 (lower side of the jump).
    pub lower: Option<usize>,
    /// Velocity written over the interior of the jump, if any was flattened.
    pub level_km_s: Option<f64>,
}

impl JumpRepair {
    pub fn flattened(&self) -> bool {
        self.level_km_s.is_some()
    }
}

fn is_jump(base: f64, neighbour: f64) -> bool {
    (neighbour - base).abs() > 2.0 * base
}

/// Repair `velocity[0..=peak_index]` in place. Column 0 always ends equal to
/// column 1.
pub fn repair_jumps(velocity: &mut [f64], peak_index: usize) -> JumpRepair {
    let mut report = JumpRepair::default();
    if velocity.len() < 2 {
        return report;
    }
    let peak = peak_index.min(velocity.len() - 1);

    report.upper = (1..=peak).rev().find(|&j| is_jump(velocity[j], velocity[j - 1]));
    report.lower = (1..peak).find(|&i| is_jump(velocity[i], velocity[i + 1]));

    if let (Some(lower), Some(upper)) = (report.lower, report.upper) {
        if upper > lower + 1 {
            let level = 0.5 * (velocity[lower] + velocity[upper]);
            velocity[lower + 1..upper].fill(level);
            report.level_km_s = Some(level);
            tracing::warn!(lower, upper, level_km_s = level, "flattened release velocity jump");
        }
    }

    velocity[0] = velocity[1];
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_is_flattened() {
        let mut v = vec![0.0, 9.0, 9.0, 80.0, 90.0, 8.0, 7.0, 6.0];
        let report = repair_jumps(&mut v, 7);
        assert_eq!(report.lower, Some(2));
        assert_eq!(report.upper, Some(5));
        assert_eq!(report.level_km_s, Some(8.5));
        assert_eq!(v, vec![9.0, 9.0, 9.0, 8.5, 8.5, 8.0, 7.0, 6.0]);
    }

    #[test]
    fn smooth_profile_unchanged_apart_from_column_zero() {
        let mut v = vec![0.0, 12.0, 11.0, 10.5, 10.0];
        let report = repair_jumps(&mut v, 4);
        assert!(!report.flattened());
        assert_eq!(v, vec![12.0, 12.0, 11.0, 10.5, 10.0]);
    }

    #[test]
    fn single_step_has_no_interior() {
        let mut v = vec![1.0, 1.0, 1.0, 10.0, 10.0];
        let report = repair_jumps(&mut v, 4);
        assert_eq!(report.lower, Some(2));
        assert!(!report.flattened());
        assert_eq!(v, vec![1.0, 1.0, 1.0, 10.0, 10.0]);
    }

    #[test]
    fn peak_index_limits_scan() {
        let mut v = vec![5.0, 5.0, 5.0, 5.0, 90.0];
        let report = repair_jumps(&mut v, 3);
        assert_eq!(report, JumpRepair::default());
        assert_eq!(v[4], 90.0);
    }

    #[test]
    fn short_input() {
        let mut v = vec![3.0];
        assert_eq!(repair_jumps(&mut v, 0), JumpRepair::default());
        assert_eq!(v, vec![3.0]);
    }
}
