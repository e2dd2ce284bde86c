//! Isentropic release and vapor-plume expansion timeline.
//!
//! Provides:
//! - Shock-state location on the Hugoniot and the matching isentrope
//! - Release (particle) velocity from the simple-wave Riemann integral
//! - Repair of the velocity jump left by the table's tension boundary
//! - Spherical plume kinematics from the shock state to the triple point
//!
//! Stages run strictly in that order; [`run_release`] drives all of them and
//! stops on the first error.

pub mod error;
pub mod interp;
pub mod kinematics;
pub mod locate;
pub mod pipeline;
pub mod release;
pub mod repair;

pub use error::{ReleaseError, ReleaseResult};
pub use interp::LinearInterpolant;
pub use kinematics::{TimeProfile, TimeSample, build_time_profile, triple_point_index};
pub use locate::{
    ShockState, ShockSummary, locate_shock_state, nearest_bracketed_index, peak_pressure_index,
};
pub use pipeline::{
    ReleaseParams, ReleaseRun, ReleaseStage, SILICATE_TRIPLE_POINT_PA, StageEvent, run_release,
    run_release_with_progress,
};
pub use release::{ReleaseProfile, compute_release_velocities};
pub use repair::{JumpRepair, repair_jumps};
