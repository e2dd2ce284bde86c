//! vp-eos: equation-of-state data for vaporplume.
//!
//! Provides:
//! - `IsentropeTable`: pressure, temperature, energy and sound speed on an
//!   (entropy row × density column) grid
//! - `HugoniotCurve`: the shock states reachable from the initial state
//! - Text loaders that convert material-model (CGS) columns to SI/GPa
//!
//! # Units after loading
//!
//! | quantity            | unit      |
//! |---------------------|-----------|
//! | pressure            | GPa       |
//! | density             | kg/m³     |
//! | temperature         | K         |
//! | entropy             | J/(kg·K)  |
//! | internal energy     | J/kg      |
//! | sound / particle / shock velocity | km/s |

pub mod error;
pub mod hugoniot;
pub mod isentrope;
pub mod loader;

pub use error::{EosError, EosResult};
pub use hugoniot::{HugoniotCurve, HugoniotPoint};
pub use isentrope::{IsentropeGrid, IsentropeRow, IsentropeTable};
pub use loader::{
    DEFAULT_HUGONIOT_HEADER_ROWS, DEFAULT_ISENTROPE_HEADER_ROWS, load_hugoniot, load_isentrope,
    parse_hugoniot, parse_isentrope,
};
