//! One-dimensional model potentials.
//!
//! Each potential provides the energy `V(x)`, the same energy evaluated at a
//! proposed (not yet committed) bead position, and a local virial-style
//! quantity `T(x)` that the histogram estimator folds into the energy.
//! `T` is not the kinetic energy operator; the pairings below are fixed.
//!
//! | id | potential  | V(x)              | T(x)                   |
//! |----|------------|-------------------|------------------------|
//! | 1  | harmonic   | x²/2              | x²/2                   |
//! | 2  | Morse      | 2(1-e^-x)²/2      | x·4e^-x(1-e^-x)/2      |
//! | 3  | double well| x⁴/4 - x²/2       | x(x³-x)/2              |
//! | 4  | anharmonic | x⁴ + x²/2         | x(4x³-x)/2             |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PimcError;

/// Energy contract every potential fulfils.
pub trait PotentialModel {
    /// Potential energy at a committed bead position.
    fn value(&self, x: f64) -> f64;

    /// Potential energy at a trial position.
    fn trial_value(&self, xt: f64) -> f64 {
        self.value(xt)
    }

    /// Local virial estimator used by the energy histogram.
    fn virial(&self, x: f64) -> f64;
}

/// The closed set of supported potentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "PotentialRepr")]
pub enum Potential {
    Harmonic,
    Morse,
    DoubleWell,
    Anharmonic,
}

impl Potential {
    pub const ALL: [Potential; 4] = [
        Potential::Harmonic,
        Potential::Morse,
        Potential::DoubleWell,
        Potential::Anharmonic,
    ];

    /// Map the numeric selector (1..=4) onto a variant.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Potential::Harmonic),
            2 => Some(Potential::Morse),
            3 => Some(Potential::DoubleWell),
            4 => Some(Potential::Anharmonic),
            _ => None,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Potential::Harmonic => 1,
            Potential::Morse => 2,
            Potential::DoubleWell => 3,
            Potential::Anharmonic => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Potential::Harmonic => "harmonic",
            Potential::Morse => "morse",
            Potential::DoubleWell => "double_well",
            Potential::Anharmonic => "anharmonic",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|p| p.name() == normalized)
    }
}

impl PotentialModel for Potential {
    fn value(&self, x: f64) -> f64 {
        match self {
            Potential::Harmonic => x * x / 2.0,
            Potential::Morse => 2.0 * (1.0 - (-x).exp()).powi(2) / 2.0,
            Potential::DoubleWell => x.powi(4) / 4.0 - x * x / 2.0,
            Potential::Anharmonic => x.powi(4) + x * x / 2.0,
        }
    }

    fn virial(&self, x: f64) -> f64 {
        match self {
            Potential::Harmonic => 0.5 * x * x,
            Potential::Morse => {
                let e = (-x).exp();
                0.5 * x * (4.0 * e * (1.0 - e))
            }
            Potential::DoubleWell => 0.5 * x * (x.powi(3) - x),
            Potential::Anharmonic => 0.5 * x * (4.0 * x.powi(3) - x),
        }
    }
}

impl TryFrom<i64> for Potential {
    type Error = PimcError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Potential::from_id(id).ok_or(PimcError::UnsupportedPotential(id))
    }
}

impl std::str::FromStr for Potential {
    type Err = PimcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) => Potential::try_from(id),
            Err(_) => Potential::from_name(s).ok_or_else(|| PimcError::UnknownPotential(s.to_string())),
        }
    }
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Config files may name the potential or give its numeric id.
#[derive(Deserialize)]
#[serde(untagged)]
enum PotentialRepr {
    Id(i64),
    Name(String),
}

impl TryFrom<PotentialRepr> for Potential {
    type Error = PimcError;

    fn try_from(repr: PotentialRepr) -> Result<Self, Self::Error> {
        match repr {
            PotentialRepr::Id(id) => Potential::try_from(id),
            PotentialRepr::Name(name) => name.parse(),
        }
    }
}

/// `V` by numeric selector; unknown ids give zero.
pub fn v(id: i64, x: f64) -> f64 {
    Potential::from_id(id).map_or(0.0, |p| p.value(x))
}

/// `VTrial` by numeric selector; unknown ids give zero.
pub fn v_trial(id: i64, xt: f64) -> f64 {
    Potential::from_id(id).map_or(0.0, |p| p.trial_value(xt))
}

/// `T` by numeric selector; unknown ids give zero.
pub fn t(id: i64, x: f64) -> f64 {
    Potential::from_id(id).map_or(0.0, |p| p.virial(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_harmonic_values() {
        let p = Potential::Harmonic;
        assert_relative_eq!(p.value(2.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.virial(2.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_morse_values() {
        let p = Potential::Morse;
        assert_relative_eq!(p.value(0.0), 0.0, epsilon = 1e-12);
        let e = (-1.0f64).exp();
        assert_relative_eq!(p.value(1.0), (1.0 - e).powi(2), epsilon = 1e-12);
        assert_relative_eq!(p.virial(1.0), 2.0 * e * (1.0 - e), epsilon = 1e-12);
    }

    #[test]
    fn test_double_well_values() {
        let p = Potential::DoubleWell;
        // minima at x = ±1
        assert_relative_eq!(p.value(1.0), -0.25, epsilon = 1e-12);
        assert_relative_eq!(p.value(-1.0), -0.25, epsilon = 1e-12);
        assert_relative_eq!(p.virial(2.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anharmonic_values() {
        let p = Potential::Anharmonic;
        assert_relative_eq!(p.value(1.0), 1.5, epsilon = 1e-12);
        assert_relative_eq!(p.virial(1.0), 1.5, epsilon = 1e-12);
        assert_relative_eq!(p.virial(-1.0), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_trial_value_matches_value() {
        for p in Potential::ALL {
            for &x in &[-2.5, -0.3, 0.0, 0.7, 3.1] {
                assert_eq!(p.trial_value(x), p.value(x));
            }
        }
    }

    #[test]
    fn test_id_dispatch_matches_variants() {
        for p in Potential::ALL {
            assert_eq!(Potential::from_id(p.id()), Some(p));
            assert_eq!(v(p.id(), 1.3), p.value(1.3));
            assert_eq!(v_trial(p.id(), -0.4), p.trial_value(-0.4));
            assert_eq!(t(p.id(), 0.9), p.virial(0.9));
        }
    }

    #[test]
    fn test_unknown_id_is_zero() {
        for id in [0, 5, -1, 42] {
            for &x in &[-3.0, 0.5, 10.0] {
                assert_eq!(v(id, x), 0.0);
                assert_eq!(v_trial(id, x), 0.0);
                assert_eq!(t(id, x), 0.0);
            }
        }
        assert!(matches!(Potential::try_from(0i64), Err(PimcError::UnsupportedPotential(0))));
    }

    #[test]
    fn test_parse_names_and_ids() {
        assert_eq!("double-well".parse::<Potential>().unwrap(), Potential::DoubleWell);
        assert_eq!("Morse".parse::<Potential>().unwrap(), Potential::Morse);
        assert_eq!("4".parse::<Potential>().unwrap(), Potential::Anharmonic);
        assert!("quartic".parse::<Potential>().is_err());
        assert!("7".parse::<Potential>().is_err());
    }
}
