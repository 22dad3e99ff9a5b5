//! Cubic easing curves applied to segment-local progress.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeyframeError;

/// Remaps linear segment progress `t` in [0,1] onto a smoother curve.
/// Every curve fixes the endpoints (0 -> 0, 1 -> 1) and is monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    #[serde(alias = "ease_in")]
    EaseIn,
    #[serde(alias = "ease_out")]
    EaseOut,
    #[serde(alias = "ease_in_out")]
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Get the configuration name of this curve
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }

    /// Apply the curve to `t`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = KeyframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "linear" => Ok(Self::Linear),
            "easein" => Ok(Self::EaseIn),
            "easeout" => Ok(Self::EaseOut),
            "easeinout" => Ok(Self::EaseInOut),
            _ => Err(KeyframeError::invalid(format!("unknown easing '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing} at 1");
        }
    }

    #[test]
    fn curves_match_their_formulas() {
        assert_eq!(Easing::Linear.apply(0.3), 0.3);
        assert!((Easing::EaseIn.apply(0.5) - 0.125).abs() < 1e-6);
        assert!((Easing::EaseOut.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.25) - 0.0625).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let next = easing.apply(i as f32 / 100.0);
                assert!(next >= prev, "{easing} decreased at step {i}");
                prev = next;
            }
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>().unwrap(), easing);
        }
        assert_eq!("ease_in_out".parse::<Easing>().unwrap(), Easing::EaseInOut);
        assert_eq!("EASE-OUT".parse::<Easing>().unwrap(), Easing::EaseOut);
        assert!("bounce".parse::<Easing>().is_err());
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&Easing::EaseInOut).unwrap();
        assert_eq!(json, "\"easeInOut\"");
        let parsed: Easing = serde_json::from_str("\"ease_out\"").unwrap();
        assert_eq!(parsed, Easing::EaseOut);
    }
}
