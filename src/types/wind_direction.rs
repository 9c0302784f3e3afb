//! Defines the `WindDirection` enum, mapping the sixteen compass points found in the
//! `wind_direction` column of a weather dataset to typed variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the sixteen points of the compass a day's prevailing wind blew from.
///
/// You can convert the textual abbreviation (e.g., from a CSV column) into this enum
/// using [`WindDirection::from_abbreviation`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl WindDirection {
    /// Attempts to convert a compass abbreviation into a `WindDirection` variant.
    ///
    /// Matching ignores surrounding whitespace and letter case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weather_advisor::WindDirection;
    ///
    /// assert_eq!(WindDirection::from_abbreviation("ene"), Some(WindDirection::ENE));
    /// assert_eq!(WindDirection::from_abbreviation(" SW "), Some(WindDirection::SW));
    /// assert_eq!(WindDirection::from_abbreviation("NORTH"), None);
    /// ```
    pub fn from_abbreviation(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "N" => Some(WindDirection::N),
            "NNE" => Some(WindDirection::NNE),
            "NE" => Some(WindDirection::NE),
            "ENE" => Some(WindDirection::ENE),
            "E" => Some(WindDirection::E),
            "ESE" => Some(WindDirection::ESE),
            "SE" => Some(WindDirection::SE),
            "SSE" => Some(WindDirection::SSE),
            "S" => Some(WindDirection::S),
            "SSW" => Some(WindDirection::SSW),
            "SW" => Some(WindDirection::SW),
            "WSW" => Some(WindDirection::WSW),
            "W" => Some(WindDirection::W),
            "WNW" => Some(WindDirection::WNW),
            "NW" => Some(WindDirection::NW),
            "NNW" => Some(WindDirection::NNW),
            _ => None,
        }
    }

    /// Whether the wind carries an easterly component (NNE round to SSE).
    pub fn is_easterly(self) -> bool {
        matches!(
            self,
            WindDirection::NNE
                | WindDirection::NE
                | WindDirection::ENE
                | WindDirection::E
                | WindDirection::ESE
                | WindDirection::SE
                | WindDirection::SSE
        )
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NNE => "NNE",
            WindDirection::NE => "NE",
            WindDirection::ENE => "ENE",
            WindDirection::E => "E",
            WindDirection::ESE => "ESE",
            WindDirection::SE => "SE",
            WindDirection::SSE => "SSE",
            WindDirection::S => "S",
            WindDirection::SSW => "SSW",
            WindDirection::SW => "SW",
            WindDirection::WSW => "WSW",
            WindDirection::W => "W",
            WindDirection::WNW => "WNW",
            WindDirection::NW => "NW",
            WindDirection::NNW => "NNW",
        }
    }
}

impl Display for WindDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
