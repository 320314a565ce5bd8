use std::fmt;
use std::str::FromStr;

use crate::error::{NimbusError, Result};

/// Satellite family served by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Satellite {
    /// Primary visible/infrared satellite (GOES).
    Goes,
    /// Interim satellite mode (GOESIM).
    GoesIm,
    /// Ground-radar-derived products (SATELITE).
    Satelite,
}

/// Geographic area code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    As,
    Br,
    Co,
    Df,
    N,
    Ne,
    S,
    Se,
}

/// Measurement/product code. Which values the catalog accepts depends on
/// the satellite and area; only the catalog can answer that, so membership
/// is checked by the `capability` module rather than here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    // GOES products
    Iv,
    Tn,
    Va,
    Vi,
    Vp,
    // GOESIM channel
    Ch,
    // SATELITE wind/pressure levels
    P,
    V10,
    V200,
    V500,
    V700,
    V850,
}

impl Satellite {
    pub const ALL: [Satellite; 3] = [Satellite::Goes, Satellite::GoesIm, Satellite::Satelite];

    /// Wire code used in catalog URLs.
    pub fn code(self) -> &'static str {
        match self {
            Satellite::Goes => "GOES",
            Satellite::GoesIm => "GOESIM",
            Satellite::Satelite => "SATELITE",
        }
    }

    /// Parse a wire code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "GOES" => Ok(Satellite::Goes),
            "GOESIM" => Ok(Satellite::GoesIm),
            "SATELITE" => Ok(Satellite::Satelite),
            _ => Err(NimbusError::InvalidSatellite(code.to_string())),
        }
    }

    /// Preferred parameter when the caller does not pick one.
    pub fn default_param(self) -> Param {
        match self {
            Satellite::Goes => Param::Iv,
            Satellite::GoesIm => Param::Ch,
            Satellite::Satelite => Param::P,
        }
    }
}

impl Area {
    pub const ALL: [Area; 8] = [
        Area::As,
        Area::Br,
        Area::Co,
        Area::Df,
        Area::N,
        Area::Ne,
        Area::S,
        Area::Se,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Area::As => "AS",
            Area::Br => "BR",
            Area::Co => "CO",
            Area::Df => "DF",
            Area::N => "N",
            Area::Ne => "NE",
            Area::S => "S",
            Area::Se => "SE",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "AS" => Ok(Area::As),
            "BR" => Ok(Area::Br),
            "CO" => Ok(Area::Co),
            "DF" => Ok(Area::Df),
            "N" => Ok(Area::N),
            "NE" => Ok(Area::Ne),
            "S" => Ok(Area::S),
            "SE" => Ok(Area::Se),
            _ => Err(NimbusError::InvalidArea(code.to_string())),
        }
    }
}

impl Param {
    pub const ALL: [Param; 12] = [
        Param::Iv,
        Param::Tn,
        Param::Va,
        Param::Vi,
        Param::Vp,
        Param::Ch,
        Param::P,
        Param::V10,
        Param::V200,
        Param::V500,
        Param::V700,
        Param::V850,
    ];

    /// Wire code. Wind levels are lowercase on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Param::Iv => "IV",
            Param::Tn => "TN",
            Param::Va => "VA",
            Param::Vi => "VI",
            Param::Vp => "VP",
            Param::Ch => "CH",
            Param::P => "P",
            Param::V10 => "v10",
            Param::V200 => "v200",
            Param::V500 => "v500",
            Param::V700 => "v700",
            Param::V850 => "v850",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "IV" => Ok(Param::Iv),
            "TN" => Ok(Param::Tn),
            "VA" => Ok(Param::Va),
            "VI" => Ok(Param::Vi),
            "VP" => Ok(Param::Vp),
            "CH" => Ok(Param::Ch),
            "P" => Ok(Param::P),
            "V10" => Ok(Param::V10),
            "V200" => Ok(Param::V200),
            "V500" => Ok(Param::V500),
            "V700" => Ok(Param::V700),
            "V850" => Ok(Param::V850),
            _ => Err(NimbusError::InvalidParam(code.to_string())),
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Satellite {
    type Err = NimbusError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl FromStr for Area {
    type Err = NimbusError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl FromStr for Param {
    type Err = NimbusError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
