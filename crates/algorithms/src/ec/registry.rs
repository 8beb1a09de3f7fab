//! Process-wide catalog of the NIST prime curves
//!
//! The table is built once, on first use, from the literals in
//! `jcurve-params` and is read-only afterwards, so it can be shared across
//! threads without locking.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::curve::Curve;
use crate::error::{Error, Result};
use jcurve_params::nist::{self, CurveConstants};

/// Identifier of a registered curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveId {
    P192,
    P224,
    P256,
    P384,
    P521,
}

impl CurveId {
    /// Every registered curve in increasing size
    pub const ALL: [CurveId; 5] = [
        CurveId::P192,
        CurveId::P224,
        CurveId::P256,
        CurveId::P384,
        CurveId::P521,
    ];

    /// The published constants
    pub fn constants(self) -> &'static CurveConstants {
        match self {
            CurveId::P192 => &nist::NIST_P192,
            CurveId::P224 => &nist::NIST_P224,
            CurveId::P256 => &nist::NIST_P256,
            CurveId::P384 => &nist::NIST_P384,
            CurveId::P521 => &nist::NIST_P521,
        }
    }

    /// NIST name, e.g. `"P-256"`
    pub fn name(self) -> &'static str {
        self.constants().name
    }

    /// Position in [`CurveId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The shared curve instance
    pub fn curve(self) -> Curve {
        curve(self)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Accepts NIST (`P-256`, `P256`), SEC 2 (`secp256r1`), OpenSSH
    /// (`nistp256`) and X9.62 (`prime192v1`, `prime256v1`) names, ignoring case
    fn from_str(name: &str) -> Result<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let id = match lower.as_str() {
            "prime192v1" => Some(CurveId::P192),
            "prime256v1" => Some(CurveId::P256),
            _ => CurveId::ALL.iter().copied().find(|id| {
                let c = id.constants();
                let bits = &c.name[2..];
                lower == c.name.to_ascii_lowercase()
                    || lower == c.sec_name
                    || lower == format!("p{}", bits)
                    || lower == format!("nistp{}", bits)
            }),
        };
        id.ok_or_else(|| Error::UnknownCurve {
            name: name.to_string(),
        })
    }
}

static REGISTRY: Lazy<Vec<Curve>> = Lazy::new(|| {
    CurveId::ALL
        .iter()
        .map(|id| {
            Curve::from_constants(id.constants())
                .expect("published NIST domain parameters are valid")
        })
        .collect()
});

/// The curve registered under `id`
pub fn curve(id: CurveId) -> Curve {
    REGISTRY[id.index()].clone()
}

/// Look a curve up by any accepted name
pub fn by_name(name: &str) -> Result<Curve> {
    name.parse::<CurveId>().map(curve)
}

/// Look a curve up by its position in [`CurveId::ALL`]
pub fn by_index(index: usize) -> Option<Curve> {
    REGISTRY.get(index).cloned()
}

/// Every registered curve
pub fn all() -> &'static [Curve] {
    &REGISTRY
}
