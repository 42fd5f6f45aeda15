//! Validated coefficients, and conversions from dynamically-typed inputs (text, JSON).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::{Result, SolveError::{self, InvalidArgumentType}}, math::root_set::RootSet, solver::solve};

/// A finite real number.
#[derive(
    Clone, Copy, Debug, PartialEq, PartialOrd,
    Serialize, Deserialize,
    derive_more::Display,
    derive_more::Into,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Coefficient(f64);

impl Coefficient {
    pub fn new(v: f64) -> Result<Self> {
        if v.is_finite() {
            Ok(Coefficient(v))
        } else {
            Err(InvalidArgumentType)
        }
    }

    pub fn v(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Coefficient {
    type Error = SolveError;
    fn try_from(v: f64) -> Result<Self> {
        Coefficient::new(v)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Coefficient {
                fn from(i: $t) -> Self {
                    Coefficient(f64::from(i))
                }
            }
        )*
    };
}

from_int!(i8, u8, i16, u16, i32, u32);

impl FromStr for Coefficient {
    type Err = SolveError;
    fn from_str(s: &str) -> Result<Self> {
        let v: f64 = s.trim().parse().map_err(|_| InvalidArgumentType)?;
        Coefficient::new(v)
    }
}

impl TryFrom<&Value> for Coefficient {
    type Error = SolveError;
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => Coefficient::new(n.as_f64().ok_or(InvalidArgumentType)?),
            _ => Err(InvalidArgumentType),
        }
    }
}

/// The coefficients `a`, `b`, `c` of `a·x² + b·x + c`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: Coefficient,
    pub b: Coefficient,
    pub c: Coefficient,
}

impl Coefficients {
    pub fn parse(a: &str, b: &str, c: &str) -> Result<Self> {
        Ok(Coefficients { a: a.parse()?, b: b.parse()?, c: c.parse()? })
    }

    /// Accepts `[a, b, c]` or `{"a": .., "b": .., "c": ..}`; anything else (including missing or non-numeric
    /// entries) is [`SolveError::InvalidArgumentType`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let [ a, b, c ] = match value {
            Value::Array(vs) => match vs.as_slice() {
                [ a, b, c ] => [ a, b, c ],
                _ => return Err(InvalidArgumentType),
            },
            Value::Object(m) => {
                let get = |k: &str| m.get(k).ok_or(InvalidArgumentType);
                [ get("a")?, get("b")?, get("c")? ]
            },
            _ => return Err(InvalidArgumentType),
        };
        Ok(Coefficients { a: a.try_into()?, b: b.try_into()?, c: c.try_into()? })
    }

    pub fn solve(&self) -> Result<RootSet<f64>> {
        solve(self.a.into(), self.b.into(), self.c.into())
    }
}
