//! Typed access to individual request parameters.
//!
//! Numeric getters keep "present but unusable" apart from zero: a handler
//! validating `limit=abc` must be able to tell it from `limit=0`.

use super::Vars;
use std::str::FromStr;

/// Outcome of reading a numeric parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    /// The key is not present.
    Missing,
    /// The key is present but its text does not parse.
    Invalid(String),
}

impl<T> Parsed<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Parsed::Value(v) => Some(v),
            Parsed::Missing | Parsed::Invalid(_) => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Parsed::Value(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    vars: &'a Vars,
}

impl<'a> Params<'a> {
    pub fn new(vars: &'a Vars) -> Self {
        Self { vars }
    }

    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Integer parameter; negative values clamp to 0.
    pub fn non_negative_integer(&self, key: &str) -> Parsed<i64> {
        self.parse::<i64>(key).map_value(|n| n.max(0))
    }

    /// Float parameter; negative values and NaN clamp to 0.0.
    pub fn non_negative_float(&self, key: &str) -> Parsed<f64> {
        self.parse::<f64>(key)
            .map_value(|n| if n >= 0.0 { n } else { 0.0 })
    }

    fn parse<T: FromStr>(&self, key: &str) -> Parsed<T> {
        match self.vars.get(key) {
            None => Parsed::Missing,
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(v) => Parsed::Value(v),
                Err(_) => Parsed::Invalid(raw.clone()),
            },
        }
    }
}

impl<T> Parsed<T> {
    fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Value(v) => Parsed::Value(f(v)),
            Parsed::Missing => Parsed::Missing,
            Parsed::Invalid(raw) => Parsed::Invalid(raw),
        }
    }
}
