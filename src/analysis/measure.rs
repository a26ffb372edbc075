//! Statistical results that may be undefined
//!
//! A [`Measure`] is either a computed value or an explicit `Undefined` marker
//! carrying the reason. Undefined results are never coerced to `0.0` or NaN;
//! in JSON output they serialize as `null`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Why a statistic could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndefinedReason {
    /// Too few samples (e.g. standard deviation of fewer than two values)
    InsufficientData,
    /// One of the inputs has no variance (e.g. correlation with a constant field)
    ZeroVariance,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedReason::InsufficientData => f.write_str("insufficient data"),
            UndefinedReason::ZeroVariance => f.write_str("zero variance"),
        }
    }
}

/// A statistic that is either a value or undefined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Value(f64),
    Undefined(UndefinedReason),
}

impl Measure {
    pub fn insufficient_data() -> Self {
        Measure::Undefined(UndefinedReason::InsufficientData)
    }

    pub fn zero_variance() -> Self {
        Measure::Undefined(UndefinedReason::ZeroVariance)
    }

    /// The value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Measure::Value(v) => Some(*v),
            Measure::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Measure::Value(_))
    }

    /// Apply `f` to a defined value
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Measure::Value(v) => Measure::Value(f(v)),
            undefined => undefined,
        }
    }
}

impl From<Option<f64>> for Measure {
    fn from(value: Option<f64>) -> Self {
        value.map_or_else(Measure::insufficient_data, Measure::Value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Value(v) => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, v),
                None => write!(f, "{}", v),
            },
            Measure::Undefined(reason) => write!(f, "undefined ({})", reason),
        }
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Measure::Value(v) => serializer.serialize_f64(*v),
            Measure::Undefined(_) => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_accessors() {
        assert_eq!(Measure::Value(2.5).value(), Some(2.5));
        assert_eq!(Measure::zero_variance().value(), None);
        assert!(!Measure::insufficient_data().is_defined());
        assert_eq!(Measure::from(None), Measure::insufficient_data());
        assert_eq!(Measure::Value(2.0).map(|v| v * 2.0), Measure::Value(4.0));
        assert_eq!(
            Measure::zero_variance().map(|v| v * 2.0),
            Measure::zero_variance()
        );
    }

    #[test]
    fn test_measure_display() {
        assert_eq!(format!("{:.2}", Measure::Value(1.0 / 3.0)), "0.33");
        assert_eq!(
            Measure::insufficient_data().to_string(),
            "undefined (insufficient data)"
        );
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        assert_eq!(
            serde_json::to_string(&Measure::zero_variance()).unwrap(),
            "null"
        );
        assert_eq!(serde_json::to_string(&Measure::Value(0.5)).unwrap(), "0.5");
    }
}
