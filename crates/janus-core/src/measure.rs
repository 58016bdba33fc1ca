//! # Numeric Property Values
//!
//! Part geometry arrives from the editor as JSON numbers, sometimes integral
//! (`10`), sometimes not (`10.5`). [`Measure`] keeps the value as `f64` for
//! arithmetic but writes integral values back as JSON integers, so
//! `{"x": 1}` survives a read/write cycle as `{"x": 1}` and not `{"x": 1.0}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A numeric property value (position, size, z-order).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Measure(f64);

impl Measure {
    /// Zero, the default for numeric palette fields.
    pub const ZERO: Measure = Measure(0.0);

    /// Wrap a raw value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Access the raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The value as an integer when it is integral and exactly representable.
    ///
    /// `-0.0` maps to `0`, so a negative zero is written as `0` and reads
    /// back as positive zero.
    fn as_exact_integer(self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Measure {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_exact_integer() {
            Some(i) => write!(f, "{i}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<Measure> for Value {
    fn from(m: Measure) -> Self {
        match m.as_exact_integer() {
            Some(i) => Value::from(i),
            None => Value::from(m.0),
        }
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_exact_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Measure)
    }
}

/// Border radius or width.
///
/// The property editor submits these as CSS strings (`"4px"`), while the
/// palette defaults are plain numbers; both forms are accepted and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderMeasure {
    /// A unitless number, interpreted as pixels by the renderer.
    Number(Measure),
    /// A CSS length such as `"2px"` or `"0.5em"`.
    Css(String),
}

impl BorderMeasure {
    /// The `0` default used when a palette omits the field.
    pub const fn zero() -> Self {
        BorderMeasure::Number(Measure::ZERO)
    }
}

impl From<Measure> for BorderMeasure {
    fn from(m: Measure) -> Self {
        BorderMeasure::Number(m)
    }
}

impl From<&BorderMeasure> for Value {
    fn from(b: &BorderMeasure) -> Self {
        match b {
            BorderMeasure::Number(m) => (*m).into(),
            BorderMeasure::Css(s) => Value::String(s.clone()),
        }
    }
}

impl From<&str> for BorderMeasure {
    fn from(s: &str) -> Self {
        BorderMeasure::Css(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integral_values_serialize_as_integers() {
        assert_eq!(serde_json::to_value(Measure::new(1.0)).unwrap(), json!(1));
        assert_eq!(serde_json::to_value(Measure::new(-20.0)).unwrap(), json!(-20));
    }

    #[test]
    fn fractional_values_serialize_as_floats() {
        assert_eq!(serde_json::to_value(Measure::new(10.5)).unwrap(), json!(10.5));
    }

    #[test]
    fn negative_zero_is_written_as_zero() {
        assert_eq!(serde_json::to_value(Measure::new(-0.0)).unwrap(), json!(0));
    }

    #[test]
    fn huge_values_stay_floats() {
        let v = serde_json::to_value(Measure::new(1e300)).unwrap();
        assert!(v.is_f64());
    }

    #[test]
    fn deserializes_from_integer_and_float() {
        let a: Measure = serde_json::from_value(json!(3)).unwrap();
        let b: Measure = serde_json::from_value(json!(3.25)).unwrap();
        assert_eq!(a.value(), 3.0);
        assert_eq!(b.value(), 3.25);
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(serde_json::from_value::<Measure>(json!("3")).is_err());
    }

    #[test]
    fn display_drops_trailing_fraction() {
        assert_eq!(Measure::new(4.0).to_string(), "4");
        assert_eq!(Measure::new(4.5).to_string(), "4.5");
    }

    #[test]
    fn border_measure_accepts_number_or_css() {
        let n: BorderMeasure = serde_json::from_value(json!(2)).unwrap();
        let s: BorderMeasure = serde_json::from_value(json!("2px")).unwrap();
        assert_eq!(n, BorderMeasure::Number(Measure::new(2.0)));
        assert_eq!(s, BorderMeasure::Css("2px".into()));
        assert_eq!(serde_json::to_value(BorderMeasure::zero()).unwrap(), json!(0));
    }
}
