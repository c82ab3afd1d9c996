// Serializes f64 fields the way a browser client writes JSON numbers:
// integral values carry no fraction, so `10.0` is written as `10`.

use serde::{Serialize, Serializer};

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

struct JsonNumber(f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

pub mod option {
    use super::JsonNumber;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&JsonNumber(*v)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod json_number_tests {
    use rstest::rstest;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "super::serialize")]
        value: f64,
        #[serde(serialize_with = "super::option::serialize")]
        maybe: Option<f64>,
    }

    #[rstest]
    #[case(10.0, Some(3.0), r#"{"value":10,"maybe":3}"#)]
    #[case(-4.0, None, r#"{"value":-4,"maybe":null}"#)]
    #[case(10.5, Some(-1.25), r#"{"value":10.5,"maybe":-1.25}"#)]
    #[case(1e300, None, r#"{"value":1e300,"maybe":null}"#)]
    fn it_should_write_integral_values_without_a_fraction(
        #[case] value: f64,
        #[case] maybe: Option<f64>,
        #[case] expected: &str,
    ) {
        assert_eq!(serde_json::to_string(&Sample { value, maybe }).unwrap(), expected);
    }
}
