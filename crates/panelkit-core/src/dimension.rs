//! Dimension values
//!
//! A size is either a bare number, read as pixels, or a string that already
//! carries its unit ("50%", "12rem", "calc(100vh - 4rem)"). Integers are kept
//! as integers so they render digit for digit.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A size given as pixels or as a pre-formatted CSS length.
///
/// Numbers always render with a `px` suffix; strings render unchanged.
/// Neither form is validated: `NaN`, negatives and odd strings are passed
/// through as-is.
///
/// In config files a TOML integer becomes [`Dimension::Integer`], a float
/// becomes [`Dimension::Pixels`] and a string becomes [`Dimension::Raw`].
#[derive(Clone, Debug, PartialEq)]
pub enum Dimension {
    /// Whole pixel count
    Integer(i128),
    /// Fractional pixel count
    Pixels(f64),
    /// Opaque unit string
    Raw(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Integer(px) => write!(f, "{px}px"),
            Dimension::Pixels(px) => write!(f, "{px}px"),
            Dimension::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Integer(px) => match i64::try_from(*px) {
                Ok(px) => serializer.serialize_i64(px),
                Err(_) => serializer.serialize_str(&px.to_string()),
            },
            Dimension::Pixels(px) => serializer.serialize_f64(*px),
            Dimension::Raw(raw) => serializer.serialize_str(raw),
        }
    }
}

struct DimensionVisitor;

impl Visitor<'_> for DimensionVisitor {
    type Value = Dimension;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a pixel count or a CSS length string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Dimension, E> {
        Ok(Dimension::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Dimension, E> {
        Ok(Dimension::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Dimension, E> {
        Ok(Dimension::Pixels(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Dimension, E> {
        Ok(Dimension::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Dimension, E> {
        Ok(Dimension::Raw(value))
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DimensionVisitor)
    }
}

macro_rules! integer_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Dimension {
                fn from(value: $ty) -> Self {
                    // lossless: every listed type fits in i128
                    Dimension::Integer(value as i128)
                }
            }
        )*
    };
}

integer_from!(i32, i64, u16, u32, u64, usize);

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Pixels(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Raw(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Raw(value)
    }
}

/// Renders a numeric or string size as a CSS value.
///
/// ```
/// use panelkit_core::to_dimension;
///
/// assert_eq!(to_dimension(400), "400px");
/// assert_eq!(to_dimension(12.5), "12.5px");
/// assert_eq!(to_dimension("50%"), "50%");
/// ```
pub fn to_dimension(value: impl Into<Dimension>) -> String {
    value.into().to_string()
}
