use std::{cmp::Ordering, fmt::Display, ops::Add};

use serde::{Deserialize, Serialize};

/// Symbol used for unreachable distances, both when printing and on the wire.
pub const INFINITY_SYMBOL: &str = "inf";

/// Path length in the extended integer domain.
///
/// Every finite value is strictly smaller than `Infinite`, which stands for
/// "unreachable" (or "not reached yet" while an algorithm is running).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Finite(i64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    pub fn finite(&self) -> Option<i64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Infinite => None,
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Ordering::Less,
            (Distance::Infinite, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Infinite, Distance::Infinite) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Saturating: two huge finite lengths must never wrap around into a "shorter" path.
impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Infinite,
        }
    }
}

impl Add<i64> for Distance {
    type Output = Distance;

    fn add(self, rhs: i64) -> Self::Output {
        self + Distance::Finite(rhs)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Infinite => write!(f, "{}", INFINITY_SYMBOL),
        }
    }
}

// Implementing Serialize and Deserialize manually so infinity is a reserved symbol instead of a magic integer

impl Serialize for Distance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        match self {
            Distance::Finite(value) => serializer.serialize_i64(*value),
            Distance::Infinite => serializer.serialize_str(INFINITY_SYMBOL),
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de> {
            deserializer.deserialize_any(DistanceVisitor)
    }
}

struct DistanceVisitor;

impl<'de> serde::de::Visitor<'de> for DistanceVisitor {
    type Value = Distance;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "an integer or the string \"{}\"", INFINITY_SYMBOL)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error {
        Ok(Distance::Finite(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error {
        i64::try_from(v)
            .map(Distance::Finite)
            .map_err(|_| E::custom(format!("distance {} does not fit in i64", v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error {
        if v == INFINITY_SYMBOL {
            Ok(Distance::Infinite)
        } else {
            Err(E::custom(format!("unknown distance symbol: {}", v)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity_is_above_every_finite_value() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-20) < Distance::Finite(0));
        assert_eq!(Distance::Infinite.cmp(&Distance::Infinite), Ordering::Equal);
        assert_eq!(
            Distance::Finite(3).min(Distance::Infinite),
            Distance::Finite(3)
        );
    }

    #[test]
    fn test_addition_absorbs_infinity_and_saturates() {
        assert_eq!(Distance::Infinite + Distance::Finite(5), Distance::Infinite);
        assert_eq!(Distance::Finite(-5) + Distance::Infinite, Distance::Infinite);
        assert_eq!(Distance::Finite(2) + 3, Distance::Finite(5));
        assert_eq!(
            Distance::Finite(i64::MAX) + Distance::Finite(1),
            Distance::Finite(i64::MAX)
        );
        assert_eq!(
            Distance::Finite(i64::MIN) + Distance::Finite(-1),
            Distance::Finite(i64::MIN)
        );
    }

    #[test]
    fn test_serialization_uses_reserved_symbol() {
        let row = vec![Distance::ZERO, Distance::Finite(-4), Distance::Infinite];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[0,-4,"inf"]"#);

        let back: Vec<Distance> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);

        assert!(serde_json::from_str::<Distance>(r#""infinity""#).is_err());
        assert!(serde_json::from_str::<Distance>("18446744073709551615").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::Infinite.to_string(), "inf");
    }
}
