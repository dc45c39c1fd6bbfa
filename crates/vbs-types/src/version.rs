use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Totally ordered version identifier.
///
/// Callers spell versions as text (`"0xff"`, `"0x100"`, `"42"`). The text is
/// parsed once into a `u64`; ordering, equality, and hashing all use the
/// numeric value, so `"0xff"`, `"0XFF"` and `"255"` name the same version.
///
/// The base is taken from the prefix:
///
/// | prefix      | base |
/// |-------------|------|
/// | `0x` / `0X` | 16   |
/// | `0o` / `0O` | 8    |
/// | `0b` / `0B` | 2    |
/// | none        | 10   |
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Version(u64);

impl Version {
    /// The smallest version.
    pub const MIN: Version = Version(0);

    /// Create a version from its numeric value.
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// The numeric value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse a textual version identifier.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let invalid = |reason: &str| TypeError::InvalidVersion {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (digits, radix) = split_radix(input);
        if digits.is_empty() {
            return Err(invalid("missing digits"));
        }
        // `from_str_radix` tolerates a leading '+', so check digits ourselves.
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(invalid(&format!("not a base-{radix} number")));
        }
        u64::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|_| invalid("out of range for a 64-bit version"))
    }

    /// Canonical text form: lowercase hex with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }
}

fn split_radix(input: &str) -> (&str, u32) {
    let bytes = input.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (&input[2..], 16),
            b'o' | b'O' => return (&input[2..], 8),
            b'b' | b'B' => return (&input[2..], 2),
            _ => {}
        }
    }
    (input, 10)
}

impl FromStr for Version {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Version({:#x})", self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<u64> for Version {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Version::parse("0xff").unwrap().as_u64(), 255);
        assert_eq!(Version::parse("0x100").unwrap().as_u64(), 256);
        assert_eq!(Version::parse("0XFF").unwrap().as_u64(), 255);
        assert_eq!(Version::parse("0x00").unwrap(), Version::MIN);
    }

    #[test]
    fn parses_other_bases() {
        assert_eq!(Version::parse("255").unwrap().as_u64(), 255);
        assert_eq!(Version::parse("0o17").unwrap().as_u64(), 15);
        assert_eq!(Version::parse("0b101").unwrap().as_u64(), 5);
        assert_eq!(Version::parse("0").unwrap().as_u64(), 0);
        assert_eq!(Version::parse("007").unwrap().as_u64(), 7);
    }

    #[test]
    fn spellings_of_same_number_are_equal() {
        let a: Version = "0xff".parse().unwrap();
        let b: Version = "255".parse().unwrap();
        let c: Version = "0b11111111".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn ordering_is_numeric_not_lexical() {
        let small = Version::parse("0xff").unwrap();
        let large = Version::parse("0x100").unwrap();
        assert!(small < large);
        assert!("0xff" > "0x100");
    }

    #[test]
    fn rejects_empty_and_bare_prefix() {
        for input in ["", "0x", "0b", "0o"] {
            let err = Version::parse(input).unwrap_err();
            assert!(matches!(err, TypeError::InvalidVersion { .. }), "{input:?}");
        }
    }

    #[test]
    fn rejects_bad_digits() {
        for input in ["0xfg", "0b102", "12a", "+5", "-1", "0x+f", " 1", "1_000"] {
            assert!(Version::parse(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(Version::parse("0xffffffffffffffff").is_ok());
        let err = Version::parse("0x10000000000000000").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn display_is_canonical_hex() {
        assert_eq!(Version::from_u64(255).to_string(), "0xff");
        assert_eq!(Version::from_u64(0).to_string(), "0x0");
        assert_eq!(format!("{:?}", Version::from_u64(256)), "Version(0x100)");
    }

    #[test]
    fn serde_uses_text_form() {
        let v = Version::from_u64(0x100);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"0x100\"");
        let back: Version = serde_json::from_str("\"256\"").unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<Version>("\"0xzz\"").is_err());
    }

    proptest! {
        #[test]
        fn display_parses_back(n in any::<u64>()) {
            let v = Version::from_u64(n);
            prop_assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
        }

        #[test]
        fn order_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(Version::from_u64(a).cmp(&Version::from_u64(b)), a.cmp(&b));
        }
    }
}
