//! Band metadata attribute values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single metadata attribute attached to a band.
///
/// Attributes are the open key/value metadata a band carries alongside
/// its grid: free-text provenance fields, mask category code lists and
/// category code definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Free-text attribute (e.g. source collection, mask type)
    Text(String),
    /// A set of category codes (e.g. the codes a mask treats as invalid)
    Codes(Vec<u8>),
    /// Mapping from category code to its meaning
    Flags(#[serde(with = "flags_wire")] BTreeMap<u8, String>),
}

/// Wire format for `Flags`: string map keys.
///
/// JSON object keys are strings, and untagged deserialization buffers
/// keys as strings without coercing them back to integers, so the code
/// keys are written as their decimal strings and parsed on the way in.
mod flags_wire {
    use serde::de::{Error as DeError, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::collections::BTreeMap;
    use std::fmt;

    pub fn serialize<S>(flags: &BTreeMap<u8, String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(flags.len()))?;
        for (code, label) in flags {
            map.serialize_entry(&code.to_string(), label)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u8, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagsVisitor;

        impl<'de> Visitor<'de> for FlagsVisitor {
            type Value = BTreeMap<u8, String>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from category code to meaning")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut flags = BTreeMap::new();
                while let Some((key, label)) = access.next_entry::<String, String>()? {
                    let code = key
                        .parse::<u8>()
                        .map_err(|_| A::Error::custom(format!("invalid category code `{}`", key)))?;
                    flags.insert(code, label);
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_map(FlagsVisitor)
    }
}

impl AttrValue {
    /// The text payload, if this is a `Text` attribute
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The code list, if this is a `Codes` attribute
    pub fn as_codes(&self) -> Option<&[u8]> {
        match self {
            AttrValue::Codes(c) => Some(c),
            _ => None,
        }
    }

    /// The code definitions, if this is a `Flags` attribute
    pub fn as_flags(&self) -> Option<&BTreeMap<u8, String>> {
        match self {
            AttrValue::Flags(f) => Some(f),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(codes: Vec<u8>) -> Self {
        AttrValue::Codes(codes)
    }
}

impl From<BTreeMap<u8, String>> for AttrValue {
    fn from(flags: BTreeMap<u8, String>) -> Self {
        AttrValue::Flags(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        let text = AttrValue::from("s2a");
        assert_eq!(text.as_text(), Some("s2a"));
        assert!(text.as_codes().is_none());

        let codes = AttrValue::from(vec![3u8, 8, 9]);
        assert_eq!(codes.as_codes(), Some(&[3u8, 8, 9][..]));

        let mut defs = BTreeMap::new();
        defs.insert(4u8, "vegetation".to_string());
        let flags = AttrValue::from(defs.clone());
        assert_eq!(flags.as_flags(), Some(&defs));
    }

    #[test]
    fn untagged_serde_round_trip() {
        let mut defs = BTreeMap::new();
        defs.insert(0u8, "nodata".to_string());
        defs.insert(6u8, "water".to_string());
        for attr in [
            AttrValue::from("sentinel-2-l2a"),
            AttrValue::from(vec![0u8, 1, 3]),
            AttrValue::from(defs),
        ] {
            let json = serde_json::to_string(&attr).unwrap();
            let back: AttrValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, attr);
        }
    }

    #[test]
    fn flags_wire_format_uses_string_keys() {
        let mut defs = BTreeMap::new();
        defs.insert(0u8, "nodata".to_string());
        let flags = AttrValue::from(defs);

        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"{"0":"nodata"}"#);

        let back: AttrValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, flags);
    }

    #[test]
    fn flags_rejects_non_numeric_code_key() {
        let result: Result<AttrValue, _> = serde_json::from_str(r#"{"water":"6"}"#);
        // falls through every variant: not text, not codes, and the
        // flag key does not parse as a category code
        assert!(result.is_err());
    }
}
