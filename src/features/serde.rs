//! Implements [`serde::Serialize`] and [`serde::Deserialize`] for [`Atom`]

use core::fmt;

use serde::de::{
    Deserializer,
    Error,
    Unexpected,
    Visitor,
};
use serde::{
    Serialize,
    Serializer,
};

use crate::Atom;

impl Serialize for Atom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Atom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AtomVisitor;

        impl<'a> Visitor<'a> for AtomVisitor {
            type Value = Atom;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a string of at most {} bytes", Atom::MAX_LEN)
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Atom::try_new(v).map_err(|_| E::invalid_length(v.len(), &self))
            }

            fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                match core::str::from_utf8(v) {
                    Ok(s) => self.visit_str(s),
                    Err(_) => Err(Error::invalid_value(Unexpected::Bytes(v), &self)),
                }
            }
        }

        deserializer.deserialize_str(AtomVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::Atom;

    #[test]
    fn test_roundtrip() {
        let atom = Atom::new("mesh");

        let json = serde_json::to_string(&atom).unwrap();
        assert_eq!(json, "\"mesh\"");

        let back: Atom = serde_json::from_str(&json).unwrap();
        assert_eq!(back, atom);
    }

    #[test]
    fn test_too_long_rejected() {
        let result: Result<Atom, _> = serde_json::from_str("\"eight ch\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_in_struct() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Resource {
            kind: Atom,
            size: u32,
        }

        let resource = Resource {
            kind: Atom::new("audio"),
            size: 4096,
        };

        let json = serde_json::to_string(&resource).unwrap();
        assert_eq!(json, r#"{"kind":"audio","size":4096}"#);
        assert_eq!(serde_json::from_str::<Resource>(&json).unwrap(), resource);
    }
}
