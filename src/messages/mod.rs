//! AIS message types and the type-dispatch decoder.

use crate::bits::BitReader;

pub mod common;
pub mod type18;
pub mod type21;
pub mod type24;
pub mod type5;
pub mod types;

pub use common::{Cnb, ManeuverIndicator, NavigationStatus};
pub use type18::Type18;
pub use type21::Type21;
pub use type24::{Type24A, Type24B};
pub use type5::Type5;

/// A decoded AIS message, tagged by wire type. Types 1/2/3 share the same
/// [`Cnb`] payload; only the tag differs.
#[derive(Debug, PartialEq, Clone)]
pub enum AisMessage {
    Type1(Cnb),
    Type2(Cnb),
    Type3(Cnb),
    Type5(Type5),
    Type18(Type18),
    Type21(Type21),
    Type24A(Type24A),
    Type24B(Type24B),
}

impl AisMessage {
    /// Wire message type number, or the synthetic `0x24A`/`0x24B` key used to
    /// disambiguate the two Type 24 parts (see [`message_key`]).
    pub fn key(&self) -> u16 {
        match self {
            AisMessage::Type1(_) => 1,
            AisMessage::Type2(_) => 2,
            AisMessage::Type3(_) => 3,
            AisMessage::Type5(_) => 5,
            AisMessage::Type18(_) => 18,
            AisMessage::Type21(_) => 21,
            AisMessage::Type24A(_) => TYPE_24A_KEY,
            AisMessage::Type24B(_) => TYPE_24B_KEY,
        }
    }

    /// The vessel/aid name carried by this message, if any (`Type5`
    /// shipname, `Type21` name, `Type24A` shipname).
    pub fn name(&self) -> Option<&str> {
        match self {
            AisMessage::Type5(m) => Some(&m.shipname),
            AisMessage::Type21(m) => Some(&m.name),
            AisMessage::Type24A(m) => Some(&m.shipname),
            _ => None,
        }
    }

    /// MMSI common to every variant.
    pub fn mmsi(&self) -> u32 {
        match self {
            AisMessage::Type1(m) | AisMessage::Type2(m) | AisMessage::Type3(m) => m.mmsi,
            AisMessage::Type5(m) => m.mmsi,
            AisMessage::Type18(m) => m.mmsi,
            AisMessage::Type21(m) => m.mmsi,
            AisMessage::Type24A(m) => m.mmsi,
            AisMessage::Type24B(m) => m.mmsi,
        }
    }
}

/// Synthetic message-type keys for the two Type 24 parts; distinct from any
/// real wire type number so they don't collide with a future type 0x024A.
pub const TYPE_24A_KEY: u16 = 0x024A;
pub const TYPE_24B_KEY: u16 = 0x024B;

/// Peeks the message type at bits `[0,6)` of an armoured payload, without
/// decoding the rest of the message.
pub fn message_type(armour: &str) -> Option<u8> {
    BitReader::new(armour).unsigned(0, 6).map(|v| v as u8)
}

/// Decodes a reassembled armoured payload into a typed [`AisMessage`].
/// Returns `None` for wire types outside the supported set, or when the
/// payload is too short for the fields the type requires — this mirrors the
/// design's `UnknownType`/`ShortBuffer` error classes, which are not fatal
/// and simply surface as an absent message.
pub fn parse(armour: &str) -> Option<AisMessage> {
    let reader = BitReader::new(armour);
    let msg_type = reader.unsigned(0, 6)? as u8;
    match msg_type {
        1 => Some(AisMessage::Type1(Cnb::parse(&reader, 1))),
        2 => Some(AisMessage::Type2(Cnb::parse(&reader, 2))),
        3 => Some(AisMessage::Type3(Cnb::parse(&reader, 3))),
        5 => Some(AisMessage::Type5(Type5::parse(&reader))),
        18 => Some(AisMessage::Type18(Type18::parse(&reader))),
        21 => Some(AisMessage::Type21(Type21::parse(&reader))),
        24 => {
            let partno = reader.unsigned(38, 2)?;
            if partno == 0 {
                Some(AisMessage::Type24A(Type24A::parse(&reader)))
            } else {
                Some(AisMessage::Type24B(Type24B::parse(&reader)))
            }
        }
        other => {
            log::debug!("discarding unsupported AIS message type {}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_type1() {
        let msg = parse("13u?etPv2;0n:dDPwUM1U1Cb069D").unwrap();
        match msg {
            AisMessage::Type1(cnb) => assert_eq!(cnb.mmsi, 265547250),
            _ => panic!("expected Type1"),
        }
    }

    #[test]
    fn unsupported_type_is_none() {
        // Leading '4' decodes the type field to 4 (base station report),
        // which is outside the supported set.
        assert!(parse("400000000000000000000000000").is_none());
    }

    #[test]
    fn message_type_peeks_without_full_decode() {
        assert_eq!(message_type("13u?etPv2;0n:dDPwUM1U1Cb069D"), Some(1));
    }
}
