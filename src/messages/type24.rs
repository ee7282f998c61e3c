//! Type 24: Static Data Report, split across two sub-messages ("Part A" and
//! "Part B") that share the same wire type and are told apart by `partno`
//! at bits `[38,40)`.

use crate::bits::BitReader;
use crate::messages::types::ShipType;

#[derive(Debug, PartialEq, Clone)]
pub struct Type24A {
    pub repeat: u8,
    pub mmsi: u32,
    pub shipname: String,
}

impl Type24A {
    pub fn parse(reader: &BitReader) -> Self {
        let repeat = reader.unsigned(6, 2).unwrap_or(0) as u8;
        let mmsi = reader.unsigned(8, 30).unwrap_or(0) as u32;
        let shipname = reader.text(40, 120);
        Type24A {
            repeat,
            mmsi,
            shipname,
        }
    }
}

/// The bits at `[132, 162)` encode two mutually exclusive structures
/// depending on whether the broadcasting MMSI belongs to an auxiliary craft
/// (`98XXXYYYY`) carried by a mothership, or a fully-equipped vessel with
/// its own dimensions. Both interpretations are decoded; [`Type24B::is_auxiliary`]
/// tells the caller which one the MMSI says to trust.
#[derive(Debug, PartialEq, Clone)]
pub struct Type24B {
    pub repeat: u8,
    pub mmsi: u32,
    pub shiptype: Option<ShipType>,
    pub vendor_id: String,
    pub unit_model_code: u8,
    pub serial_number: u32,
    pub callsign: String,
    pub mothership_mmsi: Option<u32>,
    pub to_bow: Option<u16>,
    pub to_stern: Option<u16>,
    pub to_port: Option<u16>,
    pub to_starboard: Option<u16>,
}

impl Type24B {
    pub fn parse(reader: &BitReader) -> Self {
        let repeat = reader.unsigned(6, 2).unwrap_or(0) as u8;
        let mmsi = reader.unsigned(8, 30).unwrap_or(0) as u32;
        let shiptype = reader
            .unsigned(40, 8)
            .and_then(|v| ShipType::parse(v as u8));
        let vendor_id = reader.text(48, 18);
        let unit_model_code = reader.unsigned(66, 4).unwrap_or(0) as u8;
        let serial_number = reader.unsigned(70, 20).unwrap_or(0) as u32;
        let callsign = reader.text(90, 42);
        let mothership_mmsi = reader.unsigned(132, 30).map(|v| v as u32);
        let to_bow = reader.unsigned(132, 9).map(|v| v as u16);
        let to_stern = reader.unsigned(141, 9).map(|v| v as u16);
        let to_port = reader.unsigned(150, 6).map(|v| v as u16);
        let to_starboard = reader.unsigned(156, 6).map(|v| v as u16);
        Type24B {
            repeat,
            mmsi,
            shiptype,
            vendor_id,
            unit_model_code,
            serial_number,
            callsign,
            mothership_mmsi,
            to_bow,
            to_stern,
            to_port,
            to_starboard,
        }
    }

    /// Whether `mmsi` follows the `98XXXYYYY` auxiliary-craft pattern, in
    /// which case `mothership_mmsi` is the correct interpretation of bits
    /// `[132,162)` rather than the dimension fields.
    pub fn is_auxiliary(&self) -> bool {
        is_auxiliary_mmsi(self.mmsi)
    }
}

fn is_auxiliary_mmsi(mmsi: u32) -> bool {
    mmsi / 10_000_000 == 98
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_type24a_fixture() {
        let reader = BitReader::new("H6:lEgQL4r1<QDr0P4pN3KSKP00");
        let msg = Type24A::parse(&reader);
        assert_eq!(msg.mmsi, 413996478);
        assert_eq!(msg.shipname, "WAN SHUN HANG 6868");
    }

    #[test]
    fn decodes_type24b_main_vessel_fixture() {
        let reader = BitReader::new("H3mr@L4NC=D62?P<7nmpl00@8220");
        let msg = Type24B::parse(&reader);
        assert_eq!(msg.mmsi, 257855600);
        assert_eq!(msg.shiptype, Some(ShipType::Fishing));
        assert_eq!(msg.vendor_id, "SMT");
        assert_eq!(msg.callsign, "LG6584");
        assert!(!msg.is_auxiliary());
        assert_eq!(msg.to_stern, Some(8));
    }

    #[test]
    fn decodes_type24b_auxiliary_fixture() {
        let reader = BitReader::new("H>cfmI4UFC@0DAN00000000H3110");
        let msg = Type24B::parse(&reader);
        assert_eq!(msg.mmsi, 985380196);
        assert_eq!(msg.shiptype, Some(ShipType::PleasureCraft));
        assert_eq!(msg.vendor_id, "VSP");
        assert_eq!(msg.serial_number, 83038);
        assert_eq!(msg.to_bow, Some(3));
        assert!(msg.is_auxiliary());
    }

    #[test]
    fn auxiliary_mmsi_pattern() {
        assert!(is_auxiliary_mmsi(985_380_196));
        assert!(!is_auxiliary_mmsi(257_855_600));
    }
}
