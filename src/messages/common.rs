//! The Common Navigation Block shared by message types 1, 2 and 3.

use crate::bits::BitReader;

/// Navigational status, as reported by Types 1/2/3.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum NavigationStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManouverability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    ReservedForHSC,
    ReservedForWIG,
    Reserved01,
    Reserved02,
    Reserved03,
    AisSartIsActive,
    Unknown(u8),
}

impl NavigationStatus {
    pub fn parse(data: u8) -> Option<Self> {
        match data {
            0 => Some(Self::UnderWayUsingEngine),
            1 => Some(Self::AtAnchor),
            2 => Some(Self::NotUnderCommand),
            3 => Some(Self::RestrictedManouverability),
            4 => Some(Self::ConstrainedByDraught),
            5 => Some(Self::Moored),
            6 => Some(Self::Aground),
            7 => Some(Self::EngagedInFishing),
            8 => Some(Self::UnderWaySailing),
            9 => Some(Self::ReservedForHSC),
            10 => Some(Self::ReservedForWIG),
            11 => Some(Self::Reserved01),
            12 => Some(Self::Reserved02),
            13 => Some(Self::Reserved03),
            14 => Some(Self::AisSartIsActive),
            15 => None,
            _ => Some(Self::Unknown(data)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ManeuverIndicator {
    NoSpecialManeuver,
    SpecialManeuver,
    Unknown(u8),
}

impl ManeuverIndicator {
    pub fn parse(data: u8) -> Option<Self> {
        match data {
            0 => None,
            1 => Some(Self::NoSpecialManeuver),
            2 => Some(Self::SpecialManeuver),
            _ => Some(Self::Unknown(data)),
        }
    }
}

/// Common Navigation Block: the shared payload of position reports 1, 2 and 3.
/// Sentinel-valued fields (`course == 360.0`, `sog == 102.3`, `second >= 60`,
/// `heading == 511`) are masked to `None` at construction time rather than on
/// read, so every field reads as "the value, if one was reported".
#[derive(Debug, PartialEq, Clone)]
pub struct Cnb {
    pub msg_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
    pub status: Option<NavigationStatus>,
    pub turn: Option<f64>,
    pub sog: Option<f64>,
    pub accuracy: bool,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub course: Option<f64>,
    pub heading: Option<u64>,
    pub second: Option<u64>,
    pub maneuver: Option<ManeuverIndicator>,
    pub raim: bool,
    pub radio: Option<u64>,
}

impl Cnb {
    /// Decodes a Type 1/2/3 payload already known (from bits `[0,6)`) to be
    /// one of those three. `msg_type` is threaded through rather than
    /// re-read so the caller's dispatch and the record agree.
    pub fn parse(reader: &BitReader, msg_type: u8) -> Self {
        let repeat = reader.unsigned(6, 2).unwrap_or(0) as u8;
        let mmsi = reader.unsigned(8, 30).unwrap_or(0) as u32;
        let status = reader
            .unsigned(38, 4)
            .and_then(|v| NavigationStatus::parse(v as u8));
        let turn = reader.signed_scaled(42, 8, 3);
        // Compare the raw integer against the wire sentinel (1023) rather
        // than the scaled float against 102.3: 1023 * 10^-1 rounds to
        // 102.30000000000001 in f64, so a float comparison never matches.
        let sog = reader
            .unsigned(50, 10)
            .filter(|&v| v != 1023)
            .map(|v| v as f64 * 0.1);
        let accuracy = reader.boolean(60);
        let lon = reader
            .signed_scaled(61, 28, 4)
            .map(|v| v / 60.0)
            .filter(|&v| v != 181.0);
        let lat = reader
            .signed_scaled(89, 27, 4)
            .map(|v| v / 60.0)
            .filter(|&v| v != 91.0);
        let course = reader.unsigned_scaled(116, 12, 1).filter(|&v| v != 360.0);
        let heading = reader.unsigned(128, 9).filter(|&v| v != 511);
        let second = reader.unsigned(137, 6).filter(|&v| v < 60);
        let maneuver = reader
            .unsigned(143, 2)
            .and_then(|v| ManeuverIndicator::parse(v as u8));
        let raim = reader.boolean(148);
        let radio = reader.unsigned(149, 19);
        Cnb {
            msg_type,
            repeat,
            mmsi,
            status,
            turn,
            sog,
            accuracy,
            lon,
            lat,
            course,
            heading,
            second,
            maneuver,
            raim,
            radio,
        }
    }
}
