//! Type 5: Static and Voyage Related Data.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::bits::BitReader;
use crate::messages::types::{EpfdType, ShipType};

#[derive(Debug, PartialEq, Clone)]
pub struct Type5 {
    pub repeat: u8,
    pub mmsi: u32,
    pub ais_version: u8,
    pub imo: u32,
    pub callsign: String,
    pub shipname: String,
    pub shiptype: Option<ShipType>,
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u16,
    pub to_starboard: u16,
    pub epfd: Option<EpfdType>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub draught: f64,
    pub destination: String,
    pub dte: bool,
    /// ETA reconstructed against the current UTC date; rolled forward a
    /// year if the month/day/hour/minute given would otherwise fall in the
    /// past (vessels only ever report month/day/hour/minute, never a year).
    pub eta: Option<NaiveDateTime>,
}

impl Type5 {
    pub fn parse(reader: &BitReader) -> Self {
        let repeat = reader.unsigned(6, 2).unwrap_or(0) as u8;
        let mmsi = reader.unsigned(8, 30).unwrap_or(0) as u32;
        let ais_version = reader.unsigned(38, 2).unwrap_or(0) as u8;
        let imo = reader.unsigned(40, 30).unwrap_or(0) as u32;
        let callsign = reader.text(70, 42);
        let shipname = reader.text(112, 120);
        let shiptype = reader
            .unsigned(232, 8)
            .and_then(|v| ShipType::parse(v as u8));
        let to_bow = reader.unsigned(240, 9).unwrap_or(0) as u16;
        let to_stern = reader.unsigned(249, 9).unwrap_or(0) as u16;
        let to_port = reader.unsigned(258, 6).unwrap_or(0) as u16;
        let to_starboard = reader.unsigned(264, 6).unwrap_or(0) as u16;
        let epfd = reader
            .unsigned(270, 4)
            .and_then(|v| EpfdType::parse(v as u8));
        let month = reader.unsigned(274, 4).map(|v| v as u8).filter(|&v| v != 0);
        let day = reader.unsigned(278, 5).map(|v| v as u8).filter(|&v| v != 0);
        let hour = reader.unsigned(283, 5).map(|v| v as u8).filter(|&v| v < 24);
        let minute = reader
            .unsigned(288, 6)
            .map(|v| v as u8)
            .filter(|&v| v < 60);
        let draught = reader.unsigned_scaled(294, 8, 1).unwrap_or(0.0);
        let destination = reader.text(392, 120);
        let dte = reader.boolean(422);
        let eta = eta_from_fields(month, day, hour, minute);
        Type5 {
            repeat,
            mmsi,
            ais_version,
            imo,
            callsign,
            shipname,
            shiptype,
            to_bow,
            to_stern,
            to_port,
            to_starboard,
            epfd,
            month,
            day,
            hour,
            minute,
            draught,
            destination,
            dte,
            eta,
        }
    }
}

fn eta_from_fields(
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
) -> Option<NaiveDateTime> {
    let (month, day, hour, minute) = (month?, day?, hour?, minute?);
    let now = Utc::now();
    let mut year = now.year();
    let mut date =
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)?.and_hms_opt(hour as u32, minute as u32, 0)?;
    if date < now.naive_utc() {
        year += 1;
        date = NaiveDate::from_ymd_opt(year, month as u32, day as u32)?
            .and_hms_opt(hour as u32, minute as u32, 0)?;
    }
    Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_truncated_type5_fixture() {
        let reader = BitReader::new("5341U9`00000uCGCKL0u=@T4000000000000001?<@<47u;b004Sm51DQ0C@");
        let msg = Type5::parse(&reader);
        assert_eq!(msg.mmsi, 205546790);
        assert_eq!(msg.callsign, "OT5467");
        assert_eq!(
            msg.shiptype,
            Some(ShipType::CargoNoAdditionalInformation)
        );
        assert_eq!(msg.month, Some(4));
        assert_eq!(msg.destination, "ROTTERDAM");
        assert_eq!(msg.epfd, None);
        assert!(msg.dte);
    }

    #[test]
    fn decodes_multipart_type5_fixture() {
        let reader = BitReader::new(
            "53`soB8000010KSOW<0P4eDp4l6000000000000U0p<24t@P05H3S833CDP000000000000",
        );
        let msg = Type5::parse(&reader);
        assert_eq!(msg.mmsi, 244250440);
        assert_eq!(msg.callsign, "PF8793");
        assert_eq!(msg.shiptype, Some(ShipType::PleasureCraft));
        assert_eq!(msg.destination, "NL LMMR");
    }

    #[test]
    fn eta_rolls_forward_when_in_the_past() {
        let now = Utc::now();
        // A month/day that's always in the past relative to "now" unless
        // today happens to be Jan 1st: pick the day before today's ordinal.
        let past = now - chrono::Duration::days(1);
        let eta = eta_from_fields(
            Some(past.month() as u8),
            Some(past.day() as u8),
            Some(0),
            Some(0),
        )
        .unwrap();
        assert!(eta >= now.naive_utc());
    }

    #[test]
    fn eta_absent_without_all_fields() {
        assert_eq!(eta_from_fields(Some(4), None, Some(1), Some(0)), None);
    }
}
