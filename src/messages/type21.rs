//! Type 21: Aid to Navigation Report.

use crate::bits::BitReader;
use crate::messages::types::{EpfdType, NavaidType};

#[derive(Debug, PartialEq, Clone)]
pub struct Type21 {
    pub repeat: u8,
    pub mmsi: u32,
    pub aid_type: Option<NavaidType>,
    pub name: String,
    pub accuracy: bool,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u16,
    pub to_starboard: u16,
    pub epfd: Option<EpfdType>,
    pub second: Option<u64>,
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned: bool,
}

impl Type21 {
    pub fn parse(reader: &BitReader) -> Self {
        let repeat = reader.unsigned(6, 2).unwrap_or(0) as u8;
        let mmsi = reader.unsigned(8, 30).unwrap_or(0) as u32;
        let aid_type = reader
            .unsigned(38, 5)
            .and_then(|v| NavaidType::parse(v as u8));
        let mut name = reader.text(43, 120);
        if name.chars().count() == 20 {
            name.push_str(&reader.text(272, 88));
        }
        let accuracy = reader.boolean(163);
        let lon = reader
            .signed_scaled(164, 28, 4)
            .map(|v| v / 60.0)
            .filter(|&v| v != 181.0);
        let lat = reader
            .signed_scaled(192, 27, 4)
            .map(|v| v / 60.0)
            .filter(|&v| v != 91.0);
        let to_bow = reader.unsigned(219, 9).unwrap_or(0) as u16;
        let to_stern = reader.unsigned(228, 9).unwrap_or(0) as u16;
        let to_port = reader.unsigned(237, 9).unwrap_or(0) as u16;
        let to_starboard = reader.unsigned(243, 9).unwrap_or(0) as u16;
        let epfd = reader
            .unsigned(249, 4)
            .and_then(|v| EpfdType::parse(v as u8));
        let second = reader.unsigned(253, 6).filter(|&v| v < 60);
        let off_position = reader.boolean(259);
        let regional = reader.unsigned(260, 8).unwrap_or(0) as u8;
        let raim = reader.boolean(268);
        let virtual_aid = reader.boolean(269);
        let assigned = reader.boolean(270);
        Type21 {
            repeat,
            mmsi,
            aid_type,
            name,
            accuracy,
            lon,
            lat,
            to_bow,
            to_stern,
            to_port,
            to_starboard,
            epfd,
            second,
            off_position,
            regional,
            raim,
            virtual_aid,
            assigned,
        }
    }
}
