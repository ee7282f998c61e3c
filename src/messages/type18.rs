//! Type 18: Standard Class B Position Report.

use crate::bits::BitReader;

#[derive(Debug, PartialEq, Clone)]
pub struct Type18 {
    pub repeat: u8,
    pub mmsi: u32,
    pub sog: Option<f64>,
    pub accuracy: bool,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub course: Option<f64>,
    pub heading: Option<u64>,
    pub second: Option<u64>,
    pub regional: u8,
    pub cs_unit: bool,
    pub has_display: bool,
    pub has_dsc: bool,
    pub whole_band: bool,
    pub accepts_msg22: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio: Option<u64>,
}

impl Type18 {
    pub fn parse(reader: &BitReader) -> Self {
        let repeat = reader.unsigned(6, 2).unwrap_or(0) as u8;
        let mmsi = reader.unsigned(8, 30).unwrap_or(0) as u32;
        // See messages::common::Cnb::parse: comparing the raw integer
        // against 1023 avoids the f64 rounding that makes `v != 102.3`
        // always true for the scaled value.
        let sog = reader
            .unsigned(46, 10)
            .filter(|&v| v != 1023)
            .map(|v| v as f64 * 0.1);
        let accuracy = reader.boolean(56);
        let lon = reader
            .signed_scaled(57, 28, 4)
            .map(|v| v / 60.0)
            .filter(|&v| v != 181.0);
        let lat = reader
            .signed_scaled(85, 27, 4)
            .map(|v| v / 60.0)
            .filter(|&v| v != 91.0);
        let course = reader.unsigned_scaled(112, 12, 1).filter(|&v| v != 360.0);
        let heading = reader.unsigned(124, 9).filter(|&v| v != 511);
        let second = reader.unsigned(133, 6).filter(|&v| v < 60);
        let regional = reader.unsigned(139, 2).unwrap_or(0) as u8;
        let cs_unit = reader.boolean(141);
        let has_display = reader.boolean(142);
        let has_dsc = reader.boolean(143);
        let whole_band = reader.boolean(144);
        let accepts_msg22 = reader.boolean(145);
        let assigned = reader.boolean(146);
        let raim = reader.boolean(147);
        let radio = reader.unsigned(148, 20);
        Type18 {
            repeat,
            mmsi,
            sog,
            accuracy,
            lon,
            lat,
            course,
            heading,
            second,
            regional,
            cs_unit,
            has_display,
            has_dsc,
            whole_band,
            accepts_msg22,
            assigned,
            raim,
            radio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_type18_fixture() {
        let reader = BitReader::new("B6:hQDh0029Pt<4TAS003h6TSP00");
        let msg = Type18::parse(&reader);
        assert_eq!(msg.mmsi, 413933907);
        assert_eq!(msg.sog, Some(0.0));
        assert!(!msg.accuracy);
        assert_eq!(msg.course, Some(0.0));
        assert_eq!(msg.heading, Some(480)); // out of the usual 0..360 range but not the 511 sentinel
        assert_eq!(msg.second, Some(13));
        assert!(msg.whole_band);
        assert!(!msg.assigned);
        assert!(!msg.raim);
    }

    #[test]
    fn sentinel_values_normalise_to_absent() {
        use crate::test_helpers::encode_bits;

        let armour = encode_bits(&[
            (18, 6),         // message type
            (0, 2),          // repeat
            (987654321, 30), // mmsi
            (0, 8),          // spare (reserved, between mmsi and speed)
            (1023, 10),      // sog raw sentinel ("not available")
            (0, 1),          // accuracy
            (0, 28),         // lon
            (0, 27),         // lat
            (3600, 12),      // course raw sentinel (360.0 degrees)
            (90, 9),         // heading (not the 511 sentinel)
            (61, 6),         // second raw sentinel (>= 60)
            (0, 2),          // regional
            (0, 1),          // cs_unit
            (0, 1),          // has_display
            (0, 1),          // has_dsc
            (0, 1),          // whole_band
            (0, 1),          // accepts_msg22
            (0, 1),          // assigned
            (0, 1),          // raim
            (0, 20),         // radio
        ]);
        let reader = BitReader::new(&armour);
        let msg = Type18::parse(&reader);
        assert_eq!(msg.mmsi, 987654321);
        assert_eq!(msg.sog, None, "raw sog 1023 must normalise to absent");
        assert_eq!(msg.course, None, "raw course 3600 (360.0) must normalise to absent");
        assert_eq!(msg.second, None, "raw second 61 (>= 60) must normalise to absent");
        assert_eq!(msg.heading, Some(90));
    }
}
