//! NMEA 0183 sentence framing for the AIS VDM/VDO talker.
//!
//! This module only frames and checksum-validates a single line into a
//! [`Vdm`] record; reassembling multi-fragment payloads into a complete AIS
//! message is the handler's job (see [`crate::handler`]), since the fragment
//! buffer is state shared across sentences, not a property of any one line.

use crate::errors::{Error, Result};
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_until};
use nom::character::complete::anychar;
use nom::combinator::{map, map_res, opt, peek, verify};
use nom::number::complete::hex_u32;
use nom::sequence::{delimited, terminated};
use nom::IResult;

/// Talker ID for the AIS station that produced a sentence.
#[derive(Debug, PartialEq, Eq)]
pub enum TalkerId {
    /// NMEA 4.0 Base AIS station
    AB,
    /// NMEA 4.0 Dependent AIS Base station
    AD,
    /// Mobile AIS station
    AI,
    /// NMEA 4.0 Aid to Navigation AIS station
    AN,
    /// NMEA 4.0 AIS Receiving station
    AR,
    /// NMEA 4.0 Limited Base station
    AS,
    /// NMEA 4.0 AIS Transmitting station
    AT,
    /// NMEA 4.0 Repeater AIS station
    AX,
    /// Base AIS station (deprecated)
    BS,
    /// NMEA 4.0 Physical Shore AIS station
    SA,
    Unknown,
}

impl<'a> From<&'a [u8]> for TalkerId {
    fn from(talker_id: &'a [u8]) -> Self {
        match talker_id {
            b"AB" => Self::AB,
            b"AD" => Self::AD,
            b"AI" => Self::AI,
            b"AN" => Self::AN,
            b"AR" => Self::AR,
            b"AS" => Self::AS,
            b"AT" => Self::AT,
            b"AX" => Self::AX,
            b"BS" => Self::BS,
            b"SA" => Self::SA,
            _ => Self::Unknown,
        }
    }
}

/// Whether a sentence reports another vessel (`VDM`) or our own (`VDO`).
#[derive(Debug, PartialEq, Eq)]
pub enum AisReportType {
    VDM,
    VDO,
    Unknown,
}

impl<'a> From<&'a [u8]> for AisReportType {
    fn from(typ: &'a [u8]) -> Self {
        match typ {
            b"VDM" => Self::VDM,
            b"VDO" => Self::VDO,
            _ => Self::Unknown,
        }
    }
}

/// A single framed VDM/VDO sentence. May be one fragment of a larger
/// multi-sentence payload; see `fragment`/`fragments`/`msg_id`.
#[derive(Debug, PartialEq)]
pub struct Vdm {
    pub talker_id: TalkerId,
    pub report_type: AisReportType,
    /// Total number of fragments in this message (1 if unfragmented).
    pub fragments: u8,
    /// 1-based index of this fragment.
    pub fragment: u8,
    /// Sequential message ID shared by all fragments of one message, when
    /// `fragments > 1`.
    pub msg_id: Option<u8>,
    pub channel: Option<char>,
    /// The armoured six-bit payload carried by this one sentence.
    pub payload: String,
    pub fill_bits: u8,
}

impl Vdm {
    pub fn is_fragment(&self) -> bool {
        self.fragments != 1
    }
}

/// Parses one NMEA line (optionally carrying a leading tag block) as an AIS
/// VDM/VDO sentence, verifying its checksum.
pub fn parse(line: &[u8]) -> Result<Vdm> {
    let (_, (raw, vdm, checksum)) = parse_nmea_sentence(line)?;
    check_checksum(raw, checksum)?;
    Ok(vdm)
}

fn check_checksum(sentence: &[u8], expected: u8) -> Result<()> {
    let found = sentence.iter().fold(0u8, |acc, &b| acc ^ b);
    if expected != found {
        Err(Error::Checksum {
            expected,
            found,
        })
    } else {
        Ok(())
    }
}

fn parse_numeric_string(data: &[u8]) -> IResult<&[u8], &str> {
    map_res(nom::character::complete::digit1, std::str::from_utf8)(data)
}

fn parse_u8_digit(data: &[u8]) -> IResult<&[u8], u8> {
    map_res(parse_numeric_string, std::str::FromStr::from_str)(data)
}

fn parse_ais_sentence(data: &[u8]) -> IResult<&[u8], Vdm> {
    let (data, talker_id) = map(take(2u8), Into::into)(data)?;
    let (data, report_type) = map(take(3u8), Into::into)(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, fragments) = parse_u8_digit(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, fragment) = parse_u8_digit(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, msg_id) = opt(parse_u8_digit)(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, channel_bytes) = take_until(",")(data)?;
    let (_, channel) = opt(anychar)(channel_bytes)?;
    let (data, _) = tag(",")(data)?;
    let (data, payload_bytes) = take_until(",")(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, fill_bits) = verify(parse_u8_digit, |val| *val < 6)(data)?;
    let payload = String::from_utf8_lossy(payload_bytes).into_owned();
    Ok((
        data,
        Vdm {
            talker_id,
            report_type,
            fragments,
            fragment,
            msg_id,
            channel,
            payload,
            fill_bits,
        },
    ))
}

fn parse_nmea_sentence(data: &[u8]) -> IResult<&[u8], (&[u8], Vdm, u8)> {
    let (data, _) = opt(delimited(tag("\\"), take_until("\\"), tag("\\")))(data)?;
    let (data, _) = alt((tag("!"), tag("$")))(data)?;
    let (data, raw) = peek(take_until("*"))(data)?;
    let (data, vdm) = terminated(parse_ais_sentence, tag("*"))(data)?;
    let (data, checksum) = verify(hex_u32, |val| val <= &0xff)(data)?;
    Ok((data, (raw, vdm, checksum as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CHECKSUM: &[u8] =
        b"!AIVDM,1,1,,A,E>kb9I99S@0`8@:9ah;0TahI7@@;V4=v:nv;h00003vP100,0*7A";
    const BAD_CHECKSUM: &[u8] =
        b"!AIVDM,1,1,,A,E>kb9I99S@0`8@:9ah;0TahI7@@;V4=v:nv;h00003vP100,0*8D";
    const FRAGMENT_1: &[u8] =
        b"!AIVDM,2,1,1,B,53`soB8000010KSOW<0P4eDp4l6000000000000U0p<24t@P05H3S833CDP00000,0*78";
    const FRAGMENT_2: &[u8] = b"!AIVDM,2,2,1,B,0000000,2*26";
    const NO_CHANNEL: &[u8] = b"!AIVDM,1,1,,,34RvgN500005tLTMfjiTs3u`0>`<,0*7A";
    const WITH_TAG_BLOCK: &[u8] =
        b"\\s:2573345,c:1696241893*00\\!AIVDM,1,1,,A,E>kb9I99S@0`8@:9ah;0TahI7@@;V4=v:nv;h00003vP100,0*7A";

    #[test]
    fn parses_single_fragment_sentence() {
        let vdm = parse(GOOD_CHECKSUM).unwrap();
        assert_eq!(vdm.talker_id, TalkerId::AI);
        assert_eq!(vdm.report_type, AisReportType::VDM);
        assert_eq!(vdm.fragments, 1);
        assert_eq!(vdm.fragment, 1);
        assert_eq!(vdm.msg_id, None);
        assert_eq!(vdm.channel, Some('A'));
        assert_eq!(vdm.fill_bits, 0);
        assert!(!vdm.is_fragment());
    }

    #[test]
    fn rejects_bad_checksum() {
        assert!(parse(BAD_CHECKSUM).is_err());
    }

    #[test]
    fn parses_fragment_pair() {
        let first = parse(FRAGMENT_1).unwrap();
        let second = parse(FRAGMENT_2).unwrap();
        assert_eq!(first.fragments, 2);
        assert_eq!(first.fragment, 1);
        assert_eq!(first.msg_id, Some(1));
        assert_eq!(second.fragment, 2);
        assert_eq!(second.msg_id, Some(1));
    }

    #[test]
    fn channel_is_optional() {
        let vdm = parse(NO_CHANNEL).unwrap();
        assert_eq!(vdm.channel, None);
    }

    #[test]
    fn strips_leading_tag_block() {
        let vdm = parse(WITH_TAG_BLOCK).unwrap();
        assert_eq!(vdm.talker_id, TalkerId::AI);
        assert_eq!(vdm.channel, Some('A'));
    }

    #[test]
    fn talker_id_conversions() {
        assert_eq!(TalkerId::from(b"AI".as_ref()), TalkerId::AI);
        assert_eq!(TalkerId::from(b"AB".as_ref()), TalkerId::AB);
        assert_eq!(TalkerId::from(b"BS".as_ref()), TalkerId::BS);
    }
}
