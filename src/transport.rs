//! Upstream transport: reads lines from a marine data source and splits them
//! into the handful of record shapes the handler consumes (RMC, VTG, VDM).
//! Full NMEA sentence parsing (talker-specific fields beyond what the
//! handler needs, tag blocks, proprietary sentences) is out of scope here;
//! this is deliberately the thinnest reader that can drive [`crate::handler::Handler`].

use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::net::{TcpStream, UdpSocket};

use crate::sentence::{self, Vdm};

/// Our own vessel's position/course/speed, as reported by an RMC sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rmc {
    pub lat: f64,
    pub lon: f64,
    pub track_made_good: Option<f64>,
    pub sog: f64,
}

/// Course/speed over ground, as reported by a VTG sentence. Accepted by the
/// transport but ignored by the handler core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vtg {
    pub course_over_ground: Option<f64>,
    pub speed_over_ground: Option<f64>,
}

/// A generic position fix from any other positioning sentence. Accepted but
/// ignored by the handler core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos {
    pub lat: f64,
    pub lon: f64,
}

/// A single demultiplexed record handed to the handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Rmc(Rmc),
    Vtg(Vtg),
    Pos(Pos),
    Vdm(Vdm),
}

/// Splits one raw NMEA line into a [`Record`], if it's a sentence type this
/// crate understands. Unrecognized sentences (and malformed ones) yield
/// `None` rather than an error: a noisy feed must not interrupt the stream.
pub fn parse_line(line: &str) -> Option<Record> {
    let trimmed = line.trim();
    let body = trimmed.strip_prefix('$').or_else(|| trimmed.strip_prefix('!'))?;
    let sentence_id = body.get(2..5)?;
    match sentence_id {
        "RMC" => parse_rmc(body).map(Record::Rmc),
        "VTG" => parse_vtg(body).map(Record::Vtg),
        "VDM" | "VDO" => match sentence::parse(trimmed.as_bytes()) {
            Ok(vdm) => Some(Record::Vdm(vdm)),
            Err(err) => {
                log::warn!("discarding malformed AIS sentence: {}", err);
                None
            }
        },
        _ => None,
    }
}

fn parse_rmc(body: &str) -> Option<Rmc> {
    let fields: Vec<&str> = body.splitn(2, ',').nth(1)?.split(',').collect();
    // $--RMC,time,status,lat,N/S,lon,E/W,sog,track,date,...
    if fields.get(1).copied() != Some("A") {
        return None; // void fix
    }
    let lat = parse_nmea_coord(fields.get(2)?, fields.get(3)?)?;
    let lon = parse_nmea_coord(fields.get(4)?, fields.get(5)?)?;
    let sog = fields.get(6)?.parse().ok()?;
    let track_made_good = fields.get(7).and_then(|s| s.parse().ok());
    Some(Rmc {
        lat,
        lon,
        track_made_good,
        sog,
    })
}

fn parse_vtg(body: &str) -> Option<Vtg> {
    let fields: Vec<&str> = body.splitn(2, ',').nth(1)?.split(',').collect();
    let course_over_ground = fields.first().and_then(|s| s.parse().ok());
    let speed_over_ground = fields.get(4).and_then(|s| s.parse().ok());
    Some(Vtg {
        course_over_ground,
        speed_over_ground,
    })
}

/// Parses an NMEA `ddmm.mmmm`/`dddmm.mmmm` coordinate with its hemisphere
/// letter into signed decimal degrees.
fn parse_nmea_coord(value: &str, hemisphere: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    let dot = value.find('.')?;
    let deg_digits = dot.saturating_sub(2);
    let degrees: f64 = value[..deg_digits].parse().ok()?;
    let minutes: f64 = value[deg_digits..].parse().ok()?;
    let magnitude = degrees + minutes / 60.0;
    match hemisphere {
        "S" | "W" => Some(-magnitude),
        _ => Some(magnitude),
    }
}

/// A source of raw NMEA lines. Implemented for TCP and UDP endpoints below;
/// applications may supply their own (e.g. a file replay source) for tests.
#[async_trait::async_trait]
pub trait LineSource {
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from a TCP endpoint, reconnecting is left to the caller:
/// `next_line` returning an error or `Ok(None)` (EOF) signals the caller
/// should re-establish the connection via [`TcpSource::connect`].
pub struct TcpSource {
    lines: tokio::io::Lines<BufReader<TcpStream>>,
}

impl TcpSource {
    pub async fn connect(host: &str, port: u16) -> io::Result<Self> {
        let stream = TcpStream::connect((host, port)).await?;
        Ok(TcpSource {
            lines: BufReader::new(stream).lines(),
        })
    }

    /// Implements the downstream `setSource(host, port)` interface: drops
    /// the current connection and dials the new endpoint in its place.
    /// Any fragment reassembly in progress on the handler side is
    /// unaffected — only the byte source changes.
    pub async fn set_source(&mut self, host: &str, port: u16) -> io::Result<()> {
        *self = TcpSource::connect(host, port).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl LineSource for TcpSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

/// Reads individual datagrams from a UDP endpoint, one NMEA line per
/// datagram (as is conventional for AIS-over-UDP relays).
pub struct UdpSource {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl UdpSource {
    pub async fn bind(host: &str, port: u16) -> io::Result<Self> {
        let socket = UdpSocket::bind((host, port)).await?;
        Ok(UdpSource {
            socket,
            buf: vec![0u8; 4096],
        })
    }
}

#[async_trait::async_trait]
impl LineSource for UdpSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        let (len, _addr) = self.socket.recv_from(&mut self.buf).await?;
        Ok(Some(String::from_utf8_lossy(&self.buf[..len]).into_owned()))
    }
}

/// Replays NMEA lines from a plain-text file, one sentence per line. Useful
/// for offline replay of a captured feed; reaching EOF yields `Ok(None)`
/// rather than reconnecting, since a file has no "other end" to redial.
pub struct FileSource {
    lines: tokio::io::Lines<BufReader<File>>,
}

impl FileSource {
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path).await?;
        Ok(FileSource {
            lines: BufReader::new(file).lines(),
        })
    }
}

#[async_trait::async_trait]
impl LineSource for FileSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

/// Reads NMEA lines from the process's standard input, for piping a feed in
/// from another tool (`nc host port | aisnav --stdin`).
pub struct StdinSource {
    lines: tokio::io::Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        StdinSource {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LineSource for StdinSource {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rmc_sentence() {
        let line = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        let record = parse_line(line).unwrap();
        match record {
            Record::Rmc(rmc) => {
                assert!((rmc.lat - 48.1173).abs() < 1e-3);
                assert!((rmc.lon - 11.5167).abs() < 1e-3);
                assert_eq!(rmc.sog, 22.4);
                assert_eq!(rmc.track_made_good, Some(84.4));
            }
            _ => panic!("expected RMC"),
        }
    }

    #[test]
    fn void_rmc_fix_is_none() {
        let line = "$GPRMC,123519,V,,,,,,,230394,,*00";
        assert!(parse_rmc(line.trim_start_matches('$')).is_none());
    }

    #[test]
    fn parses_vdm_sentence() {
        let line = "!AIVDM,1,1,,A,E>kb9I99S@0`8@:9ah;0TahI7@@;V4=v:nv;h00003vP100,0*7A";
        let record = parse_line(line).unwrap();
        assert!(matches!(record, Record::Vdm(_)));
    }

    #[test]
    fn unrecognized_sentence_is_none() {
        assert!(parse_line("$GPGGA,123519,,,,,,,,,,,,,*00").is_none());
    }

    #[test]
    fn vdm_with_bad_checksum_is_discarded() {
        let line = "!AIVDM,1,1,,A,E>kb9I99S@0`8@:9ah;0TahI7@@;V4=v:nv;h00003vP100,0*00";
        assert!(parse_line(line).is_none());
    }

    #[test]
    fn southern_western_hemispheres_negate() {
        let lat = parse_nmea_coord("4807.038", "S").unwrap();
        assert!((lat - -48.1173).abs() < 1e-4);
        let lon = parse_nmea_coord("01131.000", "W").unwrap();
        assert!((lon - -11.5167).abs() < 1e-4);
    }

    #[tokio::test]
    async fn set_source_reconnects_to_new_endpoint() {
        use tokio::io::AsyncWriteExt;
        use tokio::net::TcpListener;

        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let first_addr = first.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = first.accept().await.unwrap();
            socket.write_all(b"from-first\n").await.unwrap();
        });

        let second = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let second_addr = second.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = second.accept().await.unwrap();
            socket.write_all(b"from-second\n").await.unwrap();
        });

        let mut source = TcpSource::connect(&first_addr.ip().to_string(), first_addr.port())
            .await
            .unwrap();
        assert_eq!(
            source.next_line().await.unwrap().as_deref(),
            Some("from-first")
        );

        source
            .set_source(&second_addr.ip().to_string(), second_addr.port())
            .await
            .unwrap();
        assert_eq!(
            source.next_line().await.unwrap().as_deref(),
            Some("from-second")
        );
    }

    #[tokio::test]
    async fn file_source_replays_lines_then_eofs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.nmea");
        tokio::fs::write(
            &path,
            b"!AIVDM,1,1,,A,E>kb9I99S@0`8@:9ah;0TahI7@@;V4=v:nv;h00003vP100,0*7A\n",
        )
        .await
        .unwrap();

        let mut source = FileSource::open(&path).await.unwrap();
        let line = source.next_line().await.unwrap().unwrap();
        assert!(matches!(parse_line(&line), Some(Record::Vdm(_))));
        assert!(source.next_line().await.unwrap().is_none());
    }
}
