//! Demo CLI: streams NMEA lines from a TCP endpoint, decodes AIS traffic, and
//! reports CPA/TCPA against our own position whenever both are known.

use aisnav::geo::{bearing, cpa, range, tcpa, Pcs};
use aisnav::handler::{AisEventHandler, Handler};
use aisnav::transport::{parse_line, FileSource, LineSource, Record, StdinSource, TcpSource};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Host to connect to for the NMEA feed (ignored if --file or --stdin is given)
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port to connect to for the NMEA feed
    #[arg(long, default_value_t = 10110)]
    port: u16,

    /// Replay a captured NMEA feed from a file instead of connecting over TCP
    #[arg(long)]
    file: Option<String>,

    /// Read the NMEA feed from standard input instead of connecting over TCP
    #[arg(long)]
    stdin: bool,
}

struct Printer;

impl AisEventHandler for Printer {
    fn we(&mut self, us: Pcs) {
        log::info!("we: {:?}", us);
    }

    fn they(&mut self, us: Pcs, them: Pcs, mmsi: u32) {
        let (Some(us_lat), Some(us_lon)) = (us.lat, us.lon) else {
            return;
        };
        let (Some(them_lat), Some(them_lon)) = (them.lat, them.lon) else {
            return;
        };
        let r = range(us_lat, us_lon, them_lat, them_lon);
        let b = bearing(us_lat, us_lon, them_lat, them_lon);
        let t = tcpa(&us, &them);
        let c = cpa(&us, &them, t);
        println!(
            "mmsi {mmsi}: range {r:.2} nm, bearing {b:.1}, tcpa {:?} h, cpa {:?} nm",
            t, c
        );
    }

    fn name_for(&mut self, mmsi: u32, shipname: &str) -> String {
        log::debug!("mmsi {mmsi} identifies as {shipname:?}");
        shipname.to_string()
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut handler = Handler::new(Printer);

    let mut source: Box<dyn LineSource> = if let Some(path) = &args.file {
        Box::new(FileSource::open(path).await?)
    } else if args.stdin {
        Box::new(StdinSource::new())
    } else {
        Box::new(TcpSource::connect(&args.host, args.port).await?)
    };

    loop {
        let Some(line) = source.next_line().await? else {
            log::warn!("feed exhausted, exiting");
            return Ok(());
        };
        match parse_line(&line) {
            Some(Record::Rmc(rmc)) => handler.handle_rmc(&rmc),
            Some(Record::Vtg(_)) => handler.handle_vtg(),
            Some(Record::Pos(_)) => handler.handle_pos(),
            Some(Record::Vdm(vdm)) => handler.handle_vdm(&vdm),
            None => {}
        }
    }
}
