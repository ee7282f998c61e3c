//! AIS/NMEA 0183 decoding and CPA/TCPA navigation core.
//!
//! [`sentence`] frames individual NMEA lines into [`sentence::Vdm`] records;
//! [`handler`] reassembles multi-fragment payloads and decodes them via
//! [`messages`] into [`messages::AisMessage`] values, driving application
//! callbacks as our own and other vessels' positions become known;
//! [`geo`] turns two such positions into range, bearing, and CPA/TCPA.
//! [`transport`] is the thin async line source that feeds [`handler::Handler`]
//! from a live TCP or UDP feed.

pub mod bits;
pub mod errors;
pub mod geo;
pub mod handler;
pub mod messages;
pub mod sentence;
pub mod transport;

#[cfg(test)]
mod test_helpers;
