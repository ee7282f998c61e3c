//! The handler: reassembles multi-fragment VDM payloads, tracks our own
//! vessel's position, indexes the most recent message of each type per
//! MMSI, and drives the `we`/`they` application callbacks.

use std::collections::HashMap;

use crate::geo::Pcs;
use crate::messages::{self, AisMessage, TYPE_24A_KEY, TYPE_24B_KEY};
use crate::sentence::Vdm;
use crate::transport::Rmc;

/// Caps the reassembly buffer so a pathological stream (missing terminal
/// fragments forever) can't grow `_payload` without bound.
const MAX_PAYLOAD_CHARS: usize = 1024 * 9;

/// Application-provided event callbacks. Every method has a no-op default;
/// override only the ones the application cares about.
pub trait AisEventHandler {
    /// Invoked once per RMC, with our own newly-updated position/course/speed.
    fn we(&mut self, _us: Pcs) {}

    /// Invoked at most once per completed VDM that yields a position-bearing
    /// message, when our own position is already known.
    fn they(&mut self, _us: Pcs, _them: Pcs, _mmsi: u32) {}

    /// Called with a freshly-decoded shipname/aid-name before it replaces
    /// the handler's name index; override to persist it elsewhere. The
    /// returned string is what actually gets stored.
    fn name_for(&mut self, _mmsi: u32, shipname: &str) -> String {
        shipname.to_string()
    }
}

/// Reassembles AIS VDM fragments and indexes decoded messages by MMSI.
pub struct Handler<H: AisEventHandler> {
    callbacks: H,
    us: Option<Pcs>,
    payload: String,
    last_msg_id: Option<u8>,
    names: HashMap<u32, String>,
    static_msgs: HashMap<u32, HashMap<u16, AisMessage>>,
}

impl<H: AisEventHandler> Handler<H> {
    pub fn new(callbacks: H) -> Self {
        Handler {
            callbacks,
            us: None,
            payload: String::new(),
            last_msg_id: None,
            names: HashMap::new(),
            static_msgs: HashMap::new(),
        }
    }

    /// Updates our own position/course/speed from an RMC fix and invokes `we`.
    pub fn handle_rmc(&mut self, rmc: &Rmc) {
        let us = Pcs::new(
            Some(rmc.lat),
            Some(rmc.lon),
            Some(rmc.track_made_good.unwrap_or(0.0)),
            Some(rmc.sog),
        );
        self.us = Some(us);
        self.callbacks.we(us);
    }

    /// VTG and other generic position fixes are reserved for future
    /// extension; the core takes no action on them.
    pub fn handle_vtg(&mut self) {}

    /// Pos (generic position fix) is likewise accepted and ignored.
    pub fn handle_pos(&mut self) {}

    /// Accumulates one VDM fragment; once the chain is complete, decodes it
    /// and dispatches the resulting message.
    pub fn handle_vdm(&mut self, vdm: &Vdm) {
        self.payload.push_str(&vdm.payload);
        if self.payload.len() > MAX_PAYLOAD_CHARS {
            log::warn!("AIS reassembly buffer exceeded {} chars, discarding", MAX_PAYLOAD_CHARS);
            self.reset_buffer();
            return;
        }

        if vdm.fragment < vdm.fragments {
            match self.last_msg_id {
                None => self.last_msg_id = vdm.msg_id,
                Some(expected) if Some(expected) != vdm.msg_id => {
                    log::debug!(
                        "out-of-sequence AIS fragment (expected msg id {:?}, got {:?}); discarding fragment, buffer preserved",
                        self.last_msg_id,
                        vdm.msg_id
                    );
                }
                _ => {}
            }
            return;
        }

        let decoded = messages::parse(&self.payload);
        self.reset_buffer();
        let Some(msg) = decoded else {
            return;
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: AisMessage) {
        let mmsi = msg.mmsi();
        match &msg {
            AisMessage::Type5(m) => {
                self.set_name(mmsi, &m.shipname);
                self.stash(mmsi, 5, msg.clone());
            }
            AisMessage::Type24A(m) => {
                self.set_name(mmsi, &m.shipname);
                self.stash(mmsi, TYPE_24A_KEY, msg.clone());
            }
            AisMessage::Type24B(_) => {
                self.stash(mmsi, TYPE_24B_KEY, msg.clone());
            }
            AisMessage::Type18(m) => {
                self.stash(mmsi, 18, msg.clone());
                if let (Some(us), Some(course), Some(lat), Some(lon)) =
                    (self.us, m.course, m.lat, m.lon)
                {
                    let them = Pcs::new(Some(lat), Some(lon), Some(course), m.sog);
                    self.callbacks.they(us, them, mmsi);
                }
            }
            AisMessage::Type1(cnb) | AisMessage::Type2(cnb) | AisMessage::Type3(cnb) => {
                let key = cnb.msg_type as u16;
                if let (Some(us), Some(course), Some(lat), Some(lon)) =
                    (self.us, cnb.course, cnb.lat, cnb.lon)
                {
                    let them = Pcs::new(Some(lat), Some(lon), Some(course), cnb.sog);
                    self.callbacks.they(us, them, mmsi);
                }
                self.stash(mmsi, key, msg.clone());
            }
            AisMessage::Type21(m) => {
                self.set_name(mmsi, &m.name);
                if let (Some(us), Some(lat), Some(lon)) = (self.us, m.lat, m.lon) {
                    let them = Pcs::new(Some(lat), Some(lon), Some(0.0), Some(0.0));
                    self.callbacks.they(us, them, mmsi);
                }
                self.stash(mmsi, 21, msg.clone());
            }
        }
    }

    fn set_name(&mut self, mmsi: u32, shipname: &str) {
        let stored = self.callbacks.name_for(mmsi, shipname);
        self.names.insert(mmsi, stored);
    }

    fn stash(&mut self, mmsi: u32, key: u16, msg: AisMessage) {
        self.static_msgs.entry(mmsi).or_default().insert(key, msg);
    }

    fn reset_buffer(&mut self) {
        self.payload.clear();
        self.last_msg_id = None;
    }

    /// The most recently reported name for `mmsi`, if any.
    pub fn name(&self, mmsi: u32) -> Option<&str> {
        self.names.get(&mmsi).map(String::as_str)
    }

    /// The most recent message of type `key` received from `mmsi`. Use the
    /// message's own wire type for `Cnb`/`Type5`/`Type18`/`Type21`, and
    /// [`TYPE_24A_KEY`]/[`TYPE_24B_KEY`] for the two Type 24 parts.
    pub fn most_recent_message(&self, mmsi: u32, key: u16) -> Option<&AisMessage> {
        self.static_msgs.get(&mmsi)?.get(&key)
    }

    /// A read-only snapshot of every message type received from `mmsi`.
    pub fn most_recent_messages(&self, mmsi: u32) -> HashMap<u16, AisMessage> {
        self.static_msgs.get(&mmsi).cloned().unwrap_or_default()
    }

    pub fn us(&self) -> Option<Pcs> {
        self.us
    }
}
