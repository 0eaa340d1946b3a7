/*
 * Copyright 2025 RoomAccess Authors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Room media-routing topology.
//!
//! The topology decides how media flows between participants and which
//! backend configuration profile a token must be scoped to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media-routing mode for a room.
///
/// The wire encoding is the exact strings `"P2P"`, `"SFU"` and
/// `"SFU Recording"` (case-sensitive), used in configuration documents and
/// UI selection values alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Direct peer-to-peer media between participants.
    #[serde(rename = "P2P")]
    P2p,
    /// Media routed through a selective forwarding unit.
    #[serde(rename = "SFU")]
    Sfu,
    /// SFU routing with server-side recording enabled.
    #[serde(rename = "SFU Recording")]
    SfuRecording,
}

impl Topology {
    /// All topologies, in presentation order.
    pub const ALL: [Topology; 3] = [Topology::P2p, Topology::Sfu, Topology::SfuRecording];

    /// The canonical wire string for this topology.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::P2p => "P2P",
            Topology::Sfu => "SFU",
            Topology::SfuRecording => "SFU Recording",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = ParseTopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P2P" => Ok(Topology::P2p),
            "SFU" => Ok(Topology::Sfu),
            "SFU Recording" => Ok(Topology::SfuRecording),
            other => Err(ParseTopologyError {
                value: other.to_string(),
            }),
        }
    }
}

/// A string that is not one of the canonical topology values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTopologyError {
    value: String,
}

impl ParseTopologyError {
    /// The rejected input value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topology '{}'", self.value)
    }
}

impl std::error::Error for ParseTopologyError {}
