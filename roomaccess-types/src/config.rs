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

//! Per-environment video configuration document.

use serde::{Deserialize, Serialize};

use crate::topology::Topology;

/// Per-topology configuration-profile identifiers for one deployment
/// environment, as served by the configuration endpoint.
///
/// # Example document
///
/// ```json
/// {
///   "p2p": "CPp2p0000",
///   "sfu": "CPsfu0000",
///   "sfuRecording": "CPrec0000"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p2p: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sfu_recording: Option<String>,
}

impl VideoConfiguration {
    /// Look up the configuration profile sid for a topology.
    ///
    /// An empty value is treated the same as an absent one; callers decide
    /// how to surface a missing mapping.
    pub fn sid(&self, topology: Topology) -> Option<&str> {
        let sid = match topology {
            Topology::P2p => self.p2p.as_deref(),
            Topology::Sfu => self.sfu.as_deref(),
            Topology::SfuRecording => self.sfu_recording.as_deref(),
        };
        sid.filter(|s| !s.is_empty())
    }
}
