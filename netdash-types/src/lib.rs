/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Wire types for the netdash speed-test backend API.
//!
//! The backend serializes one row per measurement; `GET /api/stats` returns
//! either a JSON array of [`MetricSample`] ordered oldest-first, or `null`
//! when the endpoint has nothing to report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One speed-test measurement as stored and served by the backend.
///
/// Speeds are Mbps, ping is milliseconds, packet loss is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    #[serde(default)]
    pub id: u64,
    pub download: f64,
    pub upload: f64,
    pub ping: f64,
    pub packet_loss: f64,
    #[serde(default)]
    pub isp: String,
    #[serde(default)]
    pub server_id: i64,
    #[serde(default)]
    pub server_name: String,
    pub created_at: DateTime<Utc>,
}
