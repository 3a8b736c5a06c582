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
 */

//! Thin fetch client for the netdash backend.

use crate::constants::{API_STATS_URL, STATUS_PARTIAL_URL};
use netdash_types::MetricSample;
use reqwasm::http::Request;

#[derive(Debug, Clone)]
pub enum FetchError {
    Network(String),
    Decode(String),
    Status(u16),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "network error: {e}"),
            FetchError::Decode(e) => write!(f, "decode error: {e}"),
            FetchError::Status(code) => write!(f, "unexpected status: {code}"),
        }
    }
}

/// Fetch the measurement history backing the chart.
///
/// The backend returns the samples oldest-first, or a literal `null` body
/// when it has nothing to report; `null` maps to `None`.
pub async fn fetch_stats() -> Result<Option<Vec<MetricSample>>, FetchError> {
    let response = Request::get(API_STATS_URL)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !(200..300).contains(&response.status()) {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<Option<Vec<MetricSample>>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the server-rendered status widget as raw markup.
pub async fn fetch_status_fragment() -> Result<String, FetchError> {
    let response = Request::get(STATUS_PARTIAL_URL)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !(200..300).contains(&response.status()) {
        return Err(FetchError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
