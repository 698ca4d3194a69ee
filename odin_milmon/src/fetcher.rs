/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! retrieval and parsing of the aircraft feed document.
//!
//! The expected document is an object with an `ac` array of aircraft entries, each of which can have
//! (all optional) `flight`, `t`, `owner`, `alt_baro`, `gs` and `track` fields:
//! ```json
//! { "ac": [ { "flight": "RCH123  ", "t": "C17", "owner": "United States Air Force", "alt_baro": 31000, "gs": 452.1, "track": 87.3 },
//!           { "t": "H60", "alt_baro": "ground" } ], ... }
//! ```

use std::{path::{Path,PathBuf}, time::Duration};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map,Value};
use tracing::debug;

use crate::{MilAircraft, MilmonConfig, errors::{Result,transport_error,malformed_data}};

/// abstraction of where we get the feed document from. Implementations should not retry, the
/// monitor timer is the retry mechanism
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch (&self)->Result<Value>;
}

/// HTTP(S) GET based fetcher for the configured feed url
pub struct LiveFetcher {
    client: Client,
    url: String,
}

impl LiveFetcher {
    pub fn new (config: &MilmonConfig)->Result<Self> {
        let mut builder = Client::builder().timeout( config.fetch_timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent( user_agent.as_str());
        }
        let client = builder.build()?;

        Ok( LiveFetcher { client, url: config.url.clone() } )
    }
}

#[async_trait]
impl Fetcher for LiveFetcher {
    async fn fetch (&self)->Result<Value> {
        let response = self.client.get( &self.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!("received {} bytes from {}", bytes.len(), self.url);

        Ok( serde_json::from_slice( &bytes)? )
    }
}

/// reads the feed document from a local file, which is useful to replay a recorded feed
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new (path: impl AsRef<Path>)->Self {
        FileFetcher { path: path.as_ref().to_path_buf() }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch (&self)->Result<Value> {
        let bytes = tokio::fs::read( &self.path).await
            .map_err( |e| transport_error!("cannot read {:?}: {}", self.path, e))?;
        Ok( serde_json::from_slice( &bytes)? )
    }
}

/// run the fetcher with a bound on how long it can take and parse the result.
/// Exceeding the timeout is a transport error
pub async fn fetch_aircraft (fetcher: &dyn Fetcher, timeout: Duration)->Result<Vec<MilAircraft>> {
    match tokio::time::timeout( timeout, fetcher.fetch()).await {
        Ok(res) => parse_aircraft_list( &res?),
        Err(_) => Err( transport_error!("fetch timed out after {:?}", timeout))
    }
}

/// turn a feed document into classified aircraft, in feed order.
/// A document without `ac` field has no aircraft
pub fn parse_aircraft_list (doc: &Value)->Result<Vec<MilAircraft>> {
    let obj = doc.as_object().ok_or_else( || malformed_data!("feed document is not an object"))?;

    match obj.get("ac") {
        None | Some(Value::Null) => Ok( Vec::new() ),
        Some(Value::Array(entries)) => {
            let mut list = Vec::with_capacity( entries.len());
            for (i,entry) in entries.iter().enumerate() {
                let entry = entry.as_object().ok_or_else( || malformed_data!("aircraft entry {i} is not an object"))?;
                list.push( parse_aircraft( entry)?);
            }
            Ok(list)
        }
        Some(_) => Err( malformed_data!("'ac' is not an array"))
    }
}

pub fn parse_aircraft (entry: &Map<String,Value>)->Result<MilAircraft> {
    let callsign = opt_str( entry, "flight")?.unwrap_or_default();
    let aircraft_type = opt_str( entry, "t")?.unwrap_or_default();
    let owner = opt_str( entry, "owner")?.unwrap_or_default();

    let altitude = match entry.get("alt_baro") {
        Some(Value::String(s)) if s.trim().eq_ignore_ascii_case("ground") => 0.0,
        _ => opt_f64( entry, "alt_baro")?.unwrap_or(0.0)
    };
    let speed = opt_f64( entry, "gs")?.unwrap_or(0.0);
    let heading = opt_f64( entry, "track")?.unwrap_or(0.0);

    // blank strings and out of domain numbers are normalized by the constructor
    Ok( MilAircraft::new( callsign, aircraft_type, owner, altitude, speed, heading) )
}

fn opt_str<'a> (entry: &'a Map<String,Value>, key: &str)->Result<Option<&'a str>> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(v) => Err( malformed_data!("'{key}' is not a string: {v}"))
    }
}

fn opt_f64 (entry: &Map<String,Value>, key: &str)->Result<Option<f64>> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => s.trim().parse::<f64>()
            .map( Some)
            .map_err( |_| malformed_data!("'{key}' is not a number: {s:?}")),
        Some(v) => Err( malformed_data!("'{key}' is not a number: {v}"))
    }
}
