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

//! odin_milmon polls a public feed of military aircraft, classifies each aircraft into a tactical
//! category and maintains the derived views (filtered aircraft table, offensive aircraft alerts) that
//! are shown in a terminal dashboard.
//!
//! The data flow is
//! ```text
//!   Monitor timer/refresh ─▶ Fetcher ─▶ parse + classify ─▶ snapshot ─▶ view::project (FilterState) ─▶ Renderer
//! ```
//! with the [`monitor::Monitor`] being the single owner of snapshot, filter state and event log.

use std::{fmt, path::Path, time::Duration};
use serde::{Serialize,Deserialize,Deserializer};

pub mod errors;
use errors::{OdinMilmonError,Result};

pub mod category;
use category::{Category,classify};

pub mod filter;
pub mod event_log;
pub mod view;
pub mod fetcher;
pub mod monitor;

pub mod console_ui;
pub mod tui;

pub const NO_CALLSIGN: &str = "NO CALL";
pub const UNKNOWN_TYPE: &str = "UNKNOWN";
pub const UNKNOWN_OWNER: &str = "Unknown";

/// a classified aircraft as reported by the feed. Instances are immutable - the category is
/// computed from the type code during construction and cannot get out of sync
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct MilAircraft {
    callsign: String,
    aircraft_type: String,
    owner: String,
    altitude: f64, // barometric altitude in ft, 0 means on ground
    speed: f64,    // ground speed in kts
    heading: f64,  // track in degrees [0,360)
    category: Category,
}

impl MilAircraft {
    /// blank text fields get their defaults, numeric values are clamped/normalized into their domain
    pub fn new (callsign: &str, aircraft_type: &str, owner: &str, altitude: f64, speed: f64, heading: f64)->Self {
        let callsign = non_blank( callsign, NO_CALLSIGN);
        let aircraft_type = non_blank( aircraft_type, UNKNOWN_TYPE);
        let owner = non_blank( owner, UNKNOWN_OWNER);
        let category = classify( Some(aircraft_type.as_str()));

        MilAircraft {
            callsign,
            aircraft_type,
            owner,
            altitude: non_negative( altitude),
            speed: non_negative( speed),
            heading: normalize_heading( heading),
            category
        }
    }

    pub fn callsign (&self)->&str { self.callsign.as_str() }
    pub fn aircraft_type (&self)->&str { self.aircraft_type.as_str() }
    pub fn owner (&self)->&str { self.owner.as_str() }
    pub fn altitude (&self)->f64 { self.altitude }
    pub fn speed (&self)->f64 { self.speed }
    pub fn heading (&self)->f64 { self.heading }
    pub fn category (&self)->Category { self.category }

    pub fn is_on_ground (&self)->bool { self.altitude == 0.0 }
}

impl fmt::Display for MilAircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "MilAircraft( cs: \"{}\", type: {}, owner: \"{}\", alt: {:.0}, spd: {:.0}, hdg: {:.0}, cat: {} )",
                self.callsign, self.aircraft_type, self.owner, self.altitude, self.speed, self.heading, self.category)
    }
}

fn non_blank (s: &str, default: &str)->String {
    let s = s.trim();
    if s.is_empty() { default.to_string() } else { s.to_string() }
}

fn non_negative (v: f64)->f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn normalize_heading (hdg: f64)->f64 {
    if hdg.is_finite() { hdg.rem_euclid(360.0) } else { 0.0 }
}

/* #region config ***************************************************************************************/

pub const DEFAULT_SOURCE: &str = "ADSB.lol";
pub const DEFAULT_URL: &str = "https://api.adsb.lol/v2/mil";
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_MAX_LOG_ENTRIES: usize = 1000;

#[derive(Deserialize,Debug,Clone)]
pub struct MilmonConfig {
    pub source: String, // display name of the feed
    pub url: String,    // feed endpoint
    #[serde(deserialize_with="deserialize_duration")]
    pub update_interval: Duration, // period of the refresh timer
    #[serde(deserialize_with="deserialize_duration")]
    pub fetch_timeout: Duration, // after which a fetch counts as failed
    pub max_log_entries: usize, // capacity of the system log ring
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for MilmonConfig {
    fn default()->Self {
        MilmonConfig {
            source: DEFAULT_SOURCE.to_string(),
            url: DEFAULT_URL.to_string(),
            update_interval: DEFAULT_UPDATE_INTERVAL,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_log_entries: DEFAULT_MAX_LOG_ENTRIES,
            user_agent: None,
        }
    }
}

impl MilmonConfig {
    pub fn check (&self)->Result<()> {
        if self.url.is_empty() { return Err( OdinMilmonError::ConfigError("empty feed url".into())) }
        if self.update_interval.is_zero() { return Err( OdinMilmonError::ConfigError("zero update_interval".into())) }
        if self.fetch_timeout.is_zero() { return Err( OdinMilmonError::ConfigError("zero fetch_timeout".into())) }
        if self.max_log_entries == 0 { return Err( OdinMilmonError::ConfigError("zero max_log_entries".into())) }
        Ok(())
    }
}

/// durations in config files are human readable strings such as "10s" or "1min 30s"
pub fn deserialize_duration <'a,D>(deserializer: D) -> std::result::Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse_duration::parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn config_from_str (s: &str)->Result<MilmonConfig> {
    let config: MilmonConfig = ron::from_str(s)?;
    config.check()?;
    Ok(config)
}

pub fn load_config (path: impl AsRef<Path>)->Result<MilmonConfig> {
    let s = std::fs::read_to_string( path.as_ref())?;
    config_from_str( &s)
}

/* #endregion config */
