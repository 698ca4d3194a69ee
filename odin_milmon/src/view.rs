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

//! derived views of a snapshot: the filtered aircraft table and the (unfiltered) offensive alert list

use num_format::{Locale, ToFormattedString};
use crate::{MilAircraft, category::{Category,CategorySet}};

pub const NO_ALERTS_MSG: &str = "No offensive aircraft currently detected.";
pub const GROUND: &str = "Ground";

pub const TABLE_COLUMNS: [&str;6] = ["Callsign", "Type", "Owner", "Altitude (ft)", "Speed (kts)", "Heading (°)"];

/// a formatted aircraft table row
#[derive(Debug,Clone,PartialEq)]
pub struct AircraftRow {
    pub callsign: String,
    pub aircraft_type: String,
    pub owner: String,
    pub altitude: String,
    pub speed: String,
    pub heading: String,
    pub category: Category,
}

impl AircraftRow {
    pub fn from_aircraft (ac: &MilAircraft)->Self {
        AircraftRow {
            callsign: ac.callsign().to_string(),
            aircraft_type: ac.aircraft_type().to_string(),
            owner: ac.owner().to_string(),
            altitude: format_altitude( ac.altitude()),
            speed: format_grouped( ac.speed()),
            heading: format_heading( ac.heading()),
            category: ac.category(),
        }
    }

    pub fn cells (&self)->[&str;6] {
        [ self.callsign.as_str(), self.aircraft_type.as_str(), self.owner.as_str(),
          self.altitude.as_str(), self.speed.as_str(), self.heading.as_str() ]
    }
}

/// the pair of views derived from a snapshot and a filter set
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Projection {
    pub rows: Vec<AircraftRow>,
    pub alerts: Vec<String>,
}

impl Projection {
    /// alert lines joined by newlines, or the placeholder message if there are none
    pub fn alert_text (&self)->String {
        alert_text( &self.alerts)
    }
}

pub fn alert_text (alerts: &[String])->String {
    if alerts.is_empty() { NO_ALERTS_MSG.to_string() } else { alerts.join("\n") }
}

/// compute both views. Table rows keep snapshot order and honor the filter, alerts ignore it
pub fn project (snapshot: &[MilAircraft], active: CategorySet)->Projection {
    let rows = snapshot.iter()
        .filter( |ac| active.contains( ac.category()))
        .map( AircraftRow::from_aircraft)
        .collect();

    let alerts = snapshot.iter()
        .filter( |ac| is_alert( ac))
        .map( alert_line)
        .collect();

    Projection { rows, alerts }
}

/// airborne fighters and bombers
pub fn is_alert (ac: &MilAircraft)->bool {
    ac.category().is_offensive() && ac.altitude() > 0.0
}

pub fn alert_line (ac: &MilAircraft)->String {
    format!("• {} | {} | {} | {} ft | {} kts | {}",
        ac.callsign(), ac.aircraft_type(), ac.owner(),
        format_grouped( ac.altitude()), format_grouped( ac.speed()), format_heading( ac.heading()))
}

pub fn format_altitude (alt: f64)->String {
    if alt == 0.0 { GROUND.to_string() } else { format_grouped( alt) }
}

/// integer value with thousands separators ("30,000")
pub fn format_grouped (v: f64)->String {
    (v.round_ties_even() as i64).to_formatted_string( &Locale::en)
}

pub fn format_heading (hdg: f64)->String {
    format!("{:.0}°", hdg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formats () {
        assert_eq!( format_grouped( 0.0), "0");
        assert_eq!( format_grouped( 999.4), "999");
        assert_eq!( format_grouped( 30000.0), "30,000");
        assert_eq!( format_grouped( 1234567.8), "1,234,568");
        assert_eq!( format_altitude( 0.0), "Ground");
        assert_eq!( format_altitude( 12500.0), "12,500");
        assert_eq!( format_heading( 270.2), "270°");
    }
}
