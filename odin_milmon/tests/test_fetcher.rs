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

#![allow(unused)]

use std::time::Duration;
use serde_json::json;
use odin_milmon::{MilAircraft, NO_CALLSIGN, UNKNOWN_OWNER, UNKNOWN_TYPE};
use odin_milmon::category::{Category, CategorySet};
use odin_milmon::errors::OdinMilmonError;
use odin_milmon::fetcher::{FileFetcher, fetch_aircraft, parse_aircraft_list};
use odin_milmon::view::project;

const SAMPLE: &str = "resources/mil_sample.json";

#[tokio::test]
async fn test_sample_file () {
    let fetcher = FileFetcher::new( SAMPLE);
    let list = fetch_aircraft( &fetcher, Duration::from_secs(5)).await.unwrap();
    for ac in &list { println!("{ac}") }

    assert_eq!( list.len(), 9);
    assert_eq!( list[0].callsign(), "RCH123");
    assert_eq!( list[0].category(), Category::Transport);
    assert_eq!( list[3].callsign(), NO_CALLSIGN);
    assert_eq!( list[3].owner(), UNKNOWN_OWNER);
    assert!( list[3].is_on_ground());
    assert_eq!( list[7].aircraft_type(), UNKNOWN_TYPE);
    assert_eq!( list[7].category(), Category::Other);

    let p = project( &list, CategorySet::all());
    assert_eq!( p.rows.len(), 9);
    assert_eq!( p.alerts, vec![
        "• VIPER01 | F16 | United States Air Force | 25,000 ft | 480 kts | 270°".to_string(),
        "• DOOM21 | B52 | United States Air Force | 35,000 ft | 441 kts | 45°".to_string(),
        "• GAF123 | EUFI | Luftwaffe | 12,000 ft | 396 kts | 92°".to_string(),
    ]);
}

#[tokio::test]
async fn test_missing_file () {
    let fetcher = FileFetcher::new( "resources/does_not_exist.json");
    let res = fetch_aircraft( &fetcher, Duration::from_secs(5)).await;
    assert!( matches!( res, Err(OdinMilmonError::TransportError(_))));
}

#[test]
fn test_defaults () {
    let doc = json!({ "ac": [ {} ] });
    let list = parse_aircraft_list( &doc).unwrap();
    let ac = &list[0];
    assert_eq!( ac.callsign(), NO_CALLSIGN);
    assert_eq!( ac.aircraft_type(), UNKNOWN_TYPE);
    assert_eq!( ac.owner(), UNKNOWN_OWNER);
    assert_eq!( ac.altitude(), 0.0);
    assert_eq!( ac.speed(), 0.0);
    assert_eq!( ac.heading(), 0.0);
    assert_eq!( ac.category(), Category::Other);
}

#[test]
fn test_field_values () {
    let doc = json!({ "ac": [
        { "flight": "  BONE11 ", "t": "b1", "alt_baro": "GROUND", "gs": "420.5", "track": -90 },
        { "flight": "", "t": "F35", "alt_baro": 33000.4, "gs": null, "track": 725 }
    ]});
    let list = parse_aircraft_list( &doc).unwrap();

    assert_eq!( list[0].callsign(), "BONE11");
    assert_eq!( list[0].category(), Category::Bomber);
    assert!( list[0].is_on_ground());
    assert_eq!( list[0].speed(), 420.5);
    assert_eq!( list[0].heading(), 270.0);

    assert_eq!( list[1].callsign(), NO_CALLSIGN);
    assert_eq!( list[1].altitude(), 33000.4);
    assert_eq!( list[1].speed(), 0.0);
    assert_eq!( list[1].heading(), 5.0);
}

#[test]
fn test_empty_documents () {
    assert!( parse_aircraft_list( &json!({})).unwrap().is_empty());
    assert!( parse_aircraft_list( &json!({ "ac": null })).unwrap().is_empty());
    assert!( parse_aircraft_list( &json!({ "ac": [] })).unwrap().is_empty());
}

#[test]
fn test_malformed_documents () {
    let bad = [
        json!([1,2,3]),
        json!({ "ac": 42 }),
        json!({ "ac": "F16" }),
        json!({ "ac": [ "F16" ] }),
        json!({ "ac": [ { "t": 16 } ] }),
        json!({ "ac": [ { "alt_baro": "high" } ] }),
        json!({ "ac": [ { "gs": [1] } ] }),
    ];
    for doc in &bad {
        let res = parse_aircraft_list( doc);
        println!("{doc} -> {res:?}");
        assert!( matches!( res, Err(OdinMilmonError::MalformedDataError(_))));
    }
}
