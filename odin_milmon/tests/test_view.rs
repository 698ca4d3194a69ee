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

use odin_milmon::MilAircraft;
use odin_milmon::category::{Category, CategorySet};
use odin_milmon::view::{self, NO_ALERTS_MSG, project};

fn viper ()->MilAircraft {
    MilAircraft::new( "VIPER01", "F16", "United States Air Force", 30000.0, 450.0, 90.0)
}

#[test]
fn test_single_fighter () {
    let snapshot = vec![ viper() ];
    let p = project( &snapshot, CategorySet::all());

    assert_eq!( p.rows.len(), 1);
    assert_eq!( p.rows[0].category, Category::Fighter);
    assert_eq!( p.rows[0].cells(), ["VIPER01", "F16", "United States Air Force", "30,000", "450", "90°"]);

    assert_eq!( p.alerts, vec![ "• VIPER01 | F16 | United States Air Force | 30,000 ft | 450 kts | 90°".to_string() ]);
    println!("{}", p.alert_text());
}

#[test]
fn test_alerts_ignore_filters () {
    let snapshot = vec![ viper() ];
    let active = CategorySet::all().with( Category::Fighter, false);
    let p = project( &snapshot, active);

    assert!( p.rows.is_empty());
    assert_eq!( p.alerts.len(), 1);
}

#[test]
fn test_ground_aircraft () {
    let snapshot = vec![
        MilAircraft::new( "NAVY18", "FA18", "United States Navy", 0.0, 12.0, 355.0),
        MilAircraft::new( "", "B52", "", -50.0, 0.0, 0.0),
    ];
    let p = project( &snapshot, CategorySet::all());

    assert_eq!( p.rows.len(), 2);
    assert_eq!( p.rows[0].altitude, "Ground");
    assert_eq!( p.rows[1].altitude, "Ground");
    assert_eq!( p.rows[1].callsign, "NO CALL");
    assert_eq!( p.rows[1].owner, "Unknown");
    assert!( p.alerts.is_empty());
    assert_eq!( p.alert_text(), NO_ALERTS_MSG);
}

#[test]
fn test_type_variant_classification () {
    let ac = MilAircraft::new( "HORNET1", "FA18C", "United States Navy", 20000.0, 400.0, 10.0);
    assert_eq!( ac.category(), Category::Fighter);
    assert!( view::is_alert( &ac));
}

#[test]
fn test_feed_order_preserved () {
    let snapshot = vec![
        MilAircraft::new( "C1", "C17", "", 31000.0, 452.0, 87.0),
        MilAircraft::new( "F1", "F22", "", 40000.0, 500.0, 0.0),
        MilAircraft::new( "K1", "K35R", "", 28000.0, 410.0, 180.0),
        MilAircraft::new( "B1", "B2", "", 45000.0, 480.0, 270.0),
        MilAircraft::new( "F2", "SU35", "", 15000.0, 520.0, 45.0),
    ];

    let p = project( &snapshot, CategorySet::all());
    let callsigns: Vec<&str> = p.rows.iter().map( |r| r.callsign.as_str()).collect();
    assert_eq!( callsigns, vec!["C1", "F1", "K1", "B1", "F2"]);
    let alert_cs: Vec<&str> = p.alerts.iter().map( |a| a.split(" | ").next().unwrap_or("")).collect();
    assert_eq!( alert_cs, vec!["• F1", "• B1", "• F2"]);

    let active: CategorySet = [Category::Transport, Category::Tanker].into_iter().collect();
    let p = project( &snapshot, active);
    let callsigns: Vec<&str> = p.rows.iter().map( |r| r.callsign.as_str()).collect();
    assert_eq!( callsigns, vec!["C1", "K1"]);
    assert_eq!( p.alerts.len(), 3);
}

#[test]
fn test_empty_snapshot () {
    let p = project( &[], CategorySet::all());
    assert!( p.rows.is_empty());
    assert_eq!( p.alert_text(), NO_ALERTS_MSG);
}

#[test]
fn test_rounding () {
    let ac = MilAircraft::new( "R1", "TU95", "", 12345.6, 301.5, 359.4);
    let p = project( &[ac], CategorySet::all());
    assert_eq!( p.rows[0].altitude, "12,346");
    assert_eq!( p.rows[0].speed, "302");
    assert_eq!( p.rows[0].heading, "359°");
    assert_eq!( p.alerts[0], "• R1 | TU95 | Unknown | 12,346 ft | 302 kts | 359°");
}
