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
use odin_milmon::{MilmonConfig, config_from_str, load_config, errors::OdinMilmonError};

#[test]
fn test_load_sample_config () {
    let config = load_config("configs/milmon.ron").unwrap();
    println!("{config:#?}");
    assert_eq!( config.source, "ADSB.lol");
    assert_eq!( config.update_interval, Duration::from_secs(10));
    assert_eq!( config.fetch_timeout, Duration::from_secs(20));
    assert_eq!( config.max_log_entries, 1000);
    assert!( config.user_agent.is_some());
}

#[test]
fn test_durations () {
    let config = config_from_str( r#"MilmonConfig(
        source: "test", url: "http://localhost:8080/mil", update_interval: "1min 30s", fetch_timeout: "500ms", max_log_entries: 50
    )"#).unwrap();
    assert_eq!( config.update_interval, Duration::from_secs(90));
    assert_eq!( config.fetch_timeout, Duration::from_millis(500));
    assert!( config.user_agent.is_none());
}

#[test]
fn test_invalid_config () {
    let res = config_from_str( r#"MilmonConfig( source: "test", url: "", update_interval: "10s", fetch_timeout: "20s", max_log_entries: 10 )"#);
    assert!( matches!( res, Err(OdinMilmonError::ConfigError(_))));

    let res = config_from_str( r#"MilmonConfig( source: "test", url: "x", update_interval: "often", fetch_timeout: "20s", max_log_entries: 10 )"#);
    assert!( matches!( res, Err(OdinMilmonError::RonError(_))));

    assert!( MilmonConfig::default().check().is_ok());
}
