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

use odin_milmon::category::{Category, CategorySet};
use odin_milmon::filter::{FilterState, FiltersChanged};

#[test]
fn test_initially_all_active () {
    let fs = FilterState::new();
    assert!( fs.active_set().is_all());
    assert!( fs.is_active( Category::Other));
}

#[test]
fn test_toggle_round_trip () {
    let mut fs = FilterState::new();
    let before = fs.active_set();

    let FiltersChanged(set) = fs.toggle( Category::Tanker, false);
    assert!( !set.contains( Category::Tanker));
    assert_eq!( set.len(), Category::COUNT - 1);
    assert!( !fs.is_active( Category::Tanker));

    fs.toggle( Category::Tanker, true);
    assert_eq!( fs.active_set(), before);
}

#[test]
fn test_redundant_toggle_still_notifies () {
    let mut fs = FilterState::new();
    let changed = fs.toggle( Category::Fighter, true);
    assert_eq!( changed, FiltersChanged( CategorySet::all()));
}

#[test]
fn test_active_set_is_a_copy () {
    let mut fs = FilterState::new();
    let mut copy = fs.active_set();
    copy.remove( Category::Bomber);
    assert!( fs.is_active( Category::Bomber));

    let held = fs.active_set();
    fs.toggle( Category::Uav, false);
    assert!( held.contains( Category::Uav));
    assert!( !fs.active_set().contains( Category::Uav));
}

#[test]
fn test_empty_set () {
    let mut fs = FilterState::with_active( CategorySet::empty());
    assert!( fs.active_set().is_empty());
    let FiltersChanged(set) = fs.toggle( Category::Helicopter, true);
    assert_eq!( set.iter().collect::<Vec<_>>(), vec![Category::Helicopter]);
}
