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

use std::str::FromStr;
use odin_milmon::category::{Category, CategorySet, TYPE_TO_CATEGORY, classify, classify_with};

/// what classification has to return for a code: the first table entry that is a prefix of it
fn first_match (code: &str)->Category {
    let code = code.to_uppercase();
    TYPE_TO_CATEGORY.iter()
        .find( |(prefix,_)| code.starts_with(prefix))
        .map( |(_,cat)| *cat)
        .unwrap_or( Category::Other)
}

#[test]
fn test_known_prefixes () {
    for (prefix,_) in TYPE_TO_CATEGORY {
        let code = format!("{prefix}ZZ");
        let cat = classify( Some(code.as_str()));
        println!("{code:8} -> {cat}");
        assert_eq!( cat, first_match( &code));
        assert_eq!( classify( Some(*prefix)), first_match( prefix));
    }
}

#[test]
fn test_case_insensitive () {
    assert_eq!( classify( Some("f16")), Category::Fighter);
    assert_eq!( classify( Some("kc135")), Category::Tanker);
    assert_eq!( classify( Some("Rq4")), Category::Uav);
}

#[test]
fn test_common_codes () {
    assert_eq!( classify( Some("FA18C")), Category::Fighter);
    assert_eq!( classify( Some("F35")), Category::Fighter);
    assert_eq!( classify( Some("B52")), Category::Bomber);
    assert_eq!( classify( Some("K35R")), Category::Tanker);
    assert_eq!( classify( Some("C17")), Category::Transport);
    assert_eq!( classify( Some("E3TF")), Category::Awacs);
    assert_eq!( classify( Some("RC135")), Category::Special);
    assert_eq!( classify( Some("CH47")), Category::Helicopter);
    assert_eq!( classify( Some("MQ9")), Category::Uav);
    assert_eq!( classify( Some("T38")), Category::Trainer);
    assert_eq!( classify( Some("AN124")), Category::Transport);
}

#[test]
fn test_unclassified () {
    assert_eq!( classify( None), Category::Other);
    assert_eq!( classify( Some("")), Category::Other);
    assert_eq!( classify( Some("ZZZZ")), Category::Other);
    assert_eq!( classify( Some("B7")), Category::Other);
}

#[test]
fn test_table_order_wins () {
    // "H6" (bomber) comes before "H60" (helicopter)
    assert_eq!( classify( Some("H60")), Category::Bomber);
    assert_eq!( classify( Some("UH60")), Category::Helicopter);

    let table = [("H60", Category::Helicopter), ("H6", Category::Bomber)];
    assert_eq!( classify_with( &table, Some("H60")), Category::Helicopter);
    assert_eq!( classify_with( &table, Some("H6K")), Category::Bomber);
    assert_eq!( classify_with( &[], Some("F16")), Category::Other);
}

#[test]
fn test_category_names () {
    assert_eq!( Category::from_str("Fighter").unwrap(), Category::Fighter);
    assert_eq!( Category::from_str("uav").unwrap(), Category::Uav);
    assert!( Category::from_str("spaceship").is_err());
    assert_eq!( Category::Awacs.to_string(), "awacs");

    let set: CategorySet = [Category::Other, Category::Fighter].into_iter().collect();
    assert_eq!( set.to_string(), "{fighter,other}");
    assert_eq!( CategorySet::all().len(), Category::COUNT);
}
