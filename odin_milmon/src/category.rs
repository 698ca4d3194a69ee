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

//! the tactical category taxonomy and the type code classifier

use std::fmt;
use serde::{Serialize,Deserialize};
use strum::{Display, EnumIter, EnumString, AsRefStr, IntoEnumIterator};

/// the closed set of categories an aircraft can be in.
/// The variant order is the display order of the filter panel
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize,Display,EnumIter,EnumString,AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Category {
    Fighter,
    Bomber,
    Tanker,
    Transport,
    Awacs,
    Helicopter,
    Uav,
    Special,
    Trainer,
    Other,
}

impl Category {
    pub const COUNT: usize = 10;

    /// the lowercase tag ("fighter", "bomber", ..)
    pub fn tag (&self)->&'static str {
        match self {
            Category::Fighter => "fighter",
            Category::Bomber => "bomber",
            Category::Tanker => "tanker",
            Category::Transport => "transport",
            Category::Awacs => "awacs",
            Category::Helicopter => "helicopter",
            Category::Uav => "uav",
            Category::Special => "special",
            Category::Trainer => "trainer",
            Category::Other => "other",
        }
    }

    /// human readable label for filter panels
    pub fn label (&self)->&'static str {
        match self {
            Category::Fighter => "Fighter Jets",
            Category::Bomber => "Bombers",
            Category::Tanker => "Tankers / Refuelers",
            Category::Transport => "Transport / Cargo",
            Category::Awacs => "AWACS / Reconnaissance",
            Category::Helicopter => "Helicopters",
            Category::Uav => "UAVs / Drones",
            Category::Special => "Special Operations",
            Category::Trainer => "Trainers",
            Category::Other => "Other / Unknown",
        }
    }

    /// fighters and bombers are what we raise alerts for
    pub fn is_offensive (&self)->bool {
        matches!( self, Category::Fighter | Category::Bomber)
    }

    pub fn index (&self)->usize { *self as usize }

    pub fn from_index (idx: usize)->Option<Category> {
        Category::iter().nth(idx)
    }

    #[inline]
    fn bit (&self)->u16 { 1 << (*self as u16) }
}

/// ordered prefix table. The first entry whose prefix starts the (uppercased) type code wins, which
/// means earlier entries shadow later ones that share a start (e.g. "H6" shadows "H60").
pub static TYPE_TO_CATEGORY: &[(&str,Category)] = &[
    ("F14", Category::Fighter), ("F15", Category::Fighter), ("F16", Category::Fighter), ("F18", Category::Fighter),
    ("F22", Category::Fighter), ("F35", Category::Fighter), ("FA18", Category::Fighter), ("F/A", Category::Fighter),
    ("TYPH", Category::Fighter), ("EUFI", Category::Fighter), ("TORN", Category::Fighter), ("GRIP", Category::Fighter),
    ("SU27", Category::Fighter), ("SU30", Category::Fighter), ("SU35", Category::Fighter), ("SU57", Category::Fighter),
    ("MIG29", Category::Fighter), ("MIG31", Category::Fighter), ("MIG35", Category::Fighter), ("J20", Category::Fighter),

    ("B1", Category::Bomber), ("B2", Category::Bomber), ("B52", Category::Bomber),
    ("TU95", Category::Bomber), ("TU160", Category::Bomber), ("TU22", Category::Bomber), ("H6", Category::Bomber),

    ("KC10", Category::Tanker), ("KC135", Category::Tanker), ("KC46", Category::Tanker),
    ("K35R", Category::Tanker), ("A332", Category::Tanker), ("IL78", Category::Tanker), ("A310", Category::Tanker),

    ("C130", Category::Transport), ("C17", Category::Transport), ("C5", Category::Transport),
    ("A400", Category::Transport), ("IL76", Category::Transport), ("AN12", Category::Transport), ("AN22", Category::Transport),
    ("AN124", Category::Transport), ("AN225", Category::Transport),

    ("E3", Category::Awacs), ("E8", Category::Awacs), ("A50", Category::Awacs), ("KJ", Category::Awacs),
    ("RJ35", Category::Awacs), ("RC135", Category::Special), ("U2", Category::Special),

    ("H60", Category::Helicopter), ("AH64", Category::Helicopter), ("CH47", Category::Helicopter),
    ("UH60", Category::Helicopter), ("KA52", Category::Helicopter), ("MI24", Category::Helicopter),
    ("MI28", Category::Helicopter), ("MI8", Category::Helicopter),

    ("RQ4", Category::Uav), ("MQ9", Category::Uav), ("GLOB", Category::Uav), ("REAP", Category::Uav),
    ("TB2", Category::Uav), ("WING", Category::Uav),

    ("T38", Category::Trainer), ("HAWK", Category::Trainer), ("L39", Category::Trainer), ("M346", Category::Trainer),

    ("OC135", Category::Special), ("WC135", Category::Special),
];

/// map an aircraft type code to its category, using the built-in prefix table
pub fn classify (type_code: Option<&str>)->Category {
    classify_with( TYPE_TO_CATEGORY, type_code)
}

/// map a type code to a category using an explicit prefix table.
/// This is a total function: absent, empty and unmatched codes all end up as `Category::Other`
pub fn classify_with (table: &[(&str,Category)], type_code: Option<&str>)->Category {
    match type_code {
        Some(code) if !code.is_empty() => {
            let code = code.to_uppercase();
            table.iter()
                .find( |(prefix,_)| code.starts_with( prefix))
                .map( |(_,cat)| *cat)
                .unwrap_or( Category::Other)
        }
        _ => Category::Other
    }
}

/// a value type set of categories. Since this is `Copy` every accessor hands out an independent
/// snapshot - there is no way to reach into the storage of the owner
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default)]
pub struct CategorySet(u16);

impl CategorySet {
    const ALL_BITS: u16 = (1 << Category::COUNT) - 1;

    pub const fn empty ()->Self { CategorySet(0) }
    pub const fn all ()->Self { CategorySet(Self::ALL_BITS) }

    pub fn contains (&self, cat: Category)->bool { self.0 & cat.bit() != 0 }

    pub fn insert (&mut self, cat: Category) { self.0 |= cat.bit(); }
    pub fn remove (&mut self, cat: Category) { self.0 &= !cat.bit(); }

    /// returns a copy with the membership of `cat` set to `enabled`
    pub fn with (self, cat: Category, enabled: bool)->Self {
        let mut s = self;
        if enabled { s.insert(cat) } else { s.remove(cat) }
        s
    }

    pub fn len (&self)->usize { self.0.count_ones() as usize }
    pub fn is_empty (&self)->bool { self.0 == 0 }
    pub fn is_all (&self)->bool { self.0 == Self::ALL_BITS }

    /// members in taxonomy order
    pub fn iter (&self)->impl Iterator<Item=Category> + '_ {
        Category::iter().filter( |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item=Category>> (iter: I)->Self {
        let mut s = CategorySet::empty();
        for c in iter { s.insert(c) }
        s
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{{")?;
        for (i,c) in self.iter().enumerate() {
            if i > 0 { write!( f, ",")?; }
            write!( f, "{}", c.tag())?;
        }
        write!( f, "}}")
    }
}
