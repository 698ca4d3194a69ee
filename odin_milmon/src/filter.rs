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

use crate::category::{Category,CategorySet};

/// notification for dependents of a [`FilterState`]. Carries the full resulting set, not a delta
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct FiltersChanged(pub CategorySet);

/// the set of categories that are currently shown in the aircraft table.
/// Updates replace the whole set value so readers never see a partial change
#[derive(Debug,Clone)]
pub struct FilterState {
    active: CategorySet,
}

impl FilterState {
    /// all categories enabled
    pub fn new ()->Self {
        FilterState { active: CategorySet::all() }
    }

    pub fn with_active (active: CategorySet)->Self {
        FilterState { active }
    }

    /// enable or disable a category. Setting a state that is already in effect does not change the
    /// set but still produces a notification
    pub fn toggle (&mut self, category: Category, enabled: bool)->FiltersChanged {
        self.active = self.active.with( category, enabled);
        FiltersChanged( self.active)
    }

    pub fn is_active (&self, category: Category)->bool {
        self.active.contains( category)
    }

    /// copy of the active set
    pub fn active_set (&self)->CategorySet {
        self.active
    }
}

impl Default for FilterState {
    fn default()->Self { Self::new() }
}
