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

use chrono::{DateTime,Local};
use crate::{category::CategorySet, monitor::{MonitorView,Renderer}, view::TABLE_COLUMNS};

/// a simple Renderer that just prints to stdout. New system log lines are printed as they come in,
/// aircraft table and alerts are printed whenever a refresh has completed or the filters changed
pub struct ConsoleUI {
    show_rows: bool,
    printed_log: u64, // log_total of the last view we printed
    last_updated: Option<DateTime<Local>>,
    last_active: CategorySet,
}

impl ConsoleUI {
    pub fn new (show_rows: bool)->Self {
        ConsoleUI { show_rows, printed_log: 0, last_updated: None, last_active: CategorySet::all() }
    }

    fn print_new_log_lines (&mut self, view: &MonitorView) {
        let n_new = view.log_total.saturating_sub( self.printed_log) as usize;
        let n_new = n_new.min( view.log.len());
        for line in &view.log[view.log.len() - n_new..] {
            println!("{line}");
        }
        self.printed_log = view.log_total;
    }

    fn print_rows (&self, view: &MonitorView) {
        println!("-- {} of {} aircraft shown, filters: {}", view.rows.len(), view.total, view.active);
        println!("{:<10} {:<8} {:<32} {:>13} {:>11} {:>11}",
                 TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2], TABLE_COLUMNS[3], TABLE_COLUMNS[4], TABLE_COLUMNS[5]);
        for row in &view.rows {
            println!("{:<10} {:<8} {:<32} {:>13} {:>11} {:>11}",
                     row.callsign, row.aircraft_type, truncated( &row.owner, 32), row.altitude, row.speed, row.heading);
        }
    }
}

impl Renderer for ConsoleUI {
    fn render (&mut self, view: MonitorView) {
        self.print_new_log_lines( &view);

        if view.updated != self.last_updated {
            if self.show_rows { self.print_rows( &view) }
            println!("-- offensive aircraft alerts:\n{}", view.alert_text());

        } else if view.active != self.last_active && self.show_rows {
            self.print_rows( &view)
        }

        self.last_updated = view.updated;
        self.last_active = view.active;
    }
}

fn truncated (s: &str, max_chars: usize)->&str {
    match s.char_indices().nth( max_chars) {
        Some((idx,_)) => &s[..idx],
        None => s
    }
}
