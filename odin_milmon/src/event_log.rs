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

//! the user visible system log. This is a bounded ring of timestamped [`MonitorEvent`]s that also
//! forwards each event to `tracing`

use std::{collections::VecDeque, fmt};
use chrono::{DateTime,Local};
use tracing::{info,error};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// what gets reported to the system log
#[derive(Debug,Clone,PartialEq)]
pub enum MonitorEvent {
    Started,
    Fetching { source: String },
    FetchSucceeded(usize),
    FetchFailed(String),
    Displaying(usize),
    Refreshed,
    FiltersChanged,
    ManualRefresh,
    RefreshCoalesced,
    LogCleared,
}

impl MonitorEvent {
    pub fn level (&self)->LogLevel {
        match self {
            MonitorEvent::FetchFailed(_) => LogLevel::Error,
            _ => LogLevel::Info
        }
    }
}

impl fmt::Display for MonitorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorEvent::Started => write!( f, "Military Monitor started"),
            MonitorEvent::Fetching{source} => write!( f, "Fetching live military aircraft data from {source}..."),
            MonitorEvent::FetchSucceeded(n) => write!( f, "Fetched {n} military aircraft"),
            MonitorEvent::FetchFailed(msg) => write!( f, "API Error: {msg}"),
            MonitorEvent::Displaying(n) => write!( f, "Displaying {n} aircraft"),
            MonitorEvent::Refreshed => write!( f, "Data refreshed."),
            MonitorEvent::FiltersChanged => write!( f, "Filters updated - reapplying"),
            MonitorEvent::ManualRefresh => write!( f, "Manual refresh requested"),
            MonitorEvent::RefreshCoalesced => write!( f, "Refresh already in progress - queued"),
            MonitorEvent::LogCleared => write!( f, "Debug log cleared"),
        }
    }
}

#[derive(Debug,Clone)]
pub struct LogEntry {
    pub time: DateTime<Local>,
    pub level: LogLevel,
    pub event: MonitorEvent,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "[{}] {}", self.time.format("%H:%M:%S"), self.event)
    }
}

pub struct EventLog {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    total: u64, // number of entries ever pushed, lets consumers detect new entries of a full ring
}

impl EventLog {
    pub fn new (max_entries: usize)->Self {
        let max_entries = max_entries.max(1);
        EventLog { entries: VecDeque::with_capacity( max_entries.min(1024)), max_entries, total: 0 }
    }

    pub fn push (&mut self, event: MonitorEvent) {
        self.push_at( Local::now(), event)
    }

    pub fn push_at (&mut self, time: DateTime<Local>, event: MonitorEvent) {
        let level = event.level();
        match level {
            LogLevel::Error => error!("{}", event),
            LogLevel::Info => info!("{}", event),
        }

        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back( LogEntry{ time, level, event });
        self.total += 1;
    }

    /// drop all entries and record that we did
    pub fn clear (&mut self) {
        self.entries.clear();
        self.push( MonitorEvent::LogCleared);
    }

    pub fn len (&self)->usize { self.entries.len() }
    pub fn is_empty (&self)->bool { self.entries.is_empty() }
    pub fn total (&self)->u64 { self.total }

    pub fn iter (&self)->impl Iterator<Item=&LogEntry> { self.entries.iter() }
    pub fn last (&self)->Option<&LogEntry> { self.entries.back() }

    /// formatted entries, oldest first
    pub fn lines (&self)->Vec<String> {
        self.entries.iter().map( |e| e.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_format () {
        let time = Local.with_ymd_and_hms( 2025, 3, 1, 14, 5, 9).unwrap();
        let mut log = EventLog::new(10);
        log.push_at( time, MonitorEvent::FetchSucceeded(42));
        assert_eq!( log.lines(), vec!["[14:05:09] Fetched 42 military aircraft".to_string()]);
        assert_eq!( log.last().unwrap().level, LogLevel::Info);
    }
}
