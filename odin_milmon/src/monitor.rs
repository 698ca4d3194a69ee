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

//! the Monitor is the single owner of the aircraft snapshot, the filter state and the system log.
//! Everything that changes them - timer ticks, manual refresh requests, fetch completions, filter
//! toggles and control commands - is a [`MonitorMsg`] that is processed by one serial loop
//! ([`Monitor::run`]). After each state change the views are re-projected and pushed to the [`Renderer`].
//!
//! Fetching is the only operation that can take time. It runs as a separate task that reports back to
//! the loop with a `FetchCompleted` message, i.e. it never touches the snapshot itself. There is at most
//! one fetch in flight; manual refresh requests that come in while a fetch is running are coalesced
//! into a single follow-up fetch, timer ticks in that situation are dropped.

use std::{fmt, sync::Arc};
use chrono::{DateTime,Local};
use tokio::{sync::mpsc, task::AbortHandle, time::{interval,MissedTickBehavior}};
use tracing::{debug,warn};

use crate::{
    MilAircraft, MilmonConfig,
    category::{Category,CategorySet},
    errors::{OdinMilmonError,Result},
    event_log::{EventLog,MonitorEvent},
    fetcher::{Fetcher,fetch_aircraft},
    filter::{FilterState,FiltersChanged},
    view::{self,AircraftRow,Projection},
};

pub const DEFAULT_MONITOR_BOUNDS: usize = 16;

/// everything a renderer needs to display the current monitor state
#[derive(Debug,Clone)]
pub struct MonitorView {
    pub source: String,
    pub rows: Vec<AircraftRow>,     // filtered, in feed order
    pub alerts: Vec<String>,        // unfiltered airborne fighters/bombers
    pub active: CategorySet,
    pub log: Vec<String>,           // formatted system log lines, oldest first
    pub log_total: u64,             // number of log entries ever recorded
    pub total: usize,               // number of aircraft in the snapshot
    pub last_error: Option<String>,
    pub refreshing: bool,
    pub updated: Option<DateTime<Local>>,
}

impl MonitorView {
    pub fn alert_text (&self)->String {
        view::alert_text( &self.alerts)
    }
}

/// the consumer side of the monitor. Implementations get a complete view after every state change
pub trait Renderer: Send {
    fn render (&mut self, view: MonitorView);
}

pub enum MonitorMsg {
    Tick,
    RefreshNow,
    FetchCompleted(Result<Vec<MilAircraft>>),
    ToggleCategory(Category,bool),
    ClearLog,
    Quit,
}

impl fmt::Debug for MonitorMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorMsg::Tick => write!( f, "Tick"),
            MonitorMsg::RefreshNow => write!( f, "RefreshNow"),
            MonitorMsg::FetchCompleted(Ok(list)) => write!( f, "FetchCompleted(Ok({} aircraft))", list.len()),
            MonitorMsg::FetchCompleted(Err(e)) => write!( f, "FetchCompleted(Err({e}))"),
            MonitorMsg::ToggleCategory(cat,enabled) => write!( f, "ToggleCategory({cat},{enabled})"),
            MonitorMsg::ClearLog => write!( f, "ClearLog"),
            MonitorMsg::Quit => write!( f, "Quit"),
        }
    }
}

/// cloneable sender for monitor messages. This is what input layers (TUI, signal handlers) hold on to
#[derive(Clone,Debug)]
pub struct MonitorHandle {
    tx: mpsc::Sender<MonitorMsg>,
}

impl MonitorHandle {
    pub async fn send_msg (&self, msg: MonitorMsg)->Result<()> {
        self.tx.send( msg).await.map_err( |e| OdinMilmonError::ChannelError( format!("monitor closed, dropped {:?}", e.0)))
    }

    pub async fn refresh_now (&self)->Result<()> { self.send_msg( MonitorMsg::RefreshNow).await }
    pub async fn toggle (&self, category: Category, enabled: bool)->Result<()> { self.send_msg( MonitorMsg::ToggleCategory(category,enabled)).await }
    pub async fn clear_log (&self)->Result<()> { self.send_msg( MonitorMsg::ClearLog).await }
    pub async fn quit (&self)->Result<()> { self.send_msg( MonitorMsg::Quit).await }

    pub fn is_closed (&self)->bool { self.tx.is_closed() }
}

/// receiver end of a monitor channel that was created before the monitor itself (we need the handle
/// to set up input layers that are also the renderer of the monitor)
pub struct MonitorInbox(mpsc::Receiver<MonitorMsg>);

pub fn create_monitor_channel (bound: usize)->(MonitorHandle,MonitorInbox) {
    let (tx,rx) = mpsc::channel( bound);
    (MonitorHandle{tx}, MonitorInbox(rx))
}

pub struct Monitor<R> where R: Renderer {
    config: Arc<MilmonConfig>,
    fetcher: Arc<dyn Fetcher>,
    renderer: R,

    snapshot: Arc<Vec<MilAircraft>>, // replaced as a whole, never modified in place
    filter: FilterState,
    projection: Projection,          // the last computed views
    log: EventLog,

    last_error: Option<String>,
    updated: Option<DateTime<Local>>,

    in_flight: bool,
    pending: bool,                   // coalesced refresh request to run once the in-flight fetch is done

    hself: MonitorHandle,
    inbox: mpsc::Receiver<MonitorMsg>,
    timer: Option<AbortHandle>,
    fetch_task: Option<AbortHandle>,
}

impl<R> Monitor<R> where R: Renderer {

    pub fn new (config: MilmonConfig, fetcher: Arc<dyn Fetcher>, renderer: R)->Self {
        let (hself,inbox) = create_monitor_channel( DEFAULT_MONITOR_BOUNDS);
        Self::with_channel( config, fetcher, renderer, hself, inbox)
    }

    pub fn with_channel (config: MilmonConfig, fetcher: Arc<dyn Fetcher>, renderer: R, hself: MonitorHandle, inbox: MonitorInbox)->Self {
        let log = EventLog::new( config.max_log_entries);

        Monitor {
            config: Arc::new(config),
            fetcher,
            renderer,
            snapshot: Arc::new( Vec::new()),
            filter: FilterState::new(),
            projection: Projection::default(),
            log,
            last_error: None,
            updated: None,
            in_flight: false,
            pending: false,
            hself,
            inbox: inbox.0,
            timer: None,
            fetch_task: None,
        }
    }

    pub fn handle (&self)->MonitorHandle { self.hself.clone() }
    pub fn config (&self)->&MilmonConfig { self.config.as_ref() }

    pub fn snapshot (&self)->Arc<Vec<MilAircraft>> { self.snapshot.clone() }
    pub fn filter (&self)->&FilterState { &self.filter }
    pub fn projection (&self)->&Projection { &self.projection }
    pub fn log (&self)->&EventLog { &self.log }
    pub fn last_error (&self)->Option<&str> { self.last_error.as_deref() }
    pub fn is_refreshing (&self)->bool { self.in_flight }

    /// complete refresh cycle (fetch, classify, store, project, notify) executed in the caller's task.
    /// Returns the number of received aircraft or the fetch error, which in both cases has already been
    /// applied to the snapshot and logged
    pub async fn refresh (&mut self)->Result<usize> {
        let fetcher = self.fetcher.clone();
        let res = fetch_aircraft( fetcher.as_ref(), self.config.fetch_timeout).await;
        self.apply_fetch_result( res)
    }

    /// replace the snapshot with the outcome of a fetch. Failed fetches clear the snapshot so that
    /// stale data is never shown as current
    pub fn apply_fetch_result (&mut self, res: Result<Vec<MilAircraft>>)->Result<usize> {
        self.updated = Some( Local::now());

        let res = match res {
            Ok(list) => {
                let n = list.len();
                self.snapshot = Arc::new( list);
                self.last_error = None;
                self.log.push( MonitorEvent::FetchSucceeded(n));
                Ok(n)
            }
            Err(e) => {
                if !e.is_fetch_error() { warn!("unexpected fetch error type: {e:?}") }
                self.snapshot = Arc::new( Vec::new());
                let msg = e.to_string();
                self.last_error = Some( msg.clone());
                self.log.push( MonitorEvent::FetchFailed(msg));
                Err(e)
            }
        };

        self.reproject();
        self.log.push( MonitorEvent::Refreshed);
        self.publish();
        res
    }

    pub fn toggle (&mut self, category: Category, enabled: bool)->FiltersChanged {
        let changed = self.filter.toggle( category, enabled);
        debug!("active filters: {}", changed.0);

        self.log.push( MonitorEvent::FiltersChanged);
        self.reproject();
        self.publish();
        changed
    }

    pub fn clear_log (&mut self) {
        self.log.clear();
        self.publish();
    }

    /// start a fetch unless there is one in flight. Manual requests during a fetch are queued (at most one),
    /// timer requests are dropped since the next tick will retry anyways
    pub fn request_refresh (&mut self, manual: bool) {
        if manual {
            self.log.push( MonitorEvent::ManualRefresh);
        }

        if self.in_flight {
            if manual {
                if !self.pending {
                    self.pending = true;
                    self.log.push( MonitorEvent::RefreshCoalesced);
                }
                self.publish();
            } else {
                debug!("fetch in flight, skipping timer refresh");
            }
        } else {
            self.start_fetch();
        }
    }

    /// the serial event loop. This fires an initial refresh right away and then one every `update_interval`
    /// until a `Quit` message is received
    pub async fn run (mut self)->Result<()> {
        self.log.push( MonitorEvent::Started);
        self.log.push( MonitorEvent::Fetching{ source: self.config.source.clone() });
        self.publish();

        self.start_timer();

        while let Some(msg) = self.inbox.recv().await {
            if !self.process_msg( msg) {
                break;
            }
        }

        self.terminate();
        Ok(())
    }

    /// returns false if the loop should terminate
    fn process_msg (&mut self, msg: MonitorMsg)->bool {
        debug!("monitor received {:?}", msg);

        match msg {
            MonitorMsg::Tick => self.request_refresh( false),
            MonitorMsg::RefreshNow => self.request_refresh( true),
            MonitorMsg::FetchCompleted(res) => {
                self.in_flight = false;
                self.fetch_task = None;
                let _ = self.apply_fetch_result( res); // already logged

                if self.pending {
                    self.pending = false;
                    self.start_fetch();
                }
            }
            MonitorMsg::ToggleCategory(category,enabled) => { self.toggle( category, enabled); }
            MonitorMsg::ClearLog => self.clear_log(),
            MonitorMsg::Quit => return false
        }
        true
    }

    fn start_fetch (&mut self) {
        self.in_flight = true;

        let fetcher = self.fetcher.clone();
        let timeout = self.config.fetch_timeout;
        let hself = self.hself.clone();

        let jh = tokio::spawn( async move {
            let res = fetch_aircraft( fetcher.as_ref(), timeout).await;
            if let Err(e) = hself.send_msg( MonitorMsg::FetchCompleted(res)).await {
                debug!("fetch result dropped: {e}");
            }
        });
        self.fetch_task = Some( jh.abort_handle());
        self.publish(); // show that we are refreshing
    }

    fn start_timer (&mut self) {
        let hself = self.hself.clone();
        let period = self.config.update_interval;

        let jh = tokio::spawn( async move {
            let mut interval = interval( period);
            interval.set_missed_tick_behavior( MissedTickBehavior::Skip);

            loop {
                interval.tick().await; // the first tick completes immediately
                if hself.send_msg( MonitorMsg::Tick).await.is_err() {
                    break;
                }
            }
        });
        self.timer = Some( jh.abort_handle());
    }

    fn terminate (&mut self) {
        if let Some(timer) = self.timer.take() { timer.abort(); }
        if let Some(task) = self.fetch_task.take() { task.abort(); }
        debug!("monitor terminated");
    }

    fn reproject (&mut self) {
        self.projection = view::project( self.snapshot.as_slice(), self.filter.active_set());
        self.log.push( MonitorEvent::Displaying( self.projection.rows.len()));
    }

    fn publish (&mut self) {
        let view = MonitorView {
            source: self.config.source.clone(),
            rows: self.projection.rows.clone(),
            alerts: self.projection.alerts.clone(),
            active: self.filter.active_set(),
            log: self.log.lines(),
            log_total: self.log.total(),
            total: self.snapshot.len(),
            last_error: self.last_error.clone(),
            refreshing: self.in_flight,
            updated: self.updated,
        };
        self.renderer.render( view);
    }
}
