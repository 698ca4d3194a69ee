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

use std::{io, panic};
use futures::{FutureExt, StreamExt};
use tokio::{select, sync::watch, task::JoinHandle};
use crossterm::{
    event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, BorderType, Clear, Paragraph, Wrap};
use anyhow::Result;
use tracing::debug;

use crate::{
    category::CategorySet,
    monitor::{MonitorHandle, MonitorView, Renderer},
    view::NO_ALERTS_MSG,
};

mod aircraft_table;
use aircraft_table::AircraftTable;

mod filter_panel;
use filter_panel::FilterPanel;

mod theme;
use theme::THEME;

const PAGE_ROWS: usize = 10;

pub type TuiTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// the Renderer side of the TUI, to be handed to the Monitor. We only keep the latest view since
/// each one is complete, i.e. a slow terminal never backs up the monitor loop
pub struct TuiHandle {
    tx: watch::Sender<Option<MonitorView>>,
}

impl Renderer for TuiHandle {
    fn render (&mut self, view: MonitorView) {
        self.tx.send_replace( Some(view));
    }
}

/// This represents the terminal user interface. It owns the selection state of its panels,
/// everything else comes with the last MonitorView. User commands are sent back to the monitor
pub struct Tui {
    rx: watch::Receiver<Option<MonitorView>>,
    hmon: MonitorHandle,
    view: Option<MonitorView>,
    active: CategorySet, // last view's filters plus the toggles we sent since
    aircraft_table: AircraftTable,
    filter_panel: FilterPanel,
}

impl Tui {
    pub fn new (hmon: MonitorHandle, rx: watch::Receiver<Option<MonitorView>>)->Self {
        Tui {
            rx,
            hmon,
            view: None,
            active: CategorySet::all(),
            aircraft_table: AircraftTable::new(),
            filter_panel: FilterPanel::new(),
        }
    }

    fn update_view (&mut self) {
        self.view = self.rx.borrow_and_update().clone();
        if let Some(view) = &self.view {
            self.active = view.active;
        }
        let n_rows = self.view.as_ref().map( |v| v.rows.len()).unwrap_or(0);
        self.aircraft_table.set_len( n_rows);
    }

    /// process key events from the terminal. Returns false if the TUI should terminate
    pub async fn process_terminal_events (&mut self, key_event: KeyEvent)->Result<bool> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if let Err(e) = self.hmon.quit().await { debug!("monitor already gone: {e}") }
                return Ok(false)
            }
            KeyCode::Char('r') => self.hmon.refresh_now().await?,
            KeyCode::Char('d') => self.hmon.clear_log().await?,

            KeyCode::Left => self.filter_panel.left(),
            KeyCode::Right => self.filter_panel.right(),
            KeyCode::Up => self.filter_panel.up(),
            KeyCode::Down => self.filter_panel.down(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(cat) = self.filter_panel.selected() {
                    let enabled = !self.active.contains( cat);
                    self.active = self.active.with( cat, enabled);
                    self.hmon.toggle( cat, enabled).await?
                }
            }

            KeyCode::Char('j') => self.aircraft_table.next(1),
            KeyCode::Char('k') => self.aircraft_table.prev(1),
            KeyCode::PageDown => self.aircraft_table.next( PAGE_ROWS),
            KeyCode::PageUp => self.aircraft_table.prev( PAGE_ROWS),
            KeyCode::Home => self.aircraft_table.first(),
            KeyCode::End => self.aircraft_table.last(),
            _ => {}
        }
        Ok(true)
    }

    /// this is the main entry point for drawing to the terminal which draws a single frame
    pub fn draw (&self, terminal: &mut TuiTerminal)->io::Result<()> {
        terminal.draw( |frame| frame.render_widget( self, frame.area()))?;
        Ok(())
    }

    /// the TUI loop. Terminal events take precedence over monitor updates
    pub async fn run (&mut self, terminal: &mut TuiTerminal)->Result<()> {
        self.update_view();
        self.draw( terminal)?;

        let mut reader = EventStream::new();
        loop {
            let terminal_event = reader.next().fuse();
            select! {
                biased;
                maybe_evt = terminal_event => {
                    match maybe_evt {
                        Some(Ok(CrosstermEvent::Key(key))) => {
                            if key.kind == KeyEventKind::Press {
                                if !self.process_terminal_events( key).await? { break }
                                self.draw( terminal)?;
                            }
                        }
                        Some(Ok(CrosstermEvent::Resize(_,_))) => {
                            terminal.clear()?;
                            self.draw( terminal)?;
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err( e.into()),
                        None => break
                    }
                }
                changed = self.rx.changed() => {
                    if changed.is_err() { break } // monitor is gone
                    self.update_view();
                    self.draw( terminal)?;
                }
            }
        }
        Ok(())
    }
}

/// we implement Widget for &Tui instead of Tui as we would otherwise have to clone or copy the
/// entire TUI state on every frame.
impl Widget for &Tui {
    fn render (self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .style(THEME.root)
            .border_set(BorderType::QuadrantOutside.to_border_set());
        block.render(area, buf);

        let area = area.inner( Margin { vertical: 1, horizontal: 1 });
        let [title_bar, main, alerts, log, command_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(3),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]).areas(area);

        let [table, filters] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ]).areas(main);

        self.render_title_bar( title_bar, buf);
        self.render_aircraft_table( table, buf);
        self.render_filter_panel( filters, buf);
        self.render_alerts( alerts, buf);
        self.render_log( log, buf);
        Tui::render_command_bar( command_bar, buf);
    }
}

impl Tui {
    fn render_title_bar (&self, area: Rect, buf: &mut Buffer) {
        let [title, status] = Layout::horizontal([Constraint::Min(10), Constraint::Min(10)]).areas(area);

        Span::styled(" MILITARY AIRCRAFT MONITOR ", THEME.root_title).render(title, buf);

        let status_line = if let Some(view) = &self.view {
            if let Some(err) = &view.last_error {
                Line::from( Span::styled( format!("API Error: {err} "), THEME.status_error))
            } else {
                let mut s = format!("{} | {} of {} aircraft", view.source, view.rows.len(), view.total);
                if let Some(updated) = view.updated {
                    s.push_str( &updated.format(" | %H:%M:%S").to_string());
                }
                if view.refreshing { s.push_str(" | refreshing..") }
                s.push(' ');
                Line::from( Span::styled( s, THEME.status))
            }
        } else {
            Line::from( Span::styled("waiting for data.. ", THEME.status))
        };
        status_line.right_aligned().render(status, buf);
    }

    fn panel (title: &str)->Block<'_> {
        Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(THEME.panel_border)
            .title( Span::styled( format!(" {title} "), THEME.panel_title))
    }

    fn render_aircraft_table (&self, area: Rect, buf: &mut Buffer) {
        let block = Tui::panel("AIRCRAFT");
        let inner = block.inner(area);
        block.render(area, buf);
        Clear.render(inner, buf);

        let rows = self.view.as_ref().map( |v| v.rows.as_slice()).unwrap_or(&[]);
        self.aircraft_table.render( inner, buf, rows);
    }

    fn render_filter_panel (&self, area: Rect, buf: &mut Buffer) {
        let block = Tui::panel("FILTERS");
        let inner = block.inner(area);
        block.render(area, buf);
        self.filter_panel.render( inner, buf, self.active);
    }

    fn render_alerts (&self, area: Rect, buf: &mut Buffer) {
        let block = Tui::panel("OFFENSIVE AIRCRAFT ALERTS");

        let lines: Vec<Line> = match &self.view {
            Some(view) if !view.alerts.is_empty() => {
                view.alerts.iter().map( |a| Line::from( Span::styled( a.as_str(), THEME.alerts.active))).collect()
            }
            _ => vec![ Line::from( Span::styled( NO_ALERTS_MSG, THEME.alerts.placeholder)) ]
        };

        Paragraph::new(lines)
            .block(block)
            .wrap( Wrap { trim: false })
            .render(area, buf);
    }

    fn render_log (&self, area: Rect, buf: &mut Buffer) {
        let block = Tui::panel("SYSTEM LOG");
        let max_lines = block.inner(area).height as usize;

        let lines: Vec<Line> = match &self.view {
            Some(view) => {
                let skip = view.log.len().saturating_sub( max_lines);
                view.log[skip..].iter().map( |l| Line::from( l.as_str())).collect()
            }
            None => Vec::new()
        };

        Paragraph::new(lines)
            .block(block)
            .style(THEME.log)
            .render(area, buf);
    }

    fn render_command_bar (area: Rect, buf: &mut Buffer) {
        let commands = [
            ("←→↑↓", "Select"),
            ("Space", "Toggle"),
            ("J/K", "Scroll"),
            ("R", "Refresh"),
            ("D", "Clear Log"),
            ("Q/Esc", "Quit"),
        ];

        let spans: Vec<Span> = commands
            .iter()
            .flat_map(|(key, desc)| {
                let command = Span::styled(format!(" {key} "), THEME.command_bar.command);
                let desc = Span::styled(format!(" {desc}  "), THEME.command_bar.description);
                [command, desc]
            }).collect();
        Line::from(spans)
            .centered()
            .style(THEME.command_bar.bar)
            .render(area, buf);
    }
}

/// it initializes the terminal interface by enabling the raw mode and entering
/// an alternate screen. The panic hook makes sure we leave a usable terminal behind
pub fn init_terminal ()->io::Result<TuiTerminal> {
    let backend = CrosstermBackend::new( io::stderr());
    let mut terminal = Terminal::new( backend)?;

    terminal::enable_raw_mode()?;
    crossterm::execute!( io::stderr(), EnterAlternateScreen)?;

    let panic_hook = panic::take_hook();
    panic::set_hook( Box::new( move |panic| {
        let _ = restore_terminal();
        panic_hook(panic);
    }));

    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// it resets the terminal interface by disabling the raw mode and leaving the
/// alternate screen
pub fn restore_terminal ()->io::Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!( io::stderr(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// set up the TUI and return the Renderer to pass into the Monitor plus the JoinHandle of the spawned
/// TUI task. The task owns the terminal and restores it when the user quits or the monitor terminates
pub fn create_tui (hmon: MonitorHandle)->(TuiHandle, JoinHandle<Result<()>>) {
    let (tx,rx) = watch::channel( None);
    let mut tui = Tui::new( hmon, rx);

    let jh = tokio::spawn( async move {
        let mut terminal = init_terminal()?;
        let res = tui.run( &mut terminal).await;
        restore_terminal()?;
        res
    });

    (TuiHandle{tx}, jh)
}
