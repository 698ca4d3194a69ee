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
use ratatui::{
    prelude::*,
    widgets::*
};

use crate::view::{AircraftRow, TABLE_COLUMNS};
use crate::tui::theme::*;

/// selection state of the aircraft table. The rows themselves come with each MonitorView
pub struct AircraftTable {
    row_index: usize,
    len: usize,
}

impl AircraftTable {
    pub fn new()-> Self {
        Self { row_index: 0, len: 0 }
    }

    /// called when we get a new view - keep the selection within the new row range
    pub fn set_len (&mut self, len: usize) {
        self.len = len;
        if self.row_index >= len {
            self.row_index = len.saturating_sub(1);
        }
    }

    pub fn prev (&mut self, n: usize) {
        self.row_index = self.row_index.saturating_sub(n);
    }

    pub fn next (&mut self, n: usize) {
        if self.len > 0 {
            self.row_index = self.row_index.saturating_add(n).min( self.len - 1);
        }
    }

    pub fn first (&mut self) { self.row_index = 0; }
    pub fn last (&mut self) { self.row_index = self.len.saturating_sub(1); }

    pub fn render (&self, area: Rect, buf: &mut Buffer, rows: &[AircraftRow]) {
        render_aircraft_table( area, buf, self.row_index, rows);
        render_scrollbar( area, buf, self.row_index, rows.len());
    }
}

fn render_aircraft_table (area: Rect, buf: &mut Buffer, selected: usize, rows: &[AircraftRow]) {
    let header = TABLE_COLUMNS
        .into_iter()
        .map(Cell::from)
        .collect::<Row>()
        .style(THEME.aircraft_table.header)
        .height(1);

    let rows: Vec<Row> = rows.iter().enumerate().map( |(i,r)| {
        let mut style = if i % 2 == 0 { THEME.aircraft_table.even } else { THEME.aircraft_table.odd };
        if r.category.is_offensive() {
            style = style.patch( THEME.aircraft_table.offensive);
        }
        Row::new( r.cells().map( |c| Cell::from( c.to_string()))).style(style)
    }).collect();

    let t = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(12),
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .row_highlight_style(THEME.aircraft_table.selected)
    .highlight_symbol(">> ")
    .highlight_spacing(HighlightSpacing::Always);

    let mut state = TableState::default().with_selected(selected);
    StatefulWidget::render(t, area, buf, &mut state);
}

fn render_scrollbar (area: Rect, buf: &mut Buffer, selected: usize, length: usize) {
    let sb = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);
    let mut state = ScrollbarState::default()
        .content_length(length)
        .position(selected);
    let area = area.inner( Margin {
        vertical: 1,
        horizontal: 0,
    });
    StatefulWidget::render(sb, area, buf, &mut state);
}
