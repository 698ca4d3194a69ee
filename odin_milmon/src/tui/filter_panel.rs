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
use ratatui::prelude::*;
use strum::IntoEnumIterator;

use crate::category::{Category,CategorySet};
use crate::tui::theme::*;

const N_COLS: usize = 2;

/// the category checkboxes, laid out in two columns (in taxonomy order) so that labels don't get cut.
/// The panel only keeps the cursor - checked states come from the active set of the current view
pub struct FilterPanel {
    cursor: usize,
}

impl FilterPanel {
    pub fn new()->Self {
        FilterPanel { cursor: 0 }
    }

    pub fn selected (&self)->Option<Category> {
        Category::from_index( self.cursor)
    }

    pub fn left (&mut self) {
        if self.cursor % N_COLS > 0 { self.cursor -= 1 }
    }

    pub fn right (&mut self) {
        if self.cursor % N_COLS < N_COLS-1 && self.cursor + 1 < Category::COUNT { self.cursor += 1 }
    }

    pub fn up (&mut self) {
        if self.cursor >= N_COLS { self.cursor -= N_COLS }
    }

    pub fn down (&mut self) {
        if self.cursor + N_COLS < Category::COUNT { self.cursor += N_COLS }
    }

    pub fn render (&self, area: Rect, buf: &mut Buffer, active: CategorySet) {
        let n_rows = Category::COUNT.div_ceil( N_COLS);
        let mut constraints = vec![Constraint::Length(2)]; // title line plus gap
        constraints.extend( std::iter::repeat_n( Constraint::Length(2), n_rows));
        constraints.push( Constraint::Min(0));
        let areas = Layout::vertical( constraints).split(area);

        Line::from( Span::styled("FILTER BY AIRCRAFT TYPE", THEME.panel_title))
            .centered()
            .render( areas[0], buf);

        let cats: Vec<Category> = Category::iter().collect();
        for (row,chunk) in cats.chunks(N_COLS).enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1,2), Constraint::Ratio(1,2)]).split( areas[row+1]);
            for (col,cat) in chunk.iter().enumerate() {
                self.render_checkbox( cols[col], buf, *cat, active.contains(*cat));
            }
        }
    }

    fn render_checkbox (&self, area: Rect, buf: &mut Buffer, cat: Category, checked: bool) {
        let mark = if checked { "[x]" } else { "[ ]" };
        let mut style = if checked { THEME.filter.checked } else { THEME.filter.unchecked };
        if cat.index() == self.cursor {
            style = style.patch( THEME.filter.cursor);
        }
        let area = area.inner( Margin { vertical: 0, horizontal: 1 });
        Span::styled( format!("{mark} {}", cat.label()), style).render( area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves () {
        let mut panel = FilterPanel::new();
        assert_eq!( panel.selected(), Some(Category::Fighter));
        panel.left();
        assert_eq!( panel.selected(), Some(Category::Fighter));
        panel.right();
        assert_eq!( panel.selected(), Some(Category::Bomber));
        panel.right();
        assert_eq!( panel.selected(), Some(Category::Bomber));
        panel.down();
        assert_eq!( panel.selected(), Some(Category::Transport));
        for _ in 0..10 { panel.down() }
        assert_eq!( panel.selected(), Some(Category::Other));
        panel.up();
        assert_eq!( panel.selected(), Some(Category::Special));
    }
}
