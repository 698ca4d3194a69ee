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
use ratatui::style::{Color, Modifier, Style};

/// it defines the theme for the entire tui
pub struct Theme {
    pub root: Style,
    pub root_title: Style,
    pub status: Style,
    pub status_error: Style,
    pub panel_border: Style,
    pub panel_title: Style,
    pub command_bar: CommandBar,
    pub aircraft_table: AircraftTable,
    pub filter: FilterPanel,
    pub alerts: Alerts,
    pub log: Style,
}

pub struct CommandBar {
    pub command: Style,
    pub description: Style,
    pub bar: Style,
}

pub struct AircraftTable {
    pub header: Style,
    pub even: Style,
    pub odd: Style,
    pub offensive: Style,
    pub selected: Style,
}

pub struct FilterPanel {
    pub checked: Style,
    pub unchecked: Style,
    pub cursor: Style,
}

pub struct Alerts {
    pub active: Style,
    pub placeholder: Style,
}

pub const THEME: Theme = Theme {
    root: Style::new().bg(Palette::NAVY),
    root_title: Style::new()
        .fg(Palette::WHITE)
        .add_modifier(Modifier::BOLD),
    status: Style::new().fg(Palette::MID_GRAY),
    status_error: Style::new().fg(Palette::RED).add_modifier(Modifier::BOLD),
    panel_border: Style::new().fg(Palette::BLUE),
    panel_title: Style::new()
        .fg(Palette::YELLOW)
        .add_modifier(Modifier::BOLD),
    command_bar: CommandBar {
        command: Style::new().fg(Palette::BLACK).bg(Palette::DARK_GRAY),
        description: Style::new().fg(Palette::DARK_GRAY),
        bar: Style::new().bg(Palette::NAVY),
    },
    aircraft_table: AircraftTable {
        header: Style::new()
            .fg(Palette::BLACK)
            .bg(Palette::LIGHT_GRAY)
            .add_modifier(Modifier::BOLD),
        even: Style::new().fg(Palette::LIGHT_GRAY).bg(Palette::NAVY),
        odd: Style::new().fg(Palette::LIGHT_GRAY).bg(Palette::SURFACE),
        offensive: Style::new().fg(Palette::ORANGE),
        selected: Style::new()
            .fg(Palette::YELLOW)
            .add_modifier(Modifier::BOLD)
    },
    filter: FilterPanel {
        checked: Style::new().fg(Palette::WHITE),
        unchecked: Style::new().fg(Palette::MID_GRAY),
        cursor: Style::new()
            .fg(Palette::YELLOW)
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED),
    },
    alerts: Alerts {
        active: Style::new().fg(Palette::RED),
        placeholder: Style::new().fg(Palette::MID_GRAY),
    },
    log: Style::new().fg(Palette::MID_GRAY).bg(Palette::SURFACE),
};

pub struct Palette;
impl Palette {
    pub const WHITE: Color = Color::Rgb(255,255,255);
    pub const LIGHT_GRAY: Color = Color::Rgb(220, 220, 220);
    pub const MID_GRAY: Color = Color::Rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::Rgb(68, 68, 68);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    // night theme
    pub const NAVY: Color = Color::Rgb(10, 10, 26);
    pub const SURFACE: Color = Color::Rgb(26, 26, 46);
    pub const BLUE: Color = Color::Rgb(0, 90, 180);
    // alert colors
    pub const YELLOW: Color = Color::Rgb(255, 207, 51);
    pub const ORANGE: Color = Color::Rgb(240, 127, 0);
    pub const RED: Color = Color::Rgb(212, 0, 0);
}
