// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor configuration values.

/// An 8-bit RGBA color.
pub type Rgba8 = [u8; 4];

/// Pointer button index, `0` being the primary button.
pub type ButtonIndex = u8;

/// Editor-wide constants consumed by drawing and gesture handling.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Canvas background fill.
    pub background_color: Rgba8,
    /// Spacing between grid lines, in canvas units.
    pub grid_size: f64,
    /// Grid line color.
    pub grid_color: Rgba8,
    /// Button that drags nodes.
    pub drag_node_button: ButtonIndex,
    /// Button that selects.
    pub select_button: ButtonIndex,
    /// Button that scrolls the canvas.
    pub scroll_button: ButtonIndex,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background_color: [60, 60, 70, 200],
            grid_size: 50.0,
            grid_color: [120, 120, 120, 40],
            drag_node_button: 0,
            select_button: 0,
            scroll_button: 1,
        }
    }
}

impl Config {
    /// Whether `button` starts a selection gesture.
    pub fn is_select_button(&self, button: ButtonIndex) -> bool {
        button == self.select_button
    }

    /// Whether `button` starts a node drag.
    pub fn is_drag_node_button(&self, button: ButtonIndex) -> bool {
        button == self.drag_node_button
    }

    /// Whether `button` scrolls the canvas.
    pub fn is_scroll_button(&self, button: ButtonIndex) -> bool {
        button == self.scroll_button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_buttons() {
        let config = Config::default();
        assert!(config.is_select_button(0));
        assert!(config.is_drag_node_button(0));
        assert!(config.is_scroll_button(1));
        assert!(!config.is_scroll_button(0));
        assert_eq!(config.grid_size, 50.0);
    }
}
