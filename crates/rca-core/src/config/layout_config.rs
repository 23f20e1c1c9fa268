use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH,
};

/// Pixel dimensions of the section grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of one grid column in pixels. Default: 200.
    pub cell_width: f64,
    /// Height of one grid row in pixels. Default: 190.
    pub cell_height: f64,
    /// Visual card width, at most `cell_width`. Default: 176.
    pub card_width: f64,
    /// Visual card height, at most `cell_height`. Default: 150.
    pub card_height: f64,
    /// Draw the validated-cause card at the vertical middle row of the
    /// section instead of its own row. Default: false.
    pub center_validated_cause: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            center_validated_cause: false,
        }
    }
}
