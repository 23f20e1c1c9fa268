/// Column of the validated-cause node in every section.
pub const CV_COL: u32 = 0;

/// First column occupied by "why" nodes.
pub const WHY_COL: u32 = 1;

/// Default pixel width of one grid column.
pub const DEFAULT_CELL_WIDTH: f64 = 200.0;

/// Default pixel height of one grid row.
pub const DEFAULT_CELL_HEIGHT: f64 = 190.0;

/// Default visual card width, slightly narrower than a cell.
pub const DEFAULT_CARD_WIDTH: f64 = 176.0;

/// Default visual card height, slightly shorter than a cell.
pub const DEFAULT_CARD_HEIGHT: f64 = 150.0;

/// Highest allowed final label component before rightward extension stops ("1.5").
pub const DEFAULT_MAX_CHAIN_LINKS: u32 = 5;

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "rca.toml";
