//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Base-unit geometry of the hotbar skin (unscaled)
pub mod geometry {
    /// Number of slots in the hotbar
    pub const SLOT_COUNT: usize = 9;

    /// Panel width in base units
    pub const BASE_WIDTH: i32 = 182;

    /// Panel height in base units
    pub const BASE_HEIGHT: i32 = 22;

    /// Horizontal distance between consecutive slots
    pub const SLOT_STRIDE: i32 = 20;

    /// Clickable slot rectangle for slot 0 (x, y, w, h)
    pub const SLOT_ORIGIN: (i32, i32, i32, i32) = (3, 3, 16, 16);

    /// Hover/selection rectangle for slot 0 (x, y, w, h)
    pub const SELECTION_ORIGIN: (i32, i32, i32, i32) = (-1, -1, 24, 23);

    /// Icon edge as a fraction of the slot width
    pub const ICON_FILL_RATIO: f64 = 0.8;

    /// Initials font size as a fraction of the slot height
    pub const INITIALS_FONT_RATIO: f64 = 0.5;

    /// Smallest font size used for initials
    pub const MIN_INITIALS_FONT_SIZE: i32 = 8;

    /// Gap between the panel bottom edge and the monitor bottom on first start
    pub const BOTTOM_MARGIN: i32 = 40;
}

/// Scale factor defaults and presets
pub mod scale {
    /// Default scale factor
    pub const DEFAULT: f64 = 3.0;

    /// Scale ladder offered by the general settings dialog
    pub const PRESETS: [f64; 15] = [
        0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 7.5, 10.0,
    ];
}

/// Configuration file location
pub mod config {
    /// Directory under the user config dir
    pub const APP_DIR: &str = "desktophotbar";

    /// Config file name
    pub const FILENAME: &str = "config.json";

    /// Suffix for the temporary file written before the atomic rename
    pub const TEMP_SUFFIX: &str = "tmp";
}

/// Desktop descriptor handling
pub mod desktop {
    /// File extension of application descriptors
    pub const EXTENSION: &str = "desktop";

    /// Placeholder marker in Exec lines (%U, %f, ...)
    pub const FIELD_CODE_MARKER: char = '%';

    /// Shell used to launch applications
    pub const SHELL: &str = "sh";

    /// Outer shell script: run `$1` in a backgrounded inner shell and return
    pub const DETACH_SCRIPT: &str = "sh -c \"$1\" &";

    /// Number of characters shown when a slot has no usable icon
    pub const INITIALS_LEN: usize = 2;
}

/// Icon lookup locations
pub mod icons {
    /// Themes searched for bare icon names
    pub const THEMES: [&str; 1] = ["hicolor"];

    /// Theme sizes, largest first
    pub const SIZES: [&str; 8] = [
        "256x256", "128x128", "96x96", "64x64", "48x48", "32x32", "24x24", "16x16",
    ];

    /// System data dirs searched after the user data dir
    pub const SYSTEM_DATA_DIRS: [&str; 2] = ["/usr/local/share", "/usr/share"];

    /// Legacy pixmaps directory
    pub const PIXMAPS_DIR: &str = "/usr/share/pixmaps";

    /// Only raster icons are decoded
    pub const EXTENSION: &str = "png";
}

/// Skin asset file names
pub mod assets {
    /// Directory searched next to the executable and in the working directory
    pub const DIR: &str = "assets";

    /// Hotbar background image
    pub const BACKGROUND: &str = "hotbar.png";

    /// Hover selection frame image
    pub const SELECTION: &str = "hotbar_selection.png";
}
