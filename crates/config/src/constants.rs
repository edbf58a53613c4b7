//! Application-wide constants.

/// Event poll interval. Also the animation frame period.
pub const EVENT_TICK_MS: u64 = 33;

/// Items shown before a list offers "show more".
pub const INITIAL_SHOW_COUNT: usize = 4;

/// Maximum tags rendered per blog post.
pub const MAX_BLOG_TAGS: usize = 3;

/// Columns the skills marquee advances per tick.
pub const MARQUEE_STEP: usize = 1;

/// Widest content column; the page is centered in wider terminals.
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Lines scrolled per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: u16 = 3;
