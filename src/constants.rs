// DOM hooks and interaction tuning for the web layer.

// Element ids
pub const STUDIO_CANVAS_ID: &str = "studio-canvas";
pub const HOVER_BADGE_ID: &str = "studio-hover-badge";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";
pub const CURSOR_GLOW_ID: &str = "cursor-glow";
pub const SITE_NAV_ID: &str = "site-nav";

// Selectors for primitives configured through data attributes
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";
pub const COUNT_UP_SELECTOR: &str = "[data-count-up]";
pub const NAV_SELECTOR: &str = "[data-nav]";
pub const ZONE_NAV_SELECTOR: &str = "[data-zone]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const MENU_TOGGLE_SELECTOR: &str = "[data-menu-toggle]";

// Shared attributes
pub const SOUND_ATTR: &str = "data-sound"; // per-element sound opt-out
pub const RESCRAMBLE_ATTR: &str = "data-rescramble-on-hover";
pub const PARALLAX_ATTR: &str = "data-parallax";

// Classes
pub const GLARE_CLASS: &str = "tilt-glare";
pub const MAGNETIC_INNER_SELECTOR: &str = ".magnetic-btn-inner";
pub const SCRAMBLING_CLASS: &str = "is-scrambling";
pub const NAV_SCROLLED_CLASS: &str = "scrolled";
pub const MUTED_CLASS: &str = "muted";
pub const MENU_OPEN_CLASS: &str = "menu-open";

// Sound toggle labels
pub const SOUND_ON_LABEL: &str = "Disable sound";
pub const SOUND_OFF_LABEL: &str = "Enable sound";

// Hover badge copy
pub const BADGE_IDLE_TEXT: &str = "Explore the Studio";
pub const BADGE_ZONE_PREFIX: &str = "Exploring: ";

// Scene pointer
pub const DRAG_CLICK_SLOP_PX: f32 = 4.0; // drags shorter than this still count as clicks

// Audio unlock
pub const UNLOCK_EVENTS: [&str; 3] = ["click", "touchstart", "keydown"];
pub const PRIMER_SAMPLE_RATE: f32 = 22050.0;
