// DOM bindings and browser-side tuning for the folio front-end.

// Element ids
pub const HERO_SPHERE_ID: &str = "hero-sphere";
pub const DIVE_SECTION_ID: &str = "dive";
pub const DIVE_CANVAS_ID: &str = "dive-canvas";
pub const DIVE_TEXT_ID: &str = "dive-text";
pub const MARQUEE_SECTION_ID: &str = "work";
pub const MARQUEE_ROWS_ID: &str = "marquee-rows";
pub const REVEAL_SECTION_ID: &str = "reveal";
pub const REVEAL_IMAGES_ID: &str = "reveal-images";
pub const REVEAL_TEXT_ID: &str = "reveal-text";
pub const ABOUT_SECTION_ID: &str = "about";
pub const ABOUT_TRACK_ID: &str = "about-track";
pub const PROJECTS_SECTION_ID: &str = "projects";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const PROJECTS_MORE_ID: &str = "projects-more";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const LOADER_ID: &str = "loader";
pub const LOADER_TEXT_ID: &str = "loader-text";
pub const HERO_ID: &str = "hero";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_DOT_ID: &str = "cursor-dot";

// Particle canvases are found by attribute; its value picks the budget
pub const PARTICLES_SELECTOR: &str = "canvas[data-particles]";
pub const PARTICLES_ATTR: &str = "data-particles";

// Visibility observation
pub const OBSERVER_THRESHOLD: f64 = 0.1;
pub const OBSERVER_ROOT_MARGIN: &str = "100px";

// Frame timing
pub const FIRST_FRAME_DT: f32 = 1.0 / 60.0; // dt assumed for the first frame after a (re)start
pub const MAX_FRAME_DT: f32 = 0.1;

// Scrub lag (seconds) for scroll-linked sections
pub const DIVE_SCRUB_SECS: f32 = 1.0;
pub const REVEAL_SCRUB_SECS: f32 = 0.8;
pub const ABOUT_SCRUB_SECS: f32 = 1.0;

// Dive headline: scales up and fades out across the pinned region
pub const DIVE_TEXT_MAX_SCALE: f32 = 5.0;

// Projects preview grid
pub const PROJECTS_PAGE_SIZE: usize = 6;

// Parallax reveal
pub const REVEAL_MAX_IMAGES: usize = 12;

// Cursor follower easing per frame
pub const CURSOR_RING_EASE: f32 = 0.18;
pub const CURSOR_DOT_EASE: f32 = 0.6;
pub const CURSOR_RING_HALF: f32 = 12.0; // px, half the ring size
pub const CURSOR_DOT_HALF: f32 = 2.0;

// Canvas colours
pub const STARFIELD_BACKDROP: &str = "rgba(0, 0, 0, 0.9)";
pub const SPHERE_POINT_RGB: (u8, u8, u8) = (150, 210, 255);
pub const SPHERE_LINK_RGB: (u8, u8, u8) = (100, 180, 255);
