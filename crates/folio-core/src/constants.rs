// Shared tuning constants for the folio visual effects.

// Viewport
pub const NARROW_VIEWPORT_PX: f64 = 768.0; // below this width the mobile profile is used
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0; // canvas backing store never exceeds 2x

// Floating particle field
pub const PARTICLE_COUNT_DESKTOP: usize = 25;
pub const PARTICLE_COUNT_MOBILE: usize = 12;
pub const PARTICLE_DRIFT_X: f32 = 15.0; // px of horizontal sway
pub const PARTICLE_DRIFT_Y: f32 = 30.0; // px of vertical bob
pub const PARTICLE_WRAP_MARGIN: f32 = 10.0; // px outside bounds before wrapping
pub const PARTICLE_GLOW_SCALE: f32 = 4.0; // outer glow radius = size * this
pub const PARTICLE_CORE_SCALE: f32 = 1.5; // inner core radius = size * this
pub const PARTICLE_COLOR: [u8; 3] = [100, 180, 255];
pub const PARTICLE_CORE_COLOR: [u8; 3] = [160, 210, 255];
pub const PARTICLE_MAX_DT: f32 = 0.05; // clamp long frames (tab switches) to avoid jumps

// Hero point cloud
pub const SPHERE_POINTS_DESKTOP: usize = 420;
pub const SPHERE_POINTS_MOBILE: usize = 180;
pub const SPHERE_RADIUS: f32 = 220.0;
pub const SPHERE_FOCAL: f32 = 600.0; // perspective focal distance
pub const SPHERE_CAMERA_Z: f32 = 600.0; // sphere centre distance from the camera
pub const SPHERE_EASE: f32 = 0.05; // per-frame rotation easing
pub const SPHERE_MAX_YAW: f32 = 0.9; // radians at pointer x = +-1
pub const SPHERE_MAX_PITCH: f32 = 0.6; // radians at pointer y = +-1
pub const SPHERE_AUTOPLAY_RATE: f32 = 0.25; // radians per second
pub const SPHERE_MIN_SCALE: f32 = 0.75; // projected points below this are skipped
pub const SPHERE_LINK_DISTANCE: f32 = 42.0; // px
pub const SPHERE_MAX_LINKS: usize = 350; // per frame

// Starfield dive
pub const STAR_NEAR: f32 = 1.0;
pub const STAR_FAR: f32 = 2000.0;
pub const STAR_FOCAL: f32 = 1000.0;
pub const STAR_Z_PER_PROGRESS: f32 = 2000.0; // depth travelled per unit of scroll progress
pub const STAR_ACCEL: f32 = 2.0; // speed factor grows as 1 + progress * STAR_ACCEL
pub const STAR_IDLE_DRIFT: f32 = 0.6; // depth units per frame when not scrolling
pub const STAR_MAX_SIZE: f32 = 3.0;
pub const STAR_TRAIL_MIN_SPEED: f32 = 0.5;
pub const STAR_COUNT_DESKTOP: usize = 800;
pub const STAR_COUNT_MOBILE: usize = 300;
pub const DIVE_DISTANCE_DESKTOP: f32 = 2.0; // pinned scroll distance in viewport heights
pub const DIVE_DISTANCE_MOBILE: f32 = 1.2;

// Marquee
pub const MARQUEE_BASE_SPEED: f32 = 0.3;
pub const MARQUEE_VELOCITY_GAIN: f32 = 1.5;
pub const MARQUEE_BOOST_CAP: f32 = 1.5;
pub const MARQUEE_IDLE_TIMEOUT_MS: f64 = 200.0;
pub const MARQUEE_MIN_SAMPLE_MS: f64 = 16.0; // guards against velocity spikes
pub const MARQUEE_SPEED_EASE: f32 = 0.08;
pub const MARQUEE_HOVER_EASE: f32 = 0.08;
pub const MARQUEE_HOVER_FACTOR: f32 = 0.15;
pub const MARQUEE_REPEAT: usize = 4; // content copies per row
pub const MARQUEE_ROW_SECS: [f32; 10] = [35.0, 40.0, 37.0, 42.0, 38.0, 36.0, 33.0, 39.0, 41.0, 34.0];
pub const MARQUEE_FALLBACK_SECS: f32 = 35.0;
pub const MARQUEE_MIN_PER_ROW: usize = 5;
pub const MARQUEE_PARTICLES_DESKTOP: usize = 30;
pub const MARQUEE_PARTICLES_MOBILE: usize = 10;

// Parallax reveal
pub const PARALLAX_SPEEDS: [f32; 12] = [1.8, 1.4, 2.0, 1.6, 1.9, 1.5, 2.1, 1.7, 1.8, 1.5, 1.9, 1.6];
pub const PARALLAX_STAGGER_DESKTOP: f32 = 0.15;
pub const PARALLAX_STAGGER_MOBILE: f32 = 0.08;
pub const PARALLAX_LEAD_IN: f32 = 0.6; // timeline time before the first image starts
pub const PARALLAX_SLIDE: f32 = 2.5; // slide length at speed 1, in timeline units
pub const PARALLAX_FADE: f32 = 0.3; // fade-in and fade-out length
pub const PARALLAX_FADE_OUT_LEAD_DESKTOP: f32 = 0.5; // fade-out starts this long before the slide ends
pub const PARALLAX_FADE_OUT_LEAD_MOBILE: f32 = 0.2;
pub const PARALLAX_TEXT_SLIDE: f32 = 1.8;
pub const PARALLAX_TEXT_FADE_OUT_LEAD: f32 = 0.4;
pub const PARALLAX_DISTANCE: f32 = 3.5; // pinned scroll distance in viewport heights

// Smooth scrolling
pub const SMOOTH_SCROLL_SECS: f32 = 1.2;
pub const TOUCH_MULTIPLIER: f32 = 2.0;
pub const WHEEL_MULTIPLIER: f32 = 1.0;

// Loader
pub const LOADER_FRAME_MS: f64 = 1400.0;
pub const LOADER_REVEAL_SCROLL_PX: f64 = 50.0;

// Contact
pub const CONTACT_RESET_MS: u32 = 3000;
pub const CONTACT_RECIPIENT: &str = "ville@example.com";
