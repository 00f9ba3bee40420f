//! Platform-independent logic for the folio site: project data, particle and
//! starfield simulation, marquee speed control, scroll timelines and the
//! contact form state machine. Nothing here touches the DOM.

pub mod capability;
pub mod constants;
pub mod contact;
pub mod cursor;
pub mod easing;
pub mod error;
pub mod gate;
pub mod loader;
pub mod marquee;
pub mod particles;
pub mod point_cloud;
pub mod projects;
pub mod scroll;
pub mod starfield;
pub mod theme;

pub use capability::*;
pub use contact::*;
pub use cursor::*;
pub use easing::*;
pub use error::FolioError;
pub use gate::*;
pub use loader::*;
pub use marquee::*;
pub use particles::*;
pub use point_cloud::*;
pub use projects::*;
pub use scroll::*;
pub use starfield::*;
pub use theme::*;
