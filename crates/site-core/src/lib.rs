pub mod constants;
pub mod counter;
pub mod nav;
pub mod particles;
pub mod portfolio;
pub mod prefs;
pub mod preloader;
pub mod registry;
pub mod reveal;
pub mod subscription;
pub mod theme;
pub mod validate;

pub use constants::*;
pub use counter::*;
pub use nav::*;
pub use particles::*;
pub use portfolio::*;
pub use prefs::*;
pub use preloader::*;
pub use registry::*;
pub use reveal::*;
pub use subscription::*;
pub use theme::*;
pub use validate::*;
