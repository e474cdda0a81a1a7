pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod nav;
pub mod paths;
pub mod profile;
pub mod session;
pub mod site;

pub use config::*;
pub use error::*;
pub use listing::*;
pub use nav::{NavIcon, NavItem};
pub use profile::*;
pub use session::*;
pub use site::*;
