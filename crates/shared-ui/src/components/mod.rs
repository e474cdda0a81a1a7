// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod rating;
pub mod skeleton;

// Primitive wrappers
pub mod avatar;

// Navigation
pub mod mobile_nav;
pub mod navbar;
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use mobile_nav::*;
pub use navbar::*;
pub use page_header::*;
pub use rating::*;
pub use sidebar::*;
pub use skeleton::*;
