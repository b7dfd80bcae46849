pub mod dashboard;
pub mod topbar;

pub use dashboard::{Dashboard, Header};
pub use topbar::Topbar;
