pub mod user;
pub mod event;
pub mod aggregate;

pub use user::*;
pub use event::*;
pub use aggregate::*;
