pub mod frame;
pub mod id;
pub mod landmark;

pub use frame::*;
pub use id::*;
pub use landmark::*;
