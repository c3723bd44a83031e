pub mod challenge;
pub mod mobility;
pub mod user;

pub use challenge::*;
pub use mobility::*;
pub use user::*;
