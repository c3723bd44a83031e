pub mod accounts;
pub mod challenges;
pub mod credits;
pub mod mobility;
pub mod progress;
pub mod security;
pub mod trips;

pub use accounts::*;
pub use challenges::*;
pub use credits::*;
pub use mobility::*;
pub use progress::*;
pub use security::*;
pub use trips::*;
