pub mod assets;
pub mod client;
pub mod region;
pub mod types;

pub use client::{ProfileClient, ProfileSource};
pub use region::Region;
pub use types::{MatchOutcome, PlayerProfile, StatValue};
