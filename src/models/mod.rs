pub mod achievement;
pub mod carbon_factor;
pub mod challenge;
pub mod challenge_member;
pub mod credits_ledger;
pub mod garden_level;
pub mod garden_watering_log;
pub mod ingest_raw;
pub mod mobility_log;
pub mod notification;
pub mod user;
pub mod user_achievement;
pub mod user_garden;
pub mod user_group;

#[allow(unused_imports)]
pub mod prelude {
    pub use super::achievement::{self, Entity as Achievement};
    pub use super::carbon_factor::{self, Entity as CarbonFactor};
    pub use super::challenge::{self, Entity as Challenge};
    pub use super::challenge_member::{self, Entity as ChallengeMember};
    pub use super::credits_ledger::{self, Entity as CreditsLedger};
    pub use super::garden_level::{self, Entity as GardenLevel};
    pub use super::garden_watering_log::{self, Entity as GardenWateringLog};
    pub use super::ingest_raw::{self, Entity as IngestRaw};
    pub use super::mobility_log::{self, Entity as MobilityLog};
    pub use super::notification::{self, Entity as Notification};
    pub use super::user::{self, Entity as User};
    pub use super::user_achievement::{self, Entity as UserAchievement};
    pub use super::user_garden::{self, Entity as UserGarden};
    pub use super::user_group::{self, Entity as UserGroup};
}
