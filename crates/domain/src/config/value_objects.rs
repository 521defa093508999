pub mod headline;
pub mod location;
pub mod setting_key;

pub use headline::Headline;
pub use location::Location;
pub use setting_key::{SettingKey, SettingValue};
