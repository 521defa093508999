pub mod aggregates;
pub mod value_objects;

pub use aggregates::Configuration;
pub use value_objects::{Headline, Location, SettingKey, SettingValue};
