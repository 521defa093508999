#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod config;
pub mod model;
pub mod render;
pub mod validation;
pub mod value_objects;
