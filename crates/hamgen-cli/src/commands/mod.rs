pub mod distance;
pub mod enum_template;
pub mod generate;
pub mod params;
pub mod suggest;
