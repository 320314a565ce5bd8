pub mod animate;
pub mod areas;
pub mod config;
pub mod hours;
pub mod params;
