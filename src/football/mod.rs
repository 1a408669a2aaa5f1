//! football-data.org API access and response handling.

pub mod http;
pub mod leagues;
pub mod normalize;
pub mod types;
