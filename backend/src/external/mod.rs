//! External service integrations

pub mod sensor_feed;
