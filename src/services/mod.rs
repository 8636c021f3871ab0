//! Outbound collaborators: the statistics source and the image lookup

pub mod corona_client;
pub mod image_provider;

pub use corona_client::{CoronaClient, CoronaError, GermanyStats, StatsMeta, StatsProvider};
pub use image_provider::{ImageProvider, NoImageProvider};
