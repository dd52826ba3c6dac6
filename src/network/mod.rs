pub mod builder;
pub mod config;
pub mod topology;

pub use builder::ConfigurationBuilder;
pub use config::NetworkConfiguration;
pub use topology::NetworkTopology;
