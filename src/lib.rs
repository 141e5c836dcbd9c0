pub mod cli;
pub mod configuration;
pub mod domain;
pub mod report;
pub mod source;
pub mod subscriber_list;
pub mod telemetry;
