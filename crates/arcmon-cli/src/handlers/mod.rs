pub mod agent;
pub mod check;
pub mod plugins;
