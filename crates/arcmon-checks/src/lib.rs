// Error types
pub mod error;

// Trait-based plugin contract (public API)
pub mod traits;

// Check plugin implementations
pub mod arc_state;
pub mod machine_extension;

// Parameter bundle
pub mod params;

// Plugin registry
pub mod registry;

// Traits
pub use traits::CheckPlugin;

// Parameters
pub use params::CheckParams;

// Registry
pub use registry::{
    PluginMetadata, all_plugins, create_all_plugins, create_plugin, find_plugin_for_section,
    plugin_metadata, plugin_names,
};

// Error types
pub use error::{Error, Result};
