use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::arc_state::{self, ArcStatePlugin};
use crate::machine_extension::{self, MachineExtensionPlugin};
use crate::traits::CheckPlugin;

/// Static description of one registered check plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub section: &'static str,
    pub service: &'static str,
}

const PLUGINS: &[PluginMetadata] = &[
    PluginMetadata {
        name: arc_state::PLUGIN_NAME,
        section: arc_state::SECTION_NAME,
        service: arc_state::SERVICE_NAME,
    },
    PluginMetadata {
        name: machine_extension::PLUGIN_NAME,
        section: machine_extension::SECTION_NAME,
        service: machine_extension::SERVICE_NAME,
    },
];

pub fn all_plugins() -> &'static [PluginMetadata] {
    PLUGINS
}

pub fn plugin_names() -> Vec<&'static str> {
    PLUGINS.iter().map(|p| p.name).collect()
}

pub fn plugin_metadata(name: &str) -> Option<&'static PluginMetadata> {
    PLUGINS.iter().find(|p| p.name == name)
}

/// Create a check plugin by name
pub fn create_plugin(name: &str) -> Result<Box<dyn CheckPlugin>> {
    match name {
        arc_state::PLUGIN_NAME => Ok(Box::new(ArcStatePlugin)),
        machine_extension::PLUGIN_NAME => Ok(Box::new(MachineExtensionPlugin)),
        _ => Err(anyhow!("Unknown check plugin: {}", name)),
    }
}

/// Create every registered check plugin, in registry order
pub fn create_all_plugins() -> Vec<Box<dyn CheckPlugin>> {
    vec![Box::new(ArcStatePlugin), Box::new(MachineExtensionPlugin)]
}

/// Find the plugin registered for an agent section name
pub fn find_plugin_for_section(section: &str) -> Option<Box<dyn CheckPlugin>> {
    create_all_plugins()
        .into_iter()
        .find(|plugin| plugin.section_name() == section)
}
