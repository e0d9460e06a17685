use serde::{Deserialize, Serialize};

use crate::arc_state::ArcStateParams;
use crate::machine_extension::MachineExtensionParams;

/// Parameter bundle handed to every plugin's evaluate stage.
///
/// Each plugin reads its own slice; the slices are configured independently
/// and every field falls back to the built-in severity tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckParams {
    pub arc_state: ArcStateParams,
    pub machine_extension: MachineExtensionParams,
}
