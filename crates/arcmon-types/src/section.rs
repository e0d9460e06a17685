/// One named block of collected agent output.
///
/// The payload is kept as raw lines; each check plugin's parse stage decides
/// how to interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub name: String,
    pub lines: Vec<String>,
}

impl RawSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }
}
