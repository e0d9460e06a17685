use arcmon_types::RawSection;

/// Split raw agent output into named sections.
///
/// A section starts at a `<<<name>>>` header line and collects every
/// following non-empty line up to the next header. Headers may carry
/// transport options after a colon (`<<<name:sep(0)>>>`); only the name is
/// kept. Text before the first header is ignored, and a section name
/// repeated later in the payload replaces the earlier block.
pub fn split_sections(input: &str) -> Vec<RawSection> {
    let mut sections: Vec<RawSection> = Vec::new();
    let mut current: Option<usize> = None;

    for line in input.lines() {
        if let Some(name) = parse_header(line) {
            if let Some(pos) = sections.iter().position(|s| s.name == name) {
                sections[pos].lines.clear();
                current = Some(pos);
            } else {
                sections.push(RawSection::new(name));
                current = Some(sections.len() - 1);
            }
        } else if let Some(pos) = current
            && !line.trim().is_empty()
        {
            sections[pos].lines.push(line.to_string());
        }
    }

    sections
}

/// Extract the section name from a `<<<name>>>` or `<<<name:sep(N)>>>`
/// header line. Returns `None` for anything else.
fn parse_header(line: &str) -> Option<&str> {
    let inner = line.trim().strip_prefix("<<<")?.strip_suffix(">>>")?;
    let name = match inner.split_once(':') {
        Some((name, _options)) => name,
        None => inner,
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(name)
}
