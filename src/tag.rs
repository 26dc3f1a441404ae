use crate::record::SourceLocation;

/// Pick the tag a record is reported under.
/// Only an empty tag counts as missing; whitespace is kept verbatim.
pub fn effective_tag(tag: &str, location: &SourceLocation) -> String {
    if tag.is_empty() {
        synthesized_tag(location)
    } else {
        tag.to_string()
    }
}

/// `File: <basename>, Line: <line>` for an untagged call site
pub fn synthesized_tag(location: &SourceLocation) -> String {
    format!("File: {}, Line: {}", file_name(location.file), location.line)
}

// Locations may come from either path flavour, so split on both separators.
fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
