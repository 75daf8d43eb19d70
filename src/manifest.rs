use globe_core::ProjectEntry;

/// Projects in placement order; the two cut-out images are transparent PNGs.
const PROJECTS: &[(&str, bool)] = &[
    ("localmeantime", false),
    ("everythingisinterestingonce", false),
    ("paranoidcentrist", false),
    ("landuse", true),
    ("borderlands", true),
    ("theview", false),
    ("za", false),
    ("everybodyelse", false),
];

pub fn texture_url(id: &str, transparent: bool) -> String {
    let ext = if transparent { "png" } else { "jpg" };
    format!("/img/{id}.{ext}")
}

pub fn projects() -> Vec<ProjectEntry> {
    PROJECTS
        .iter()
        .map(|&(id, transparent)| ProjectEntry::new(id, texture_url(id, transparent), transparent))
        .collect()
}
