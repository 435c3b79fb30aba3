//! The fixed set of localities the rent model was fitted on.

use std::iter;

/// Label of the "nothing chosen yet" entry shown ahead of the localities.
pub const PLACEHOLDER: &str = "Select Locality";

/// Known localities, in display order.
pub const LOCALITIES: [&str; 8] = [
    "pal", "palanpur", "vesu", "adajan", "bhatar", "varachha", "udhna", "katargam",
];

/// Returns whether `name` is one of the known localities.
pub fn is_known(name: &str) -> bool {
    LOCALITIES.contains(&name)
}

/// Returns whether `name` is the placeholder entry.
pub fn is_placeholder(name: &str) -> bool {
    name == PLACEHOLDER
}

/// Every selectable entry: the placeholder first, then the localities.
pub fn options() -> impl Iterator<Item = &'static str> {
    iter::once(PLACEHOLDER).chain(LOCALITIES)
}
