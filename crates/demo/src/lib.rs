//! Driver for the clone demo: builds sample vehicles, clones them through both
//! contracts and renders the comparison as text lines.

pub mod report;
