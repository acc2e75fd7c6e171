//! Table of contents hierarchy.

use docnav_content::Heading;
use serde::Serialize;

/// Top-level table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingNode {
    /// The heading itself.
    #[serde(flatten)]
    pub heading: Heading,
    /// Headings attached below it.
    pub subheadings: Vec<Heading>,
}

/// Outline of one page: its title, display timestamp and table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageOutline {
    pub title: String,
    /// Formatted display timestamp; absent when hidden or unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    pub items: Vec<HeadingNode>,
}

/// Group a flat heading list into table of contents nodes.
///
/// Headings of depth 2 and deeper open a new top-level node. Shallower
/// headings attach to the most recent top-level node and are dropped when
/// there is none yet.
pub fn create_heading_hierarchy(headings: &[Heading]) -> Vec<HeadingNode> {
    let mut nodes: Vec<HeadingNode> = Vec::new();

    for heading in headings {
        if heading.depth >= 2 {
            nodes.push(HeadingNode {
                heading: heading.clone(),
                subheadings: Vec::new(),
            });
        } else if let Some(parent) = nodes.last_mut() {
            parent.subheadings.push(heading.clone());
        }
    }

    nodes
}
