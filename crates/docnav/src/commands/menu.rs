//! `docnav menu` command implementation.

use clap::Args;
use docnav_site::{Feature, MenuLink, MenuNode};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the menu command.
#[derive(Args, Debug)]
pub(crate) struct MenuArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Include draft pages in the text output.
    #[arg(long)]
    drafts: bool,
}

impl MenuArgs {
    /// Execute the menu command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let opened = self.site.open()?;
        opened.require(Feature::SideNavigation)?;
        let items = opened.site.menu(&opened.locale)?;
        let links = opened.site.links(&opened.locale)?;

        if self.site.json {
            let json = serde_json::json!({ "items": items, "links": links });
            output.line(&serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        for line in render_tree(&items, self.drafts) {
            output.line(&line);
        }
        if !links.is_empty() {
            output.line("");
            for line in render_links(&links) {
                output.line(&output.dim(&line));
            }
        }
        Ok(())
    }
}

/// Indented `title (/slug)` lines, two spaces per level.
fn render_tree(items: &[MenuNode], drafts: bool) -> Vec<String> {
    let mut lines = Vec::new();
    push_nodes(items, 0, drafts, &mut lines);
    lines
}

fn push_nodes(items: &[MenuNode], level: usize, drafts: bool, lines: &mut Vec<String>) {
    for node in items {
        if node.draft && !drafts {
            continue;
        }
        let marker = if node.draft { " [draft]" } else { "" };
        lines.push(format!(
            "{}{} (/{}){marker}",
            "  ".repeat(level),
            node.title,
            node.slug
        ));
        push_nodes(&node.children, level + 1, drafts, lines);
    }
}

fn render_links(links: &[MenuLink]) -> Vec<String> {
    links
        .iter()
        .map(|link| format!("{} -> {}", link.title, link.href))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(title: &str, slug: &str, draft: bool, children: Vec<MenuNode>) -> MenuNode {
        MenuNode {
            title: title.to_owned(),
            id: slug.to_owned(),
            slug: slug.to_owned(),
            draft,
            children,
        }
    }

    fn tree() -> Vec<MenuNode> {
        vec![
            node("Getting Started", "getting-started", false, Vec::new()),
            node(
                "Guides",
                "guides",
                false,
                vec![
                    node("Pages", "guides/pages", false, Vec::new()),
                    node("Wip", "guides/wip", true, Vec::new()),
                ],
            ),
        ]
    }

    #[test]
    fn test_render_tree_indents_children() {
        let lines = render_tree(&tree(), false);

        assert_eq!(
            lines,
            vec![
                "Getting Started (/getting-started)",
                "Guides (/guides)",
                "  Pages (/guides/pages)",
            ]
        );
    }

    #[test]
    fn test_render_tree_marks_drafts() {
        let lines = render_tree(&tree(), true);

        assert_eq!(lines.last().unwrap(), "  Wip (/guides/wip) [draft]");
    }

    #[test]
    fn test_render_links() {
        let links = vec![MenuLink {
            title: "Blog".to_owned(),
            href: "/blog".to_owned(),
        }];

        assert_eq!(render_links(&links), vec!["Blog -> /blog"]);
    }
}
