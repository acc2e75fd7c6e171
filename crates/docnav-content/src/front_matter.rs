//! Front matter splitting and parsing.

use crate::entry::FrontMatter;

/// Why a front matter block could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Opening `---` fence without a closing one.
    #[error("front matter block is not closed")]
    Unterminated,
    /// Block content is not valid YAML for [`FrontMatter`].
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split a document into front matter and body, then parse the front matter.
///
/// The block must start on the first line with `---` and end at the next line
/// that is exactly `---`. A document without the opening fence has default
/// front matter and its whole text as body. An empty block also yields
/// defaults.
pub(crate) fn parse_document(text: &str) -> Result<(FrontMatter, String), FrontMatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.lines();
    if lines.next().map(str::trim_end) != Some("---") {
        return Ok((FrontMatter::default(), text.to_owned()));
    }

    let mut yaml = String::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == "---" {
            closed = true;
            break;
        }
        yaml.push_str(line);
        yaml.push('\n');
    }
    if !closed {
        return Err(FrontMatterError::Unterminated);
    }

    let body = lines.collect::<Vec<_>>().join("\n");

    let data = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(&yaml)?
    };

    Ok((data, body))
}
