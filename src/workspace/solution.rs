use crate::error::{not_found, Result};

pub const DESC_START: &str = "@desc-start";
pub const DESC_END: &str = "@desc-end";
pub const CODE_START: &str = "@code-start";
pub const CODE_END: &str = "@code-end";

/// Builds a fresh solution file: a comment-delimited description block,
/// two blank separator lines, then the starter snippet between code
/// sentinels.
pub fn render(description: &str, snippet: &str, comment: &str) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} {}", comment, DESC_START));
    for line in description.lines() {
        lines.push(format!("{} {}", comment, line));
    }
    lines.push(format!("{} {}", comment, DESC_END));
    lines.push(String::new());
    lines.push(String::new());
    lines.push(format!("{} {}", comment, CODE_START));
    for line in snippet.lines() {
        lines.push(line.to_owned());
    }
    lines.push(format!("{} {}", comment, CODE_END));
    lines.join("\n")
}

fn marker_index(lines: &[&str], marker: &str) -> Result<usize> {
    let mut found = None;
    for (index, line) in lines.iter().enumerate() {
        if line.contains(marker) {
            if found.is_some() {
                return Err(not_found(format!("Duplicated {} marker!", marker)));
            }
            found = Some(index);
        }
    }
    found.ok_or_else(|| not_found(format!("Missing {} marker!", marker)))
}

fn code_span(lines: &[&str]) -> Result<(usize, usize)> {
    let start = marker_index(lines, CODE_START)?;
    let end = marker_index(lines, CODE_END)?;
    if start >= end {
        return Err(not_found("Code markers out of order!"));
    }
    Ok((start, end))
}

/// Exactly the lines strictly between the code sentinels, both marker
/// lines excluded.
pub fn extract_code(content: &str) -> Result<String> {
    let lines: Vec<&str> = content.lines().collect();
    let (start, end) = code_span(&lines)?;
    Ok(lines[start + 1..end].join("\n"))
}

/// Replaces the code region with `code`, leaving the description block and
/// both marker lines untouched.
pub fn splice_code(content: &str, code: &str) -> Result<String> {
    let lines: Vec<&str> = content.lines().collect();
    let (start, end) = code_span(&lines)?;
    let mut out: Vec<&str> = Vec::new();
    out.extend_from_slice(&lines[..=start]);
    out.extend(code.lines());
    out.extend_from_slice(&lines[end..]);
    Ok(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    const SNIPPET: &str = "class Solution {\n    int twoSum() {}\n}";

    #[test]
    fn render_then_extract_returns_snippet() {
        let file = render("Given an array.\nReturn indices.", SNIPPET, "//");
        assert_eq!(extract_code(&file).unwrap(), SNIPPET);
    }

    #[test]
    fn extract_excludes_marker_lines() {
        let file = "// @code-start\nbody\n// @code-end";
        assert_eq!(extract_code(file).unwrap(), "body");
    }

    #[test]
    fn description_lines_are_commented() {
        let file = render("line one", "code", "#");
        assert!(file.starts_with("# @desc-start\n# line one\n# @desc-end"));
    }

    #[test]
    fn missing_marker_is_not_found() {
        let err = extract_code("no markers at all").unwrap_err();
        assert!(matches!(err.kind(), Kind::NotFound));
    }

    #[test]
    fn duplicated_marker_is_not_found() {
        let file = "// @code-start\n// @code-start\nbody\n// @code-end";
        assert!(extract_code(file).is_err());
    }

    #[test]
    fn inverted_markers_are_not_found() {
        let file = "// @code-end\nbody\n// @code-start";
        assert!(extract_code(file).is_err());
    }

    #[test]
    fn splice_preserves_description() {
        let file = render("the description", SNIPPET, "//");
        let spliced = splice_code(&file, "int accepted() {}").unwrap();
        assert!(spliced.contains("// the description"));
        assert_eq!(extract_code(&spliced).unwrap(), "int accepted() {}");
        assert!(!spliced.contains("twoSum"));
    }
}
