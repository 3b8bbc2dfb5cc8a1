/// Language slug, file extension, line comment leader.
const TABLE: &[(&str, &str, &str)] = &[
    ("cpp", ".cpp", "//"),
    ("java", ".java", "//"),
    ("python", ".py", "#"),
    ("python3", ".py", "#"),
    ("c", ".c", "//"),
    ("csharp", ".cs", "//"),
    ("javascript", ".js", "//"),
    ("ruby", ".rb", "#"),
    ("swift", ".swift", "//"),
    ("golang", ".go", "//"),
    ("scala", ".scala", "//"),
    ("kotlin", ".kt", "//"),
    ("rust", ".rs", "//"),
    ("php", ".php", "//"),
    ("typescript", ".ts", "//"),
];

pub fn extension(lang: &str) -> Option<&'static str> {
    TABLE.iter().find(|r| r.0 == lang).map(|r| r.1)
}
pub fn comment(lang: &str) -> Option<&'static str> {
    TABLE.iter().find(|r| r.0 == lang).map(|r| r.2)
}
/// Reverse lookup from a bare extension (no dot). First match wins, so
/// `py` resolves to `python`.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    TABLE.iter().find(|r| &r.1[1..] == ext).map(|r| r.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language() {
        assert_eq!(extension("rust"), Some(".rs"));
        assert_eq!(comment("python3"), Some("#"));
        assert_eq!(from_extension("java"), Some("java"));
    }

    #[test]
    fn ambiguous_extension_prefers_first_entry() {
        assert_eq!(from_extension("py"), Some("python"));
    }

    #[test]
    fn unknown_language() {
        assert_eq!(extension("cobol"), None);
        assert_eq!(from_extension("md"), None);
    }
}
