use regex::Regex;
use std::sync::OnceLock;

/// Code at the start of an advisory title, e.g. `SS-2016-002` in
/// `"SS-2016-002: CSRF vulnerability..."`
const TITLE_CODE_PATTERN: &str = r"^[A-Z]+-[0-9]+(?:-[0-9]+)*";

fn title_code_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(TITLE_CODE_PATTERN).expect("title code pattern is valid"))
}

/// IdentifierPolicy for deriving the human-facing identifier of an advisory
///
/// Priority order:
/// 1. CVE identifier (if non-empty), verbatim
/// 2. Code extracted from the start of the advisory title
/// 3. The raw advisory key
///
/// Title extraction is a best-effort heuristic. Identifiers must stay stable
/// across runs.
pub struct IdentifierPolicy;

impl IdentifierPolicy {
    /// Resolves the identifier for an advisory
    ///
    /// # Arguments
    /// * `cve` - CVE field from the report, possibly empty
    /// * `title` - Advisory title
    /// * `advisory_key` - Report key of the advisory
    pub fn resolve(cve: &str, title: &str, advisory_key: &str) -> String {
        if !cve.trim().is_empty() {
            return cve.to_string();
        }

        Self::extract_from_title(title)
            .unwrap_or(advisory_key)
            .to_string()
    }

    /// Extracts a `PREFIX-digits(-digits)*` code from the start of a title
    ///
    /// Leading whitespace is ignored.
    pub fn extract_from_title(title: &str) -> Option<&str> {
        title_code_regex()
            .find(title.trim_start())
            .map(|m| m.as_str())
    }
}
