// crates/domain/src/metadata.rs
use chrono::{DateTime, TimeZone};

/// Sentinel used for revision and branch when no live VCS data is available.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel used for the repository URL when no live VCS data is available.
pub const UNKNOWN_URL: &str = "file://cwd";

/// `HH:MMAM on Month DD, YYYY`, 12-hour clock, English month names.
pub const BUILD_DATE_FORMAT: &str = "%I:%M%p on %B %d, %Y";

/// Strip surrounding carriage returns and line feeds.
///
/// Subprocess output on Windows keeps a trailing `\r` even after the line
/// feed is removed, so every metadata field passes through here.
pub fn strip_line_endings(value: &str) -> &str {
    value.trim_matches(|c| c == '\r' || c == '\n')
}

/// Format the build timestamp the way the generated annotation expects it.
pub fn format_build_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(BUILD_DATE_FORMAT).to_string()
}

/// Revision, branch and URL of the scanned tree. Always assigned as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionInfo {
    pub revision: String,
    pub branch: String,
    pub url: String,
}

impl RevisionInfo {
    /// The fallback triple used whenever the revision query fails.
    pub fn unknown() -> Self {
        Self { revision: UNKNOWN.to_string(), branch: UNKNOWN.to_string(), url: UNKNOWN_URL.to_string() }
    }

    /// Build the triple from a successful revision query.
    ///
    /// `branch` is `None` when the branch query itself failed. The URL is
    /// `git://{hostname}/{source_path}`; `source_path` must already use `/`
    /// separators.
    pub fn from_repository(revision: &str, branch: Option<&str>, hostname: &str, source_path: &str) -> Self {
        let branch = branch
            .map(|b| strip_line_endings(b).trim_matches(|c| c == '*' || c == ' '))
            .unwrap_or_default();
        Self {
            revision: strip_line_endings(revision).to_string(),
            branch: branch.to_string(),
            url: format!("git://{hostname}/{source_path}"),
        }
        .with_defaults()
    }

    /// Replace empty branch or URL with their sentinels.
    pub fn with_defaults(mut self) -> Self {
        if self.branch.is_empty() {
            self.branch = UNKNOWN.to_string();
        }
        if self.url.is_empty() {
            self.url = UNKNOWN_URL.to_string();
        }
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.revision == UNKNOWN
    }
}

/// Everything embedded in the generated annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: String,
    pub short_version: String,
    pub revision: String,
    pub branch: String,
    pub user: String,
    pub date: String,
    pub url: String,
    pub src_checksum: String,
}

impl BuildMetadata {
    /// Assemble the record, stripping line endings from every field.
    pub fn new(
        version: &str,
        short_version: &str,
        revision: RevisionInfo,
        user: &str,
        date: &str,
        src_checksum: &str,
    ) -> Self {
        let RevisionInfo { revision, branch, url } = revision.with_defaults();
        Self {
            version: strip_line_endings(version).to_string(),
            short_version: strip_line_endings(short_version).to_string(),
            revision: strip_line_endings(&revision).to_string(),
            branch: strip_line_endings(&branch).to_string(),
            user: strip_line_endings(user).to_string(),
            date: strip_line_endings(date).to_string(),
            url: strip_line_endings(&url).to_string(),
            src_checksum: strip_line_endings(src_checksum).to_string(),
        }
    }
}
