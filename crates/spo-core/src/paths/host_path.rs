//! Absolute URL of an object from whatever path information its handle exposes.

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::SpoConfig;

/// Identity marker preceding the core path of a file.
pub const FILE_MARKER: &str = ":file:";
/// Identity marker preceding the core path of a folder.
pub const FOLDER_MARKER: &str = ":folder:";

const EMBEDDED_SCHEME: &str = "https://";

/// Rules for recognising a full URL nested inside another site's path identity.
///
/// Some backends report identities like
/// `/sites/a/https://contoso.sharepoint.com/sites/b/doc.docx`; the embedded URL
/// is only trusted when its host ends with one of `nested_host_suffixes`.
#[derive(Debug, Clone)]
pub struct PathRules {
    nested_host_suffixes: Vec<String>,
    nested_url: Option<Regex>,
}

impl PathRules {
    /// Build rules from host suffixes such as `sharepoint.com`.
    ///
    /// Suffixes are lowercased and stripped of leading dots; an empty list
    /// disables nested-URL detection.
    pub fn new<I, S>(suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nested_host_suffixes: Vec<String> = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let nested_url = if nested_host_suffixes.is_empty() {
            None
        } else {
            let alternation = nested_host_suffixes
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?is)^/sites/.*/https://.*\.(?:{alternation})/sites.*$");
            let re = Regex::new(&pattern)
                .with_context(|| format!("invalid nested-url pattern: {pattern}"))?;
            Some(re)
        };

        Ok(Self {
            nested_host_suffixes,
            nested_url,
        })
    }

    /// Build rules from the loaded configuration.
    pub fn from_config(cfg: &SpoConfig) -> Result<Self> {
        Self::new(&cfg.nested_host_suffixes)
    }

    pub fn nested_host_suffixes(&self) -> &[String] {
        &self.nested_host_suffixes
    }

    fn is_nested_url(&self, core_path: &str) -> bool {
        self.nested_url
            .as_ref()
            .is_some_and(|re| re.is_match(core_path))
    }
}

impl Default for PathRules {
    fn default() -> Self {
        Self::new(SpoConfig::default().nested_host_suffixes)
            .expect("escaped default suffix always compiles")
    }
}

/// Core path fragment of a path identity: everything after the first
/// `:file:` or `:folder:` marker, or the whole identity when neither occurs.
pub fn core_path(path_identity: &str) -> &str {
    let start = [FILE_MARKER, FOLDER_MARKER]
        .iter()
        .filter_map(|marker| {
            path_identity
                .find(marker)
                .map(|idx| (idx, idx + marker.len()))
        })
        .min_by_key(|&(idx, _)| idx)
        .map_or(0, |(_, end)| end);
    &path_identity[start..]
}

/// Embedded absolute URL of a nested core path, if `core_path` is one.
///
/// The match is case-insensitive; the URL is returned verbatim from its
/// `https://` onwards.
pub fn nested_url<'a>(core_path: &'a str, rules: &PathRules) -> Option<&'a str> {
    if !rules.is_nested_url(core_path) {
        return None;
    }
    // ASCII lowercasing keeps byte offsets; the scheme may not start at 0.
    let lower = core_path.to_ascii_lowercase();
    let idx = lower.get(1..)?.find(EMBEDDED_SCHEME)? + 1;
    Some(&core_path[idx..])
}

/// Absolute URL of an object.
///
/// Tried in order: the server-relative URL joined to `host_name`, a nested
/// URL embedded in the identity's core path, then the core path joined to
/// `host_name`.
pub fn host_path(
    host_name: &str,
    server_relative_url: Option<&str>,
    path_identity: &str,
    rules: &PathRules,
) -> String {
    if let Some(url) = server_relative_url.filter(|u| !u.is_empty()) {
        return format!("https://{host_name}{url}");
    }

    let core = core_path(path_identity);
    match nested_url(core, rules) {
        Some(url) => url.to_string(),
        None => format!("https://{host_name}{core}"),
    }
}
