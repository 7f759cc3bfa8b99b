//! Server-relative, site-relative and parent paths.

use std::borrow::Cow;

use super::{strip_scheme, SITES_PREFIX};

/// Path component of an absolute URL, always starting with `/`.
///
/// `https://host/a/b` → `/a/b`; `https://host` → `/`. Input without a scheme
/// is treated as a path and gains a leading `/` if it lacks one.
pub fn server_relative_path(host_path: &str) -> Cow<'_, str> {
    match strip_scheme(host_path) {
        Some(rest) => match rest.find('/') {
            Some(idx) => Cow::Borrowed(&rest[idx..]),
            None => Cow::Borrowed("/"),
        },
        None if host_path.starts_with('/') => Cow::Borrowed(host_path),
        None => Cow::Owned(format!("/{host_path}")),
    }
}

/// Server-relative path with a leading `/sites/<site>/` removed.
///
/// Paths outside a site collection pass through unchanged.
pub fn site_relative_path(server_relative_path: &str) -> &str {
    let Some(rest) = server_relative_path.strip_prefix(SITES_PREFIX) else {
        return server_relative_path;
    };
    // Site segment is at least one character long.
    match rest.char_indices().skip(1).find(|&(_, c)| c == '/') {
        Some((idx, _)) => &rest[idx + 1..],
        None => server_relative_path,
    }
}

/// Site-relative path without its final `/segment`; empty when there is no `/`.
pub fn parent(site_relative_path: &str) -> &str {
    site_relative_path
        .rfind('/')
        .map_or("", |idx| &site_relative_path[..idx])
}
