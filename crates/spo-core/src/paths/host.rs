//! Host and site extraction from a session context URL.

use super::{strip_scheme, SITES_PREFIX};

/// Authority of `context_url` (`https://<authority>/...` → `<authority>`).
///
/// A context URL without a scheme is returned unchanged.
pub fn host_name(context_url: &str) -> &str {
    match strip_scheme(context_url) {
        Some(rest) => rest.split('/').next().unwrap_or(rest),
        None => context_url,
    }
}

/// Site collection name: the segment after `/sites/` in `context_url`.
///
/// Host-only context URLs have no site; the result then degenerates to the
/// whole context URL trimmed of leading and trailing `/`.
pub fn site_name(context_url: &str) -> &str {
    let path = strip_scheme(context_url).and_then(|rest| rest.find('/').map(|i| &rest[i..]));

    let site = path.and_then(|path| {
        let idx = path.find(SITES_PREFIX)?;
        path[idx + SITES_PREFIX.len()..]
            .split('/')
            .find(|segment| !segment.is_empty())
    });

    site.unwrap_or_else(|| context_url.trim_matches('/'))
}
