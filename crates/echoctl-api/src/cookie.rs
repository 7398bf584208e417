// Session cookie helpers
//
// The stored credential is a raw `Cookie` header blob captured from the
// vendor's web login. The service occasionally rotates individual pairs
// via `Set-Cookie` on the bootstrap response; `merge_set_cookies` splices
// those into the blob so the caller can persist the refreshed value.

/// Extract the `csrf` pair from a cookie blob, if present.
///
/// The csrf token doubles as a cookie entry; most captured blobs carry it,
/// so an explicit csrf credential is optional.
pub fn extract_csrf(blob: &str) -> Option<String> {
    blob.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("csrf="))
        .map(str::to_owned)
}

/// Merge `Set-Cookie` response values into an existing cookie blob.
///
/// Each value's leading `name=value` segment replaces the matching pair in
/// the blob, or is appended if absent. Returns `Some(merged)` only when the
/// blob actually changed, so callers can treat the result as a rotation
/// signal.
pub fn merge_set_cookies(blob: &str, set_cookies: &[String]) -> Option<String> {
    let mut pairs: Vec<(String, String)> = blob
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| match p.split_once('=') {
            Some((name, value)) => (name.to_owned(), value.to_owned()),
            None => (p.to_owned(), String::new()),
        })
        .collect();

    let mut changed = false;
    for raw in set_cookies {
        let Some(head) = raw.split(';').next() else {
            continue;
        };
        let Some((name, value)) = head.split_once('=') else {
            continue;
        };
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() {
            continue;
        }
        match pairs.iter_mut().find(|(n, _)| n == name) {
            Some(pair) if pair.1 == value => {}
            Some(pair) => {
                pair.1 = value.to_owned();
                changed = true;
            }
            None => {
                pairs.push((name.to_owned(), value.to_owned()));
                changed = true;
            }
        }
    }

    if !changed {
        return None;
    }

    let merged = pairs
        .into_iter()
        .map(|(name, value)| {
            if value.is_empty() {
                name
            } else {
                format!("{name}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join("; ");
    Some(merged)
}
