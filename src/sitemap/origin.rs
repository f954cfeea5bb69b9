//! URL absolutization and same-origin filtering.
//!
//! Host extraction is deliberately lenient: a URL whose host cannot be
//! determined is treated as having no host, which classifies it as internal.
//! Malformed input is never an error here.

/// Make a candidate URL absolute against the base URL.
///
/// One leading slash is stripped, then the base URL (path included) is
/// prepended when the candidate carries no host of its own. Plain string
/// concatenation, no path-joining semantics.
pub fn absolutize(url: &str, base_url: &str) -> String {
    let candidate = url.strip_prefix('/').unwrap_or(url);
    if host_of(candidate).is_none() {
        format!("{base_url}{candidate}")
    } else {
        candidate.to_string()
    }
}

/// Whether a URL points at a different host than the base URL.
///
/// Hosts are compared literally, with no case folding. A URL whose host
/// cannot be resolved is never external.
pub fn is_external(url: &str, base_url: &str) -> bool {
    match (host_of(url), host_of(base_url)) {
        (Some(target), Some(origin)) => target != origin,
        _ => false,
    }
}

/// Extract the hostname of an absolute URL.
///
/// Only `scheme://host` forms carry a host. User-info and port are dropped;
/// scheme-less or malformed input yields `None`.
pub fn host_of(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");

    // user-info comes before '@'
    let host_port = match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    };

    // Split the port on the last ':' so IPv6 literals keep their brackets
    let host = match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => host_port,
    };

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
