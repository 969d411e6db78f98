use super::classifier::split_essence;

/// Returns true if the stored media type satisfies the client's `Accept`
/// header.
///
/// The header is a comma-separated list of patterns; each pattern matches
/// the stored type exactly or via a `type/*` / `*/*` wildcard. An absent or
/// blank header accepts anything. Unparseable patterns match nothing.
pub fn accept_allows(accept: Option<&str>, stored: &str) -> bool {
    let header = match accept {
        Some(value) if !value.trim().is_empty() => value,
        _ => return true,
    };

    let (stored_kind, stored_subtype) = match split_essence(stored) {
        Some(parts) => parts,
        None => return false,
    };

    header.split(',').any(|pattern| match split_essence(pattern) {
        Some((kind, subtype)) => {
            (kind == "*" && subtype == "*")
                || (kind == stored_kind && (subtype == "*" || subtype == stored_subtype))
        }
        None => false,
    })
}
