/// Media types treated as generic catch-alls and rejected for storage.
/// `application/octet-stream` is the conventional declaration for untyped
/// bytes and carries no negotiable type information.
const GENERIC_TYPES: &[&str] = &["application/octet-stream"];

/// Classification outcome for a raw `Content-Type` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaClass {
    /// A well-formed `type/subtype`, normalized (lowercased, parameters
    /// stripped), precise enough to store and match on read.
    Specific(String),
    /// A catch-all declaration: a wildcard position or a type on the
    /// generic list. Too unspecific to be meaningfully round-tripped.
    Generic,
    /// Missing, empty, or not parseable as `type/subtype`.
    Malformed,
}

/// Classifies a raw `Content-Type` header value.
///
/// The same function gates writes (generic and malformed declarations are
/// rejected) and normalizes the type a record is stored under, so the two
/// paths can never disagree about what counts as specific.
pub fn classify(header: Option<&str>) -> MediaClass {
    let raw = match header {
        Some(value) => value,
        None => return MediaClass::Malformed,
    };

    let (kind, subtype) = match split_essence(raw) {
        Some(parts) => parts,
        None => return MediaClass::Malformed,
    };

    if kind == "*" || subtype == "*" {
        return MediaClass::Generic;
    }

    let essence = format!("{}/{}", kind, subtype);
    if GENERIC_TYPES.contains(&essence.as_str()) {
        return MediaClass::Generic;
    }

    MediaClass::Specific(essence)
}

/// Splits a media-type value into its normalized `(type, subtype)` pair.
///
/// Parameters (`;charset=...`, `;q=...`) are stripped and both parts are
/// lowercased. Returns `None` unless both parts are non-empty HTTP tokens.
pub(crate) fn split_essence(value: &str) -> Option<(String, String)> {
    let essence = value.split(';').next().unwrap_or("").trim();
    let (kind, subtype) = essence.split_once('/')?;
    let kind = kind.trim().to_ascii_lowercase();
    let subtype = subtype.trim().to_ascii_lowercase();
    if is_token(&kind) && is_token(&subtype) {
        Some((kind, subtype))
    } else {
        None
    }
}

// Token charset per RFC 7230, which is also where '*' lives in wildcard
// patterns.
fn is_token(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
}
