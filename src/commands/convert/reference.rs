#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ReferenceParts {
    pub reference: String,
    pub title: String,
}

pub(super) fn split_reference(raw: &str) -> Option<ReferenceParts> {
    let normalized = normalize_paragraph_text(raw);
    let mut words = normalized.split_whitespace();
    let mut reference = words.next()?.to_string();
    let mut rest = words.collect::<Vec<&str>>();

    if has_trailing_marker(&normalized, reference.chars().count()) {
        reference.push_str(rest.remove(0));
    }

    Some(ReferenceParts {
        reference,
        title: rest.join(" "),
    })
}

fn normalize_paragraph_text(raw: &str) -> String {
    raw.to_uppercase()
        .replace("\r\n", " ")
        .replace(['\n', '\r', '\u{000b}'], " ")
        .trim()
        .to_string()
}

// A one-character token separated from the reference by exactly one space and
// followed by whitespace belongs to the reference ("10 A ROOF" -> "10A").
fn has_trailing_marker(normalized: &str, reference_len: usize) -> bool {
    let mut tail = normalized.chars().skip(reference_len);

    let separator = tail.next();
    let marker = tail.next();
    let after = tail.next();

    matches!(
        (separator, marker, after),
        (Some(' '), Some(marker), Some(after)) if !marker.is_whitespace() && after.is_whitespace()
    )
}
