use std::cmp::Ordering;

/// Segment separators for version strings
const SEPARATORS: [char; 2] = ['.', '-'];

/// Orders version strings segment by segment.
///
/// Versions are split on `.` and `-`. Segments made only of ASCII digits compare
/// numerically, anything else compares as a case-sensitive string. When all shared
/// segments are equal, the version with fewer segments is smaller.
///
/// This is not semantic versioning: `1.0.0` sorts below `1.0.0-RC1`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split(SEPARATORS);
    let mut right = b.split(SEPARATORS);

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match compare_segments(l, r) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_segments(left: &str, right: &str) -> Ordering {
    if is_numeric(left) && is_numeric(right) {
        compare_numeric(left, right)
    } else {
        left.cmp(right)
    }
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Compares digit strings without parsing, so overlong segments cannot overflow
fn compare_numeric(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Picks the highest version under [`compare_versions`].
///
/// Returns `None` for an empty input. On ties the last candidate wins, which keeps
/// the choice deterministic for ordered inputs.
pub fn highest_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    versions
        .into_iter()
        .max_by(|a, b| compare_versions(a, b))
}
