//! Positional string distance for fuzzy dictionary matches

/// Length difference beyond which two strings are never considered close
const MAX_LENGTH_GAP: usize = 2;

/// Positional distance between two romanizations
///
/// Mismatched characters at aligned positions (up to the shorter length) plus the length
/// difference. Returns `None` (unbounded) when the lengths differ by more than 2.
/// Insertions or deletions inside a string are not modelled: "kin" vs "kiin" is 2, not 1.
pub fn positional_distance(a: &str, b: &str) -> Option<usize> {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let gap = a.len().abs_diff(b.len());
    if gap > MAX_LENGTH_GAP {
        return None;
    }

    let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    Some(mismatches + gap)
}
