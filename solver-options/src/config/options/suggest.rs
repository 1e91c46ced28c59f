//! Nearest-name suggestions for mistyped option names

/// How many suggestions an unknown-option error carries
pub const MAX_SUGGESTIONS: usize = 3;

/// Rank `candidates` by edit distance to `name` and return the best `limit`.
///
/// Both sides are compared through `fold`, so the caller decides whether case
/// matters. Candidates are returned as given. Ties keep candidate order.
pub fn suggest<'a, I, F>(name: &str, candidates: I, fold: F, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> String,
{
    let target = fold(name);
    let mut scored: Vec<(usize, &str)> = candidates
        .into_iter()
        .map(|candidate| (levenshtein_distance(&target, &fold(candidate)), candidate))
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Levenshtein distance between two strings, counted in chars.
///
/// Keeps a single row of the edit table, sized by the shorter string.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() { (a, b) } else { (b, a) };
    let short: Vec<char> = short.chars().collect();

    // row[j] is the distance between the consumed prefix of `long` and short[..j]
    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[short.len()]
}
