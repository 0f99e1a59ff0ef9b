/// Edit distance between two strings, counted in Unicode scalar values
///
/// Full dynamic-programming table: `d[i][0] = i`, `d[0][j] = j`, and each cell
/// is the cheapest of a deletion, an insertion or a (possibly free) substitution.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            d[i][j] = if a[i - 1] == b[j - 1] {
                d[i - 1][j - 1]
            } else {
                1 + d[i - 1][j].min(d[i][j - 1]).min(d[i - 1][j - 1])
            };
        }
    }

    d[a.len()][b.len()]
}

/// Match percentage (0-100) between a reference phrase and a candidate transcript
///
/// Comparison is case-insensitive. Two empty strings are a perfect match.
/// Halves round away from zero, so 62.5% reports as 63.
pub fn similarity(reference: &str, candidate: &str) -> u8 {
    let reference = reference.to_lowercase();
    let candidate = candidate.to_lowercase();

    let longest = reference.chars().count().max(candidate.chars().count());
    if longest == 0 {
        return 100;
    }

    let distance = levenshtein_distance(&reference, &candidate).min(longest);
    let matched = longest - distance;

    // round(100 * matched / longest) in integers
    let percent = (200 * matched + longest) / (2 * longest);
    percent.min(100) as u8
}
