/// Decodes a `matchinfo()` blob into its native-endian 32-bit words
pub fn parse_match_info(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Scores a row from `matchinfo()` called with the default `pcx` format.
///
/// Layout: phrase count, column count, then for every phrase/column pair
/// (hits in this row, hits in all rows, rows with a hit). Each pair that hits
/// this row adds `hits_this_row / hits_all_rows`. A truncated buffer scores
/// what it contains.
pub fn rank_match_info(info: &[u32]) -> f64 {
    let (Some(&phrases), Some(&columns)) = (info.first(), info.get(1)) else {
        return 0.0;
    };
    let (phrases, columns) = (phrases as usize, columns as usize);

    let mut score = 0.0;
    for phrase in 0..phrases {
        let phrase_idx = 2 + phrase * columns * 3;
        for column in 0..columns {
            let col_idx = phrase_idx + column * 3;
            let (Some(&this_row), Some(&all_rows)) = (info.get(col_idx), info.get(col_idx + 1))
            else {
                return score;
            };
            if this_row > 0 {
                score += this_row as f64 / all_rows as f64;
            }
        }
    }
    score
}
