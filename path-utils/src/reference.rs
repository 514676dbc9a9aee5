/// 1-based positions in `seq` that are not the gap character.
///
/// Used to map alignment columns back onto a reference sequence's own
/// numbering once gaps are stripped out.
pub fn get_reference(seq: &str, gap_char: char) -> Vec<usize> {
  seq
    .chars()
    .enumerate()
    .filter(|&(_, c)| c != gap_char)
    .map(|(i, _)| i + 1)
    .collect()
}
