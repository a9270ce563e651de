/// Reduce a random word to a winner index.
///
/// The first 16 bytes of `word` are read as a big-endian u128 and reduced
/// modulo `participant_count`. Returns `None` if the word is shorter than
/// 16 bytes or there are no participants.
///
/// The modulo reduction is a defined contract, not an implementation
/// detail: `word mod count` must select the participant at that insertion
/// index, so callers can verify a draw from the raw word alone.
pub fn winner_index(word: &[u8], participant_count: usize) -> Option<usize> {
    if participant_count == 0 || word.len() < 16 {
        return None;
    }

    let mut ticket_bytes = [0u8; 16];
    ticket_bytes.copy_from_slice(&word[0..16]);
    let ticket = u128::from_be_bytes(ticket_bytes);

    Some((ticket % participant_count as u128) as usize)
}
