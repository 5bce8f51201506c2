use super::{Word, MEMORY_SIZE};
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// Convert a raw program image of little-endian byte pairs into words.
pub fn load_image(bytes: &[u8]) -> Result<Vec<Word>> {
    if bytes.len() % 2 != 0 {
        return Err(error!(MalformedImage; &format!("ODD LENGTH {}", bytes.len())));
    }
    let words = bytes.len() / 2;
    if words > MEMORY_SIZE {
        return Err(error!(MalformedImage; &format!("{} WORDS EXCEEDS MEMORY", words)));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| Word::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Inverse of `load_image`.
pub fn save_image(words: &[Word]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes().to_vec()).collect()
}
