use super::{Address, Opcode, Word, MEMORY_SIZE};
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Word addressable main memory
///
/// Exactly 32768 words. Program images shorter than that are padded
/// with `NOOP` so that running off the end of the image is harmless.

pub struct Memory {
    words: Vec<Word>,
}

impl Memory {
    pub fn new(mut image: Vec<Word>) -> Memory {
        image.resize(MEMORY_SIZE, Opcode::Noop.code());
        Memory { words: image }
    }
    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    pub fn read(&self, addr: Address) -> Result<Word> {
        match self.words.get(addr) {
            Some(word) => Ok(*word),
            None => Err(self.out_of_range(addr)),
        }
    }
    pub fn write(&mut self, addr: Address, word: Word) -> Result<()> {
        match self.words.get_mut(addr) {
            Some(slot) => {
                *slot = word;
                Ok(())
            }
            None => Err(self.out_of_range(addr)),
        }
    }
    pub fn words(&self) -> &[Word] {
        &self.words
    }
    fn out_of_range(&self, addr: Address) -> Error {
        error!(AddressOutOfRange; &format!("ADDRESS {}", addr))
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory {{ {} words }}", self.words.len())
    }
}
