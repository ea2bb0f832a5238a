use std::sync::LazyLock;

/// Number of words in a BIP-39 dictionary; every index fits in 11 bits.
const WORDLIST_LEN: usize = 2048;

const ENGLISH: &str = include_str!("english.txt");

static WORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| ENGLISH.lines().collect());

/// The English wordlist, in index order (which is also sorted order).
pub fn words() -> &'static [&'static str] {
    &WORDS
}

/// Word at an 11-bit `index`.
pub(crate) fn word(index: u16) -> &'static str {
    WORDS[usize::from(index) % WORDLIST_LEN]
}

pub fn index_of(word: &str) -> Option<u16> {
    WORDS.binary_search_by(|probe| (*probe).cmp(word)).ok().map(|i| i as u16)
}
