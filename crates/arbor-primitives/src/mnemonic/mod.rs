//! BIP-39 mnemonic codec.
//!
//! Converts caller-supplied entropy into a mnemonic phrase over an
//! externally supplied 2048-word list, validates phrases against their
//! checksum, and stretches phrases into 64-byte seeds with
//! PBKDF2-HMAC-SHA512. This crate never loads wordlist files and never
//! generates entropy of its own.

use std::collections::BTreeMap;
use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use crate::hash::{pbkdf2_hmac_sha512, sha256};
use crate::PrimitivesError;

/// Number of PBKDF2 rounds used for seed stretching.
const PBKDF2_ROUNDS: u32 = 2048;

/// Number of bits each mnemonic word encodes.
const BITS_PER_WORD: usize = 11;

/// Valid word counts and the entropy sizes (in bytes) they encode.
const WORD_COUNTS: [(usize, usize); 5] = [(12, 16), (15, 20), (18, 24), (21, 28), (24, 32)];

/// A fixed, ordered list of exactly 2048 distinct words.
///
/// Supplied by the caller (already loaded); consumed read-only by the
/// codec. Word indices are the 11-bit group values of the encoding.
pub struct Wordlist {
    words: Vec<String>,
    index: BTreeMap<String, u16>,
}

impl Wordlist {
    /// Number of entries a wordlist must contain.
    pub const SIZE: usize = 1 << BITS_PER_WORD;

    /// Build a wordlist from an ordered word sequence.
    ///
    /// Fails with `InvalidWordlist` unless exactly 2048 distinct words are
    /// supplied.
    pub fn new<I, S>(words: I) -> Result<Self, PrimitivesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != Self::SIZE {
            return Err(PrimitivesError::InvalidWordlist(format!(
                "expected {} words, got {}",
                Self::SIZE,
                words.len()
            )));
        }
        let index: BTreeMap<String, u16> =
            words.iter().enumerate().map(|(i, w)| (w.clone(), i as u16)).collect();
        if index.len() != Self::SIZE {
            return Err(PrimitivesError::InvalidWordlist(
                "duplicate words in list".to_string(),
            ));
        }
        Ok(Wordlist { words, index })
    }

    /// Look up the word for an 11-bit index.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// Look up the 11-bit index of a word.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }
}

/// An ordered mnemonic word sequence.
///
/// Immutable once constructed; the words are wiped on drop and never shown
/// by `Debug`.
#[derive(Clone)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    /// Encode entropy as a mnemonic over the given wordlist.
    ///
    /// The entropy must be 128, 160, 192, 224 or 256 bits, else
    /// `InvalidEntropyLength`. The first `len/32` bits of
    /// `sha256(entropy)` are appended as a checksum before slicing the bit
    /// string into 11-bit word indices.
    pub fn from_entropy(entropy: &[u8], wordlist: &Wordlist) -> Result<Self, PrimitivesError> {
        let ent_bits = entropy.len() * 8;
        if !WORD_COUNTS.iter().any(|(_, bytes)| *bytes == entropy.len()) {
            return Err(PrimitivesError::InvalidEntropyLength(entropy.len()));
        }
        let checksum_bits = ent_bits / 32;

        // The checksum never exceeds 8 bits, so one extra byte suffices.
        let mut data = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
        data.extend_from_slice(entropy);
        data.push(sha256(entropy)[0]);

        let word_count = (ent_bits + checksum_bits) / BITS_PER_WORD;
        let mut words = Vec::with_capacity(word_count);
        for i in 0..word_count {
            let index = read_index(&data, i);
            let word = wordlist
                .word(index)
                .expect("11-bit index is always within a 2048-entry list");
            words.push(word.to_string());
        }
        Ok(Mnemonic { words })
    }

    /// Build a mnemonic from a whitespace-separated phrase.
    ///
    /// Only the word count is checked (`InvalidWordCount` otherwise); per
    /// the protocol, any word sequence deterministically stretches to some
    /// seed, so no wordlist or checksum validation happens here. Use
    /// [`Mnemonic::validate`] when round-tripping user-entered phrases.
    pub fn from_phrase(phrase: &str) -> Result<Self, PrimitivesError> {
        let words: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();
        if !WORD_COUNTS.iter().any(|(count, _)| *count == words.len()) {
            return Err(PrimitivesError::InvalidWordCount(words.len()));
        }
        Ok(Mnemonic { words })
    }

    /// The words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The space-joined phrase.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// Stretch this mnemonic into a 64-byte seed.
    ///
    /// Computes PBKDF2-HMAC-SHA512 over the phrase with salt
    /// `"mnemonic" + passphrase` and 2048 rounds. Deterministic for a fixed
    /// `(phrase, passphrase)` pair; no wordlist is consulted.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        let phrase = Zeroizing::new(self.phrase());
        let salt = Zeroizing::new(format!("mnemonic{passphrase}"));
        Seed(pbkdf2_hmac_sha512(
            phrase.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
        ))
    }

    /// Decode this mnemonic back into its entropy, verifying the checksum.
    ///
    /// Fails with `UnknownWord` for words outside the list and
    /// `ChecksumMismatch` when the recomputed checksum bits disagree.
    pub fn to_entropy(&self, wordlist: &Wordlist) -> Result<Vec<u8>, PrimitivesError> {
        let ent_bytes = WORD_COUNTS
            .iter()
            .find(|(count, _)| *count == self.words.len())
            .map(|(_, bytes)| *bytes)
            .ok_or(PrimitivesError::InvalidWordCount(self.words.len()))?;
        let checksum_bits = ent_bytes / 4;

        let mut data = Zeroizing::new(vec![0u8; ent_bytes + 1]);
        for (i, word) in self.words.iter().enumerate() {
            let index = wordlist
                .index_of(word)
                .ok_or_else(|| PrimitivesError::UnknownWord(word.clone()))?;
            write_index(&mut data, i, index);
        }

        let entropy = data[..ent_bytes].to_vec();
        let expected = sha256(&entropy)[0] >> (8 - checksum_bits);
        let actual = data[ent_bytes] >> (8 - checksum_bits);
        if expected != actual {
            return Err(PrimitivesError::ChecksumMismatch);
        }
        Ok(entropy)
    }

    /// Recompute and verify the checksum bits against the wordlist.
    pub fn validate(&self, wordlist: &Wordlist) -> Result<(), PrimitivesError> {
        let mut entropy = self.to_entropy(wordlist)?;
        entropy.zeroize();
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.words.len())
            .field("words", &"[REDACTED]")
            .finish()
    }
}

impl Drop for Mnemonic {
    fn drop(&mut self) {
        for word in &mut self.words {
            word.zeroize();
        }
    }
}

/// Read the `n`-th 11-bit group from a big-endian bit string.
fn read_index(data: &[u8], n: usize) -> u16 {
    let mut index = 0u16;
    for bit in n * BITS_PER_WORD..(n + 1) * BITS_PER_WORD {
        index <<= 1;
        if data[bit / 8] & (0x80 >> (bit % 8)) != 0 {
            index |= 1;
        }
    }
    index
}

/// Write the `n`-th 11-bit group into a big-endian bit string.
fn write_index(data: &mut [u8], n: usize, index: u16) {
    for (j, bit) in (n * BITS_PER_WORD..(n + 1) * BITS_PER_WORD).enumerate() {
        if index & (1 << (BITS_PER_WORD - 1 - j)) != 0 {
            data[bit / 8] |= 0x80 >> (bit % 8);
        }
    }
}

/// A 64-byte BIP-39 seed, wiped on drop.
#[derive(Clone)]
pub struct Seed([u8; Seed::SIZE]);

impl Seed {
    /// Seed length in bytes.
    pub const SIZE: usize = 64;

    /// Borrow the raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.0
    }

    /// The seed as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
