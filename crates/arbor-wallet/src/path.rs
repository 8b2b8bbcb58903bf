//! Derivation path parsing and construction.
//!
//! Paths take the form `m/44'/60'/0'/0/5`. An apostrophe or `H` suffix
//! marks a hardened step. Parsing produces the ordered list of child
//! numbers that [`crate::ExtendedKey::derive_path`] folds over.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{ChildNumber, WalletError};

static RE_PATH_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(['H]?)$").unwrap());

/// An ordered sequence of child derivation steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivationPath {
    steps: Vec<ChildNumber>,
}

impl DerivationPath {
    /// Build a path from child numbers.
    pub fn new<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = ChildNumber>,
    {
        DerivationPath { steps: steps.into_iter().collect() }
    }

    /// Iterate the steps in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = ChildNumber> + '_ {
        self.steps.iter().copied()
    }

    /// Number of derivation steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether this is the empty (master) path.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// A BIP-44 style path: `m/purpose'/coin'/account'/change/index`.
    pub fn bip44(
        purpose: u32,
        coin: u32,
        account: u32,
        change: u32,
        index: u32,
    ) -> Result<Self, WalletError> {
        Ok(DerivationPath {
            steps: vec![
                ChildNumber::new(purpose, true)?,
                ChildNumber::new(coin, true)?,
                ChildNumber::new(account, true)?,
                ChildNumber::new(change, false)?,
                ChildNumber::new(index, false)?,
            ],
        })
    }

    /// The Ethereum receive path `m/44'/60'/account'/0/index`.
    pub fn ethereum(account: u32, index: u32) -> Result<Self, WalletError> {
        Self::bip44(44, 60, account, 0, index)
    }

    /// The Ethereum account root `m/44'/60'/account'`.
    pub fn ethereum_account(account: u32) -> Result<Self, WalletError> {
        Ok(DerivationPath {
            steps: vec![
                ChildNumber::new(44, true)?,
                ChildNumber::new(60, true)?,
                ChildNumber::new(account, true)?,
            ],
        })
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('/');
        match segments.next() {
            Some("m") | Some("M") => {}
            _ => {
                return Err(WalletError::InvalidPath(
                    "path must start with `m`".to_string(),
                ))
            }
        }

        let mut steps = Vec::new();
        for (pos, segment) in segments.enumerate() {
            let captures = RE_PATH_SEGMENT.captures(segment).ok_or_else(|| {
                invalid_segment(pos, segment, "expected an index with optional ' or H marker")
            })?;
            let index: u32 = captures[1]
                .parse()
                .map_err(|_| invalid_segment(pos, segment, "index does not fit in 32 bits"))?;
            let hardened = !captures[2].is_empty();
            let child = ChildNumber::new(index, hardened)
                .map_err(|_| invalid_segment(pos, segment, "index must be below 2^31"))?;
            steps.push(child);
        }
        Ok(DerivationPath { steps })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for step in &self.steps {
            write!(f, "/{step}")?;
        }
        Ok(())
    }
}

fn invalid_segment(pos: usize, segment: &str, reason: &str) -> WalletError {
    WalletError::InvalidPath(format!("segment {} (`{}`): {}", pos + 1, segment, reason))
}
