use crate::core::constants::{BASE32_ALPHABET, BASE36_ALPHABET};
use crate::util::error::GeohashError;
use std::fmt;

/// The default base-32 table.
pub const DEFAULT_BASE32: Alphabet<32> = Alphabet::from_ascii(BASE32_ALPHABET.as_bytes());

/// The default geohash-36 table.
pub const DEFAULT_BASE36: Alphabet<36> = Alphabet::from_ascii(BASE36_ALPHABET.as_bytes());

/// An immutable table of `N` unique ASCII symbols, each mapped to its
/// position in `0..N`.
///
/// ```
/// use geohash_rs::{Alphabet, BASE32_ALPHABET};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let alphabet: Alphabet<32> = Alphabet::new(BASE32_ALPHABET)?;
/// assert_eq!(alphabet.symbol(12), 'd');
/// assert_eq!(alphabet.index_of('d'), Some(12));
/// assert_eq!(alphabet.index_of('a'), None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    lookup: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    /// Builds an alphabet, rejecting wrong lengths, non-ASCII and repeated symbols.
    pub fn new(symbols: &str) -> Result<Self, GeohashError> {
        let actual = symbols.chars().count();
        if actual != N {
            return Err(GeohashError::InvalidAlphabetLength { expected: N, actual });
        }
        if let Some(c) = symbols.chars().find(|c| !c.is_ascii()) {
            return Err(GeohashError::NonAsciiSymbol(c));
        }

        let mut table = [0u8; N];
        let mut lookup = [None; 128];
        for (i, b) in symbols.bytes().enumerate() {
            let slot = &mut lookup[b as usize];
            if slot.is_some() {
                return Err(GeohashError::DuplicateSymbol(b as char));
            }
            *slot = Some(i as u8);
            table[i] = b;
        }

        Ok(Self {
            symbols: table,
            lookup,
        })
    }

    /// Compile-time constructor for built-in tables; invalid input fails the build.
    pub const fn from_ascii(symbols: &[u8]) -> Self {
        assert!(symbols.len() == N, "alphabet has the wrong number of symbols");
        let mut table = [0u8; N];
        let mut lookup = [None; 128];
        let mut i = 0;
        while i < N {
            let b = symbols[i];
            assert!(b.is_ascii(), "alphabet symbols must be ASCII");
            assert!(lookup[b as usize].is_none(), "duplicate alphabet symbol");
            lookup[b as usize] = Some(i as u8);
            table[i] = b;
            i += 1;
        }
        Self {
            symbols: table,
            lookup,
        }
    }

    /// Symbol for `index`. Panics if `index >= N`; codec indices never are.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index] as char
    }

    /// Position of `symbol`, or `None` when it is not part of the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        self.lookup[symbol as usize].map(usize::from)
    }

    /// Fails on the first symbol of `hash` that is not part of the alphabet.
    pub fn check(&self, hash: &str) -> Result<(), GeohashError> {
        match hash
            .chars()
            .enumerate()
            .find(|(_, c)| self.index_of(*c).is_none())
        {
            Some((position, symbol)) => Err(GeohashError::UnknownSymbol { symbol, position }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// The symbols in index order.
    pub fn as_str(&self) -> &str {
        // Construction only accepts ASCII, so this never fails.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl<const N: usize> fmt::Debug for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl<const N: usize> fmt::Display for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
