//! Arithmetic in GF(2^8), the finite field with 256 elements.
//!
//! Addition is XOR; multiplication is carry-less multiply of 8-bit values
//! reduced modulo the AES irreducible polynomial `x^8 + x^4 + x^3 + x + 1`
//! (0x11B). This field is the coefficient domain for every polynomial,
//! fingerprint, and erasure-code computation in the crate.

use std::sync::OnceLock;

use crate::error::CoreError;

/// The AES irreducible polynomial used to reduce GF(2^8) products.
pub const IRREDUCIBLE_POLY: u16 = 0x11B;

struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(build_tables)
}

/// Builds the `exp`/`log` tables from the generator `g = 2`.
///
/// `exp[i] = g^i`, `log[g^i] = i` for `i` in `0..255`; `exp[255]` wraps back to
/// `exp[0]` since the multiplicative group has order 255. `log[0]` is never
/// read (zero has no logarithm) and is left as `0`. Each step multiplies the
/// running power by `g=2`, which in GF(2^8) is exactly a left shift reduced
/// modulo the irreducible polynomial.
fn build_tables() -> Tables {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];

    let mut x: u16 = 1;
    for i in 0..255usize {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= IRREDUCIBLE_POLY;
        }
    }
    exp[255] = exp[0];

    debug_assert_eq!(exp[0], 1, "g^0 must be 1");
    Tables { exp, log }
}

/// An element of GF(2^8), wrapping a single byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Gf256(pub u8);

impl Gf256 {
    pub const ZERO: Gf256 = Gf256(0);
    pub const ONE: Gf256 = Gf256(1);

    /// Wraps a raw byte as a field element.
    pub fn new(value: u8) -> Self {
        Gf256(value)
    }

    /// Field addition: XOR of the two byte values.
    pub fn add(self, other: Gf256) -> Gf256 {
        Gf256(self.0 ^ other.0)
    }

    /// Field subtraction: identical to addition in characteristic 2.
    pub fn sub(self, other: Gf256) -> Gf256 {
        self.add(other)
    }

    /// Field multiplication via the exp/log tables:
    /// `mul(a,b) = exp[(log[a] + log[b]) mod 255]` for nonzero operands.
    pub fn mul(self, other: Gf256) -> Gf256 {
        if self.0 == 0 || other.0 == 0 {
            return Gf256::ZERO;
        }
        let t = tables();
        let la = t.log[self.0 as usize] as u16;
        let lb = t.log[other.0 as usize] as u16;
        let sum = (la + lb) % 255;
        Gf256(t.exp[sum as usize])
    }

    /// Multiplicative inverse. `inv(a) = exp[(255 - log[a]) mod 255]` for `a != 0`.
    pub fn inv(self) -> Result<Gf256, CoreError> {
        if self.0 == 0 {
            return Err(CoreError::DivisionByZero);
        }
        let t = tables();
        let la = t.log[self.0 as usize] as u16;
        let idx = (255 - la) % 255;
        Ok(Gf256(t.exp[idx as usize]))
    }

    /// Field division: `self * other^-1`.
    pub fn div(self, other: Gf256) -> Result<Gf256, CoreError> {
        Ok(self.mul(other.inv()?))
    }

    /// Exponentiation by square-and-multiply.
    pub fn pow(self, mut k: u32) -> Gf256 {
        let mut result = Gf256::ONE;
        let mut base = self;
        while k > 0 {
            if k & 1 == 1 {
                result = result.mul(base);
            }
            base = base.mul(base);
            k >>= 1;
        }
        result
    }

    /// Reference shift-and-XOR multiplication, used only to cross-check the
    /// table-driven [`Gf256::mul`] in tests. Not part of the public API.
    #[cfg(test)]
    fn mul_shift_xor(self, other: Gf256) -> Gf256 {
        let mut a = self.0 as u16;
        let mut b = other.0 as u16;
        let mut result: u16 = 0;
        while b > 0 {
            if b & 1 == 1 {
                result ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & 0x100 != 0 {
                a ^= IRREDUCIBLE_POLY;
            }
        }
        Gf256(result as u8)
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Gf256(value)
    }
}

impl From<Gf256> for u8 {
    fn from(value: Gf256) -> Self {
        value.0
    }
}
