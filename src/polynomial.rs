//! Polynomials with coefficients in GF(2^8), little-endian: `coeffs[i]` is the
//! coefficient of `x^i`. Used both for data blocks (each byte is a
//! coefficient) and for the division-based fingerprint computation.

use crate::field::Gf256;

/// A polynomial over GF(2^8), stored as a dense little-endian coefficient
/// vector. Trailing zero coefficients are stripped on construction, except
/// that the zero polynomial always keeps exactly one zero coefficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<Gf256>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients, normalizing trailing zeros.
    pub fn new(coeffs: Vec<Gf256>) -> Self {
        let mut coeffs = coeffs;
        if coeffs.is_empty() {
            coeffs.push(Gf256::ZERO);
        }
        while coeffs.len() > 1 && coeffs.last() == Some(&Gf256::ZERO) {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    /// Interprets a byte string as a polynomial: byte `i` becomes the
    /// coefficient of `x^i`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Polynomial::new(data.iter().map(|&b| Gf256(b)).collect())
    }

    /// Serializes coefficients back to bytes, little-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.coeffs.iter().map(|c| c.0).collect()
    }

    /// Degree of the polynomial: index of the leading nonzero coefficient, or
    /// `-1` for the zero polynomial.
    pub fn degree(&self) -> isize {
        for i in (0..self.coeffs.len()).rev() {
            if self.coeffs[i] != Gf256::ZERO {
                return i as isize;
            }
        }
        -1
    }

    pub fn coeffs(&self) -> &[Gf256] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `point` via Horner's method, highest
    /// degree coefficient downward.
    pub fn evaluate(&self, point: Gf256) -> Gf256 {
        let mut result = Gf256::ZERO;
        for &coeff in self.coeffs.iter().rev() {
            result = result.mul(point).add(coeff);
        }
        result
    }

    /// Pointwise addition (identical to subtraction in characteristic 2).
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(n);
        for i in 0..n {
            let a = self.coeffs.get(i).copied().unwrap_or(Gf256::ZERO);
            let b = other.coeffs.get(i).copied().unwrap_or(Gf256::ZERO);
            result.push(a.add(b));
        }
        Polynomial::new(result)
    }

    /// Pointwise subtraction, identical to [`Polynomial::add`] in char 2.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(other)
    }

    /// Schoolbook polynomial multiplication, O(deg1 * deg2).
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        let mut result = vec![Gf256::ZERO; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == Gf256::ZERO {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].add(a.mul(b));
            }
        }
        Polynomial::new(result)
    }

    /// Scales every coefficient by a field element.
    pub fn scale(&self, scalar: Gf256) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|&c| c.mul(scalar)).collect())
    }

    /// Synthetic division by the linear factor `(x - root) = (x + root)`.
    ///
    /// Returns `(quotient, remainder)` such that
    /// `self(x) = quotient(x) * (x - root) + remainder`.
    pub fn divide_by_linear(&self, root: Gf256) -> (Polynomial, Gf256) {
        let n = self.coeffs.len();
        if n == 1 {
            return (Polynomial::new(vec![Gf256::ZERO]), self.coeffs[0]);
        }

        // Process coefficients from highest degree to lowest.
        let mut carry = self.coeffs[n - 1];
        let mut quotient_big_endian = vec![carry];

        for i in (1..n - 1).rev() {
            carry = self.coeffs[i].add(root.mul(carry));
            quotient_big_endian.push(carry);
        }

        let remainder = self.coeffs[0].add(root.mul(carry));
        quotient_big_endian.reverse();
        (Polynomial::new(quotient_big_endian), remainder)
    }
}
