//! Cauchy generator matrix over GF(2^8) and Gauss-Jordan inversion.
//!
//! `M[i][j] = 1 / (x_i + y_j)` for disjoint point sets `{x_i}`, `{y_j}`.
//! Every square sub-matrix of a Cauchy matrix is invertible, which is the
//! property the erasure code relies on: any `m` of the `n` rows suffice to
//! recover the `m` data symbols.

use crate::error::CoreError;
use crate::field::Gf256;

/// An `rows x cols` matrix over GF(2^8), stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Gf256>,
}

impl Matrix {
    fn get(&self, i: usize, j: usize) -> Gf256 {
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, v: Gf256) {
        self.data[i * self.cols + j] = v;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Builds the `n x m` Cauchy generator matrix with `x_i = i` for
    /// `i in [0, n)` and `y_j = n+j` for `j in [0, m)`. Requires `n + m <=
    /// 256` so that every point fits in a single byte.
    pub fn cauchy(n: usize, m: usize) -> Result<Matrix, CoreError> {
        if n + m > 256 {
            return Err(CoreError::InvalidParameters {
                reason: format!("n + m = {} exceeds field size 256", n + m),
            });
        }
        let mut data = Vec::with_capacity(n * m);
        for i in 0..n {
            let x_i = Gf256(i as u8);
            for j in 0..m {
                let y_j = Gf256((n + j) as u8);
                // x_i != y_j always: the two point sets are disjoint ranges.
                let inv = x_i.add(y_j).inv()?;
                data.push(inv);
            }
        }
        Ok(Matrix { rows: n, cols: m, data })
    }

    /// Extracts the square sub-matrix formed by the given row indices, in
    /// the order given. `row_indices.len()` must equal `self.cols()`.
    pub fn submatrix(&self, row_indices: &[usize]) -> Result<Matrix, CoreError> {
        if row_indices.len() != self.cols {
            return Err(CoreError::InvalidParameters {
                reason: format!(
                    "submatrix needs exactly {} row indices, got {}",
                    self.cols,
                    row_indices.len()
                ),
            });
        }
        let mut data = Vec::with_capacity(row_indices.len() * self.cols);
        for &i in row_indices {
            for j in 0..self.cols {
                data.push(self.get(i, j));
            }
        }
        Ok(Matrix { rows: row_indices.len(), cols: self.cols, data })
    }

    /// Matrix-vector product over GF(2^8): `self * v`. `v.len()` must equal
    /// `self.cols()`.
    pub fn mul_vec(&self, v: &[Gf256]) -> Vec<Gf256> {
        debug_assert_eq!(v.len(), self.cols);
        let mut out = vec![Gf256::ZERO; self.rows];
        for i in 0..self.rows {
            let mut acc = Gf256::ZERO;
            for j in 0..self.cols {
                acc = acc.add(self.get(i, j).mul(v[j]));
            }
            out[i] = acc;
        }
        out
    }

    /// Inverts a square matrix via Gauss-Jordan elimination over GF(2^8).
    ///
    /// A well-formed Cauchy sub-matrix is always invertible; failure here
    /// (a zero pivot column with no nonzero row below it) is reported, not
    /// silently papered over, per spec's decoding-failure contract.
    pub fn invert(&self) -> Result<Matrix, CoreError> {
        if self.rows != self.cols {
            return Err(CoreError::InvalidParameters {
                reason: format!("cannot invert a {}x{} matrix", self.rows, self.cols),
            });
        }
        let n = self.rows;
        let mut left = self.data.clone();
        let mut right = vec![Gf256::ZERO; n * n];
        for i in 0..n {
            right[i * n + i] = Gf256::ONE;
        }

        for col in 0..n {
            // Find a nonzero pivot in this column at or below the diagonal.
            let pivot_row = (col..n).find(|&r| left[r * n + col] != Gf256::ZERO);
            let pivot_row = match pivot_row {
                Some(r) => r,
                None => {
                    return Err(CoreError::DecodingFailure {
                        reason: "singular matrix: no nonzero pivot".to_string(),
                    })
                }
            };
            if pivot_row != col {
                for j in 0..n {
                    left.swap(col * n + j, pivot_row * n + j);
                    right.swap(col * n + j, pivot_row * n + j);
                }
            }

            let pivot = left[col * n + col];
            let pivot_inv = pivot.inv()?;
            for j in 0..n {
                left[col * n + j] = left[col * n + j].mul(pivot_inv);
                right[col * n + j] = right[col * n + j].mul(pivot_inv);
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = left[row * n + col];
                if factor == Gf256::ZERO {
                    continue;
                }
                for j in 0..n {
                    let l = left[col * n + j].mul(factor);
                    left[row * n + j] = left[row * n + j].add(l);
                    let r = right[col * n + j].mul(factor);
                    right[row * n + j] = right[row * n + j].add(r);
                }
            }
        }

        Ok(Matrix { rows: n, cols: n, data: right })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn identity(n: usize) -> Matrix {
        let mut data = vec![Gf256::ZERO; n * n];
        for i in 0..n {
            data[i * n + i] = Gf256::ONE;
        }
        Matrix { rows: n, cols: n, data }
    }

    #[test]
    fn any_m_of_n_cauchy_submatrix_is_invertible() {
        let (n, m) = (5usize, 3usize);
        let g = Matrix::cauchy(n, m).unwrap();

        // All C(5,3) = 10 possible row selections.
        let indices: Vec<usize> = (0..n).collect();
        for combo in combinations(&indices, m) {
            let sub = g.submatrix(&combo).unwrap();
            let inv = sub.invert().unwrap();
            // sub * inv == identity
            let product = matmul(&sub, &inv);
            assert_eq!(product, identity(m));
        }
    }

    #[test]
    fn cauchy_rejects_oversized_field() {
        assert!(Matrix::cauchy(200, 100).is_err());
    }

    fn matmul(a: &Matrix, b: &Matrix) -> Matrix {
        assert_eq!(a.cols, b.rows);
        let mut data = vec![Gf256::ZERO; a.rows * b.cols];
        for i in 0..a.rows {
            for j in 0..b.cols {
                let mut acc = Gf256::ZERO;
                for k in 0..a.cols {
                    acc = acc.add(a.get(i, k).mul(b.get(k, j)));
                }
                data[i * b.cols + j] = acc;
            }
        }
        Matrix { rows: a.rows, cols: b.cols, data }
    }

    fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
        if k == 0 {
            return vec![vec![]];
        }
        if items.len() < k {
            return vec![];
        }
        let mut out = Vec::new();
        for i in 0..=items.len() - k {
            for mut rest in combinations(&items[i + 1..], k - 1) {
                rest.insert(0, items[i]);
                out.push(rest);
            }
        }
        out
    }
}
