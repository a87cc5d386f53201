//! Square key matrices with exact modular inversion.
//!
//! Entries are reduced modulo 26 when a matrix is built, since the cipher
//! only ever depends on their residues. The inverse is computed as
//! `det⁻¹ · adj(K) mod 26`, where the adjugate comes from integer cofactor
//! expansion with every intermediate value reduced modulo 26. No floating
//! point is involved and no product can overflow.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::{ALPHABET_SIZE, MAX_KEY_ORDER};
use crate::error::{CipherError, Result};

/// A square integer matrix used as a Hill cipher key.
///
/// Entries are stored row-major, each in `0..26`. Construction only checks
/// the shape; whether the matrix can be inverted modulo 26 is reported by
/// [`KeyMatrix::is_invertible`] and enforced by [`KeyMatrix::inverse_mod`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMatrix {
    order: usize,
    entries: Vec<i64>,
}

impl KeyMatrix {
    /// Builds a key matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidMatrix`] if there are no rows, any row
    /// length differs from the number of rows, or the order exceeds
    /// [`MAX_KEY_ORDER`].
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let order = rows.len();
        check_order(order)?;

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != order) {
            return Err(CipherError::InvalidMatrix(format!("row {i} has {} entries, expected {order}", row.len())));
        }

        Ok(Self::from_entries(order, rows.into_iter().flatten()))
    }

    /// Builds a key matrix from a fixed-size array. Always square.
    ///
    /// `N` must be between 1 and [`MAX_KEY_ORDER`]; anything else fails to
    /// compile.
    pub fn from_array<const N: usize>(rows: [[i64; N]; N]) -> Self {
        const { assert!(N >= 1 && N <= MAX_KEY_ORDER, "key order out of range") };
        Self::from_entries(N, rows.into_iter().flatten())
    }

    fn from_entries(order: usize, entries: impl IntoIterator<Item = i64>) -> Self {
        Self { order, entries: entries.into_iter().map(|v| v.rem_euclid(ALPHABET_SIZE)).collect() }
    }

    /// Number of rows (and columns); also the Hill block length.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.order + col]
    }

    /// Determinant modulo 26, in `0..26`.
    pub fn determinant(&self) -> i64 {
        determinant(&self.entries, self.order)
    }

    /// Whether `gcd(det mod 26, 26) == 1`.
    pub fn is_invertible(&self) -> bool {
        mod_inverse(self.determinant(), ALPHABET_SIZE).is_some()
    }

    /// Returns the inverse of this matrix modulo 26.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the determinant has no inverse
    /// modulo 26. The check happens before the adjugate is computed.
    pub fn inverse_mod(&self) -> Result<Self> {
        let det = self.determinant();
        let det_inv = mod_inverse(det, ALPHABET_SIZE).ok_or(CipherError::InvalidKey { determinant: det })?;

        let n = self.order;
        let mut entries = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                // adj(K)[row][col] is the cofactor of K at (col, row).
                entries[row * n + col] = (det_inv * self.cofactor(col, row)).rem_euclid(ALPHABET_SIZE);
            }
        }

        Ok(Self { order: n, entries })
    }

    /// Multiplies this matrix by a column vector, reducing modulo 26.
    ///
    /// `block` must have exactly [`KeyMatrix::order`] elements.
    pub fn apply(&self, block: &[i64]) -> Vec<i64> {
        debug_assert_eq!(block.len(), self.order);
        (0..self.order)
            .map(|row| (0..self.order).map(|col| self.get(row, col) * block[col].rem_euclid(ALPHABET_SIZE)).sum::<i64>().rem_euclid(ALPHABET_SIZE))
            .collect()
    }

    /// Signed cofactor at `(row, col)`, modulo 26.
    fn cofactor(&self, row: usize, col: usize) -> i64 {
        let minor = minor(&self.entries, self.order, row, col);
        let det = determinant(&minor, self.order - 1);
        if (row + col) % 2 == 0 { det } else { (-det).rem_euclid(ALPHABET_SIZE) }
    }
}

impl Display for KeyMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for row in 0..self.order {
            if row > 0 {
                f.write_str(", ")?;
            }
            let cells: Vec<String> = (0..self.order).map(|col| self.get(row, col).to_string()).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        f.write_str("]")
    }
}

impl FromStr for KeyMatrix {
    type Err = CipherError;

    /// Parses `n²` integers separated by commas and/or whitespace, row-major.
    ///
    /// `"7,8,10,3"` is the 2×2 matrix `[[7, 8], [10, 3]]`.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<i64>().map_err(|e| CipherError::InvalidMatrix(format!("invalid entry {token:?}: {e}"))))
            .collect::<Result<Vec<_>>>()?;

        let order = (1..=values.len()).find(|n| n * n >= values.len()).unwrap_or(0);
        if order == 0 || order * order != values.len() {
            return Err(CipherError::InvalidMatrix(format!("{} entries do not form a square matrix", values.len())));
        }
        check_order(order)?;

        Ok(Self::from_entries(order, values))
    }
}

fn check_order(order: usize) -> Result<()> {
    match order {
        0 => Err(CipherError::InvalidMatrix("matrix has no rows".into())),
        n if n > MAX_KEY_ORDER => Err(CipherError::InvalidMatrix(format!("order {n} exceeds the maximum of {MAX_KEY_ORDER}"))),
        _ => Ok(()),
    }
}

/// Modular inverse of `a` modulo `m`, if one exists.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1_i64, 0_i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    (old_r == 1).then(|| old_s.rem_euclid(m))
}

/// Laplace expansion along the first row, modulo 26.
///
/// `entries` must already be reduced. An empty matrix has determinant 1.
fn determinant(entries: &[i64], n: usize) -> i64 {
    match n {
        0 => 1,
        1 => entries[0],
        2 => (entries[0] * entries[3] - entries[1] * entries[2]).rem_euclid(ALPHABET_SIZE),
        _ => (0..n)
            .map(|col| {
                let term = entries[col] * determinant(&minor(entries, n, 0, col), n - 1);
                if col % 2 == 0 { term } else { -term }
            })
            .sum::<i64>()
            .rem_euclid(ALPHABET_SIZE),
    }
}

/// The `(n-1)×(n-1)` matrix left after removing `row` and `col`.
fn minor(entries: &[i64], n: usize, row: usize, col: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for r in (0..n).filter(|&r| r != row) {
        for c in (0..n).filter(|&c| c != col) {
            out.push(entries[r * n + c]);
        }
    }
    out
}
