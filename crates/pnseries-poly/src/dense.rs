//! Dense univariate polynomials.

use pnseries_rings::traits::{Differentiable, Ring};
use std::ops;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order, with trailing zeros
/// removed so that equal polynomials compare equal.
#[derive(Clone, PartialEq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order. Never empty.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let result = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook).
    ///
    /// Coefficient polynomials in PN formulas have single-digit degree, so
    /// the quadratic algorithm is the fast one here.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i64::try_from(i).unwrap_or(i64::MAX)))
            .collect();

        Self::new(result)
    }

    /// Drops every term of degree `n` or higher.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        if n == 0 {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().take(n).cloned().collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }
}

impl<R: Ring> ops::Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        DensePoly::add(&self, &rhs)
    }
}

impl<R: Ring> ops::Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        DensePoly::sub(&self, &rhs)
    }
}

impl<R: Ring> ops::Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        DensePoly::mul(&self, &rhs)
    }
}

impl<R: Ring> ops::Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self {
        DensePoly::neg(&self)
    }
}

impl<R: Ring> Ring for DensePoly<R> {
    fn zero() -> Self {
        DensePoly::zero()
    }

    fn one() -> Self {
        DensePoly::one()
    }

    fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }

    fn is_one(&self) -> bool {
        DensePoly::is_one(self)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c.mul_by_scalar(n)).collect())
    }

    fn pow(&self, n: u32) -> Self {
        DensePoly::pow(self, n)
    }
}

impl<R: Ring> Differentiable for DensePoly<R> {
    fn derivative(&self) -> Self {
        DensePoly::derivative(self)
    }
}

impl<R: Ring + std::fmt::Display> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "({})", terms.join(" + "))
    }
}
