//! Operator overloads for terms and expansions.
//!
//! Formula code is written with ordinary `+ - * /`. Every operator routes
//! through the checked method of the same name; an operation that the
//! checked method would reject panics here instead.
//!
//! # Panics
//!
//! Operators panic with `invalid truncated-series operation: <reason>` where
//! the corresponding `try_*`/checked method returns an error: adding a
//! negative-order term, dividing by a zero coefficient, or multiplying by a
//! negative-order term that would drop a nonzero coefficient.

use crate::error::{fail_fast, reject, SeriesError, SeriesResult};
use crate::expansion::Expansion;
use crate::term::Term;
use pnseries_integers::Rational;
use pnseries_rings::{Field, Promote, Ring};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[inline]
#[track_caller]
fn checked<T>(result: SeriesResult<T>) -> T {
    result.unwrap_or_else(|err| fail_fast(err))
}

// Term ⊗ Term

impl<T: Ring, const C: usize> Neg for Term<T, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Term::neg(&self)
    }
}

impl<T, U, const C: usize> Mul<Term<U, C>> for Term<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Term<<T as Promote<U>>::Promoted, C>;

    fn mul(self, rhs: Term<U, C>) -> Self::Output {
        Term::mul_term(&self, &rhs)
    }
}

impl<T, U, const C: usize> Div<Term<U, C>> for Term<T, C>
where
    T: Field + Promote<U>,
    U: Field,
{
    type Output = Term<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn div(self, rhs: Term<U, C>) -> Self::Output {
        checked(Term::div_term(&self, &rhs))
    }
}

impl<T, U, const C: usize> Add<Term<U, C>> for Term<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn add(self, rhs: Term<U, C>) -> Self::Output {
        checked(self.try_add(&rhs))
    }
}

impl<T, U, const C: usize> Sub<Term<U, C>> for Term<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn sub(self, rhs: Term<U, C>) -> Self::Output {
        checked(self.try_sub(&rhs))
    }
}

// Expansion ⊗ Expansion

impl<T: Ring, const C: usize> Neg for Expansion<T, C> {
    type Output = Self;

    fn neg(self) -> Self {
        Expansion::neg(&self)
    }
}

impl<T, U, const C: usize> Add<Expansion<U, C>> for Expansion<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    fn add(self, rhs: Expansion<U, C>) -> Self::Output {
        Expansion::add(&self, &rhs)
    }
}

impl<T, U, const C: usize> Sub<Expansion<U, C>> for Expansion<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    fn sub(self, rhs: Expansion<U, C>) -> Self::Output {
        Expansion::sub(&self, &rhs)
    }
}

impl<T, U, const C: usize> Mul<Expansion<U, C>> for Expansion<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    fn mul(self, rhs: Expansion<U, C>) -> Self::Output {
        Expansion::mul(&self, &rhs)
    }
}

impl<T: Field, const C: usize> Div for Expansion<T, C> {
    type Output = Self;

    #[track_caller]
    fn div(self, rhs: Self) -> Self {
        checked(Expansion::div(&self, &rhs))
    }
}

// Expansion ⊗ Term

impl<T, U, const C: usize> Mul<Term<U, C>> for Expansion<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn mul(self, rhs: Term<U, C>) -> Self::Output {
        checked(self.mul_term(&rhs))
    }
}

impl<T, U, const C: usize> Mul<Expansion<U, C>> for Term<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn mul(self, rhs: Expansion<U, C>) -> Self::Output {
        checked(self.mul_expansion(&rhs))
    }
}

impl<T, U, const C: usize> Div<Term<U, C>> for Expansion<T, C>
where
    T: Field + Promote<U>,
    U: Field,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn div(self, rhs: Term<U, C>) -> Self::Output {
        checked(self.div_term(&rhs))
    }
}

impl<T, U, const C: usize> Add<Term<U, C>> for Expansion<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn add(self, rhs: Term<U, C>) -> Self::Output {
        checked(self.add_term(&rhs))
    }
}

impl<T, U, const C: usize> Sub<Term<U, C>> for Expansion<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn sub(self, rhs: Term<U, C>) -> Self::Output {
        checked(self.sub_term(&rhs))
    }
}

impl<T, U, const C: usize> Add<Expansion<U, C>> for Term<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn add(self, rhs: Expansion<U, C>) -> Self::Output {
        Expansion::add(&checked(self.to_expansion()), &rhs)
    }
}

impl<T, U, const C: usize> Sub<Expansion<U, C>> for Term<T, C>
where
    T: Promote<U>,
    U: Ring,
{
    type Output = Expansion<<T as Promote<U>>::Promoted, C>;

    #[track_caller]
    fn sub(self, rhs: Expansion<U, C>) -> Self::Output {
        Expansion::sub(&checked(self.to_expansion()), &rhs)
    }
}

/// Scalar operands.
///
/// A scalar combines with terms and expansions of its own type, in both
/// operand orders. Mixed-precision scalars go through the promoting methods
/// (`scale`, `add_scalar`): a second impl per operator would leave float
/// literals such as `2.0 * eps` without a unique type.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {$(
        impl<const C: usize> Mul<$scalar> for Term<$scalar, C> {
            type Output = Term<$scalar, C>;

            fn mul(self, rhs: $scalar) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl<const C: usize> Mul<Term<$scalar, C>> for $scalar {
            type Output = Term<$scalar, C>;

            fn mul(self, rhs: Term<$scalar, C>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl<const C: usize> Div<$scalar> for Term<$scalar, C> {
            type Output = Term<$scalar, C>;

            #[track_caller]
            fn div(self, rhs: $scalar) -> Self::Output {
                checked(self.div_scalar(rhs))
            }
        }

        impl<const C: usize> Div<Term<$scalar, C>> for $scalar {
            type Output = Term<$scalar, C>;

            #[track_caller]
            fn div(self, rhs: Term<$scalar, C>) -> Self::Output {
                checked(rhs.inverse()).scale(self)
            }
        }

        impl<const C: usize> Add<$scalar> for Term<$scalar, C> {
            type Output = Expansion<$scalar, C>;

            #[track_caller]
            fn add(self, rhs: $scalar) -> Self::Output {
                checked(self.try_add_scalar(rhs))
            }
        }

        impl<const C: usize> Add<Term<$scalar, C>> for $scalar {
            type Output = Expansion<$scalar, C>;

            #[track_caller]
            fn add(self, rhs: Term<$scalar, C>) -> Self::Output {
                checked(rhs.try_add_scalar(self))
            }
        }

        impl<const C: usize> Sub<$scalar> for Term<$scalar, C> {
            type Output = Expansion<$scalar, C>;

            #[track_caller]
            fn sub(self, rhs: $scalar) -> Self::Output {
                checked(self.try_add_scalar(-rhs))
            }
        }

        impl<const C: usize> Sub<Term<$scalar, C>> for $scalar {
            type Output = Expansion<$scalar, C>;

            #[track_caller]
            fn sub(self, rhs: Term<$scalar, C>) -> Self::Output {
                checked(Term::neg(&rhs).try_add_scalar(self))
            }
        }

        impl<const C: usize> Mul<$scalar> for Expansion<$scalar, C> {
            type Output = Expansion<$scalar, C>;

            fn mul(self, rhs: $scalar) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl<const C: usize> Mul<Expansion<$scalar, C>> for $scalar {
            type Output = Expansion<$scalar, C>;

            fn mul(self, rhs: Expansion<$scalar, C>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl<const C: usize> Div<$scalar> for Expansion<$scalar, C> {
            type Output = Expansion<$scalar, C>;

            #[track_caller]
            fn div(self, rhs: $scalar) -> Self::Output {
                let inv = checked(
                    <$scalar as Field>::inv(&rhs).ok_or_else(|| reject(SeriesError::DivisionByZero)),
                );
                self.scale(inv)
            }
        }

        impl<const C: usize> Add<$scalar> for Expansion<$scalar, C> {
            type Output = Expansion<$scalar, C>;

            fn add(self, rhs: $scalar) -> Self::Output {
                self.add_scalar(rhs)
            }
        }

        impl<const C: usize> Add<Expansion<$scalar, C>> for $scalar {
            type Output = Expansion<$scalar, C>;

            fn add(self, rhs: Expansion<$scalar, C>) -> Self::Output {
                rhs.add_scalar(self)
            }
        }

        impl<const C: usize> Sub<$scalar> for Expansion<$scalar, C> {
            type Output = Expansion<$scalar, C>;

            fn sub(self, rhs: $scalar) -> Self::Output {
                self.add_scalar(-rhs)
            }
        }

        impl<const C: usize> Sub<Expansion<$scalar, C>> for $scalar {
            type Output = Expansion<$scalar, C>;

            fn sub(self, rhs: Expansion<$scalar, C>) -> Self::Output {
                Expansion::neg(&rhs).add_scalar(self)
            }
        }
    )*};
}

impl_scalar_ops!(f64, f32, Rational);
