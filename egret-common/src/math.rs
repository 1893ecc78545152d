//! Checked arithmetic for offset and size computations.
//!
//! The workspace forbids `clippy::arithmetic_side_effects`, so every
//! offset/size computation on untrusted input goes through these traits and
//! surfaces overflow as a [`MathError`] instead of a panic.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("Addition overflowed")]
    AdditionOverflow,
    #[error("Subtraction overflowed")]
    SubtractionOverflow,
    #[error("Multiplication overflowed")]
    MultiplicationOverflow,
    #[error("Type conversion out of range")]
    ConversionOverflow,
}

/// Same as the `checked_add` functions but returns an error
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as the `checked_sub` functions but returns an error
pub trait SafeSub: Sized {
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as the `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

macro_rules! impl_safe_ops {
    ($($t:ty),*) => {
        $(
            impl SafeAdd for $t {
                fn safe_add(self, rhs: Self) -> Result<Self, MathError> {
                    self.checked_add(rhs).ok_or(MathError::AdditionOverflow)
                }
            }

            impl SafeSub for $t {
                fn safe_sub(self, rhs: Self) -> Result<Self, MathError> {
                    self.checked_sub(rhs).ok_or(MathError::SubtractionOverflow)
                }
            }

            impl SafeMul for $t {
                fn safe_mul(self, rhs: Self) -> Result<Self, MathError> {
                    self.checked_mul(rhs).ok_or(MathError::MultiplicationOverflow)
                }
            }
        )*
    };
}

impl_safe_ops!(u16, u32, u64, usize, i64);

pub trait ToU32: Sized + TryInto<u32> + Copy {
    fn u32(self) -> Result<u32, MathError> {
        self.try_into().map_err(|_| MathError::ConversionOverflow)
    }
}

impl ToU32 for u64 {}
impl ToU32 for usize {}
impl ToU32 for i64 {}

pub trait ToUsize: Sized + TryInto<usize> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into().map_err(|_| MathError::ConversionOverflow)
    }
}

impl ToUsize for u32 {}
impl ToUsize for u64 {}
