use core::fmt::{self, Debug, Display};

/// A standard-width unsigned integer able to hold a non-standard integer.
///
/// All bit twiddling happens on the `u64` widening, `narrow` truncates back
/// to the container. Each container carries its signed counterpart so that
/// sign extension lands in the matching signed type.
pub trait Container: Copy + Debug + PartialEq {
    const BITS: u32;
    type Signed: Copy + Debug + PartialEq;

    fn widen(self) -> u64;
    fn narrow(v: u64) -> Self;
    fn narrow_signed(v: i64) -> Self::Signed;
}

macro_rules! impl_container {
    ($( ($ty:ty, $sty:ty) ),* $(,)?) => {$(
        impl Container for $ty {
            const BITS: u32 = <$ty>::BITS;
            type Signed = $sty;

            #[inline(always)]
            fn widen(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn narrow(v: u64) -> Self {
                v as $ty
            }

            #[inline(always)]
            fn narrow_signed(v: i64) -> Self::Signed {
                v as $sty
            }
        }
    )*};
}

impl_container!(
    (u8, i8),
    (u16, i16),
    (u32, i32),
    (u64, i64),
);

/// Mask with the low `width` bits set, `width` in `0..=64`.
#[inline(always)]
pub const fn low_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

macro_rules! numeric_wrapper {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            enum $priv:ident {
                $pos_variant:ident($pos_ty:ty),
                $neg_variant:ident($neg_ty:ty)
            }
            unsigned: [$($u_ty:ty),* $(,)?],
            signed:   [$($s_ty:ty),* $(,)?]
        }
    ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        enum $priv {
            $pos_variant($pos_ty),
            $neg_variant($neg_ty),
        }

        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq)]
        $vis struct $name {
            n: $priv,
        }

        impl $name {
            pub const fn is_negative(&self) -> bool {
                matches!(self.n, $priv::$neg_variant(..))
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Debug::fmt(&self.n, f)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.n {
                    $priv::$pos_variant(v) => Display::fmt(&v, f),
                    $priv::$neg_variant(v) => Display::fmt(&v, f),
                }
            }
        }

        $(
            impl From<$u_ty> for $name {
                #[inline]
                fn from(n: $u_ty) -> Self {
                    Self { n: $priv::$pos_variant(n as $pos_ty) }
                }
            }
        )*

        $(
            impl From<$s_ty> for $name {
                #[inline]
                fn from(n: $s_ty) -> Self {
                    if n < 0 {
                        Self { n: $priv::$neg_variant(n as $neg_ty) }
                    } else {
                        Self { n: $priv::$pos_variant(n as $pos_ty) }
                    }
                }
            }
        )*
    };
}

numeric_wrapper!(
    /// Decoded value of a non-standard integer, either signedness.
    pub struct Integer {
        enum IntPriv {
            PosInt(u64),
            NegInt(i64)
        }
        unsigned: [u8, u16, u32, u64],
        signed:   [i8, i16, i32, i64]
    }
);

impl Integer {
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            IntPriv::PosInt(n) => n.try_into().ok(),
            IntPriv::NegInt(n) => Some(n),
        }
    }
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            IntPriv::PosInt(n) => Some(n),
            IntPriv::NegInt(_) => None,
        }
    }
    #[inline]
    pub const fn as_i128(&self) -> i128 {
        match self.n {
            IntPriv::PosInt(n) => n as i128,
            IntPriv::NegInt(n) => n as i128,
        }
    }
}
