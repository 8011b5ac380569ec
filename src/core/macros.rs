/******************************************\
|==========================================|
|          Macro: impl_enum_index          |
|==========================================|
\******************************************/

/// Table-index helpers for fieldless `#[repr(u8)]` enums whose variants run
/// `0..NUM` without gaps:
/// - `unsafe fn from_unchecked(u8) -> Self`
/// - `fn index(&self) -> usize`
/// - `fn iter()` over every variant in discriminant order
#[macro_export]
macro_rules! impl_enum_index {
    ($($enum_name:ident),+ $(,)?) => {$(
        impl $enum_name {
            #[doc=concat!("Reinterprets a discriminant as ", stringify!($enum_name))]
            /// ## Safety
            /// - `index < Self::NUM`
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!(index < Self::NUM as u8, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }

            #[doc=concat!("Every ", stringify!($enum_name), " in discriminant order")]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    )+};
}

/******************************************\
|==========================================|
|          Macro: impl_bitset_ops          |
|==========================================|
\******************************************/

/// `&`, `|`, `^`, their assignment forms and `!` for a tuple newtype over an
/// unsigned integer. With `mask = CONST` the complement stays inside the bits
/// of `CONST`.
#[macro_export]
macro_rules! impl_bitset_ops {
    (@op $name:ident, $op_trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl std::ops::$op_trait for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }

        impl std::ops::$assign_trait for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };

    (@binary $name:ident) => {
        $crate::impl_bitset_ops!(@op $name, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        $crate::impl_bitset_ops!(@op $name, BitOr, bitor, BitOrAssign, bitor_assign, |);
        $crate::impl_bitset_ops!(@op $name, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
    };

    ($name:ident) => {
        $crate::impl_bitset_ops!(@binary $name);

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self::Output {
                Self(!self.0)
            }
        }
    };

    ($name:ident, mask = $mask:expr) => {
        $crate::impl_bitset_ops!(@binary $name);

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self::Output {
                Self(!self.0 & $mask.0)
            }
        }
    };
}
