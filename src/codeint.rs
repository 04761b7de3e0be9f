use num_traits::int::PrimInt;

/// Generic trait of binary codes.
pub trait CodeInt: PrimInt {
    /// Number of bits of the code, which is also the maximum Hamming
    /// distance between two codes of this type.
    fn dimensions() -> usize;
}

macro_rules! impl_codeint {
    ($($int:ty => $dims:expr,)*) => {
        $(
            impl CodeInt for $int {
                fn dimensions() -> usize {
                    $dims
                }
            }
        )*
    };
}

impl_codeint! {
    u8 => 8,
    u16 => 16,
    u32 => 32,
    u64 => 64,
    u128 => 128,
}
