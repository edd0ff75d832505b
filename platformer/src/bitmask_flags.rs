use num_traits::{One, PrimInt};

/// A flag enum whose variants map to single bits of `Storage`.
pub trait FlagBit: Copy {
    type Storage: PrimInt;

    fn bit_index(self) -> u8;

    fn mask(self) -> Self::Storage {
        // NOTE: `bit_index()` must be below the bit width of `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// Set of [`FlagBit`] values packed into one integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn insert<F: FlagBit<Storage = T>>(&mut self, flag: F) {
        self.bits = self.bits | flag.mask();
    }

    pub fn remove<F: FlagBit<Storage = T>>(&mut self, flag: F) {
        self.bits = self.bits & !flag.mask();
    }

    /// Insert or remove `flag` depending on `on`.
    pub fn set<F: FlagBit<Storage = T>>(&mut self, flag: F, on: bool) {
        if on {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    pub fn contains<F: FlagBit<Storage = T>>(&self, flag: F) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }
}

/// Declare a bit-backed flag enum and implement [`FlagBit`] for it.
///
/// ```rust
/// platformer::define_bitmask_flags!(ContactFlag, u8, {
///     Ground,
///     Ceiling,
/// });
/// ```
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::bitmask_flags::FlagBit for $name {
            type Storage = $storage;

            fn bit_index(self) -> u8 {
                self as u8
            }
        }
    };
}

define_bitmask_flags!(AnimationFlag, u8, {
    Walking,
    Grounded,
    Falling,
    Jumping,
});

/// The animation contract with the rendering collaborator.
pub type AnimationFlags = BitmaskFlags<u8>;
