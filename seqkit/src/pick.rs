//! Pick a single element out of a tuple of return values.
//!
//! Useful when a function returns several values but only one of them is
//! of interest:
//!
//! ```
//! use seqkit::pick::{self, ElementAt};
//!
//! fn load() -> (i64, &'static str, Result<(), String>) {
//!     (0, "", Err("broken".to_string()))
//! }
//!
//! let values = load();
//! assert_eq!(pick::first::<i64>(&values), Some(&0));
//! assert!(ElementAt::LAST.pick::<Result<(), String>>(&values).unwrap().is_err());
//! ```
use std::any::Any;

/// A fixed-size group of heterogeneous values, addressable by position.
///
/// Implemented for tuples of up to twelve `'static` elements.
pub trait ReturnElements {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `position`, counted from the front.
    fn get(&self, position: usize) -> Option<&dyn Any>;

    /// The element at `index`. Negative indices count from the end, so `-1`
    /// is the last element. Out of range indices give `None`.
    fn element_at(&self, index: isize) -> Option<&dyn Any> {
        let position = if index < 0 {
            self.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        self.get(position)
    }
}

macro_rules! return_elements_impl {
    ($len:expr; $($name:ident $idx:tt),+) => {
        impl<$($name: Any),+> ReturnElements for ($($name,)+) {
            fn len(&self) -> usize {
                $len
            }

            fn get(&self, position: usize) -> Option<&dyn Any> {
                match position {
                    $($idx => Some(&self.$idx as &dyn Any),)+
                    _ => None,
                }
            }
        }
    };
}

return_elements_impl!(1; A 0);
return_elements_impl!(2; A 0, B 1);
return_elements_impl!(3; A 0, B 1, C 2);
return_elements_impl!(4; A 0, B 1, C 2, D 3);
return_elements_impl!(5; A 0, B 1, C 2, D 3, E 4);
return_elements_impl!(6; A 0, B 1, C 2, D 3, E 4, F 5);
return_elements_impl!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
return_elements_impl!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
return_elements_impl!(9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
return_elements_impl!(10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
return_elements_impl!(11; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
return_elements_impl!(12; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

/// The element at `index`, if it exists and has type `T`.
pub fn element_at<T: Any>(values: &impl ReturnElements, index: isize) -> Option<&T> {
    values.element_at(index)?.downcast_ref::<T>()
}

pub fn first<T: Any>(values: &impl ReturnElements) -> Option<&T> {
    element_at(values, 0)
}

pub fn last<T: Any>(values: &impl ReturnElements) -> Option<&T> {
    element_at(values, -1)
}

/// A stored position that can be applied to any tuple of return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementAt {
    index: isize,
}

impl ElementAt {
    pub const FIRST: ElementAt = ElementAt { index: 0 };
    pub const LAST: ElementAt = ElementAt { index: -1 };

    pub const fn new(index: isize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> isize {
        self.index
    }

    pub fn pick<'a, T: Any>(&self, values: &'a impl ReturnElements) -> Option<&'a T> {
        element_at(values, self.index)
    }
}
