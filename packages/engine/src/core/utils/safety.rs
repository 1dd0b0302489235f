//! Unchecked access to already wrapped indices
//!
//! The height field reduces every column modulo its width before touching
//! the array, so the slice bounds check that follows is redundant. These
//! helpers keep it in debug builds as an assertion and drop it in release.
//!
//! ```rust
//! use snowdrift_engine::core::safety::{read_wrapped, write_wrapped};
//!
//! let mut heights = vec![168u16; 4];
//! let col = (-2i32).rem_euclid(4) as usize;
//! // SAFETY: rem_euclid by the length keeps `col` in range.
//! unsafe {
//!     write_wrapped(&mut heights, col, 120);
//!     assert_eq!(read_wrapped(&heights, col), 120);
//! }
//! ```

/// Copy out `slice[index]` without a release-mode bounds check.
///
/// # Safety
/// `index` must be less than `slice.len()`.
#[inline(always)]
pub unsafe fn read_wrapped<T: Copy>(slice: &[T], index: usize) -> T {
    debug_assert!(index < slice.len(), "index {index} outside 0..{}", slice.len());
    *slice.get_unchecked(index)
}

/// Store `value` at `slice[index]` without a release-mode bounds check.
///
/// # Safety
/// `index` must be less than `slice.len()`.
#[inline(always)]
pub unsafe fn write_wrapped<T>(slice: &mut [T], index: usize, value: T) {
    debug_assert!(index < slice.len(), "index {index} outside 0..{}", slice.len());
    *slice.get_unchecked_mut(index) = value;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_wrapped_column() {
        let heights = [10u16, 9, 8];
        let col = (-1i32).rem_euclid(3) as usize;
        assert_eq!(unsafe { read_wrapped(&heights, col) }, 8);
    }

    #[test]
    fn writes_column() {
        let mut heights = [10u16; 3];
        unsafe { write_wrapped(&mut heights, 1, 7) };
        assert_eq!(heights, [10, 7, 10]);
    }

    #[test]
    #[should_panic(expected = "outside 0..3")]
    #[cfg(debug_assertions)]
    fn unwrapped_index_panics_in_debug() {
        let heights = [10u16; 3];
        let _ = unsafe { read_wrapped(&heights, 3) };
    }
}
