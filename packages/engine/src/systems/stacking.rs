//! Stacking - turns a landed flake into one unit of pile
//!
//! Starting at the target column the snow rolls towards any neighbour that
//! holds less snow (larger height value). When both neighbours are open a coin
//! flip picks the side; when neither is, the snow settles where it is. A
//! column that is already piled to the top saturates the field.
//!
//! Every move goes to a strictly larger height, so the walk can never revisit
//! a column and at most `width` steps are taken.

use rand::Rng;

use crate::spatial::{HeightField, Lowered};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    /// One unit of snow added to `column`
    Settled { column: usize },
    /// `column` was already full; the caller must reset the field
    Saturated { column: usize },
}

/// Settle one unit of snow dropped on `column`.
pub fn settle<R: Rng + ?Sized>(field: &mut HeightField, column: i32, rng: &mut R) -> SettleOutcome {
    let width = field.width() as usize;
    let mut i = field.wrap(column);

    for _ in 0..width {
        let here = field.height_at(i as i32);
        let left_open = field.height_at(i as i32 - 1) > here;
        let right_open = field.height_at(i as i32 + 1) > here;

        let next = match (left_open, right_open) {
            (true, true) => {
                if rng.gen::<bool>() {
                    i as i32 - 1
                } else {
                    i as i32 + 1
                }
            }
            (true, false) => i as i32 - 1,
            (false, true) => i as i32 + 1,
            (false, false) => break,
        };
        i = field.wrap(next);
    }

    match field.lower(i as i32) {
        Lowered::Settled => SettleOutcome::Settled { column: i },
        Lowered::Saturated => SettleOutcome::Saturated { column: i },
    }
}
