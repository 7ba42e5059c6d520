//! Random sampling without repetition.

use std::collections::HashMap;

use rand::Rng;

use crate::error::{Error, Result};

/// Draws `count` distinct integers from the inclusive range `[start, end]`,
/// in random order.
///
/// A Fisher-Yates shuffle over a virtual population: each draw picks a
/// uniform offset into what is left and moves the last remaining offset into
/// its slot. Only displaced slots are stored, so memory grows with `count`,
/// never with the width of the range. An empty population (`start > end`)
/// yields an empty sample whatever `count` is. Asking for more values than
/// the population holds is an [`Error::InvalidArgument`].
pub fn sample<R: Rng + ?Sized>(start: i64, end: i64, count: usize, rng: &mut R) -> Result<Vec<i64>> {
    if start > end {
        return Ok(Vec::new());
    }

    // Up to 2^64 values for the full i64 range.
    let size = u128::from(end.abs_diff(start)) + 1;
    if count as u128 > size {
        return Err(Error::invalid(format!(
            "cannot draw {count} distinct values from a population of {size}"
        )));
    }

    // Offset from `start` -> offset moved there by an earlier draw.
    let mut moved: HashMap<u64, u64> = HashMap::with_capacity(count);
    let mut remaining = size;
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        // Both fit in u64: remaining <= 2^64 and the range is exclusive.
        let slot = rng.gen_range(0..remaining) as u64;
        let last = (remaining - 1) as u64;
        let picked = moved.get(&slot).copied().unwrap_or(slot);
        let tail = moved.remove(&last).unwrap_or(last);
        if slot != last {
            moved.insert(slot, tail);
        }
        drawn.push((i128::from(start) + i128::from(picked)) as i64);
        remaining -= 1;
    }
    Ok(drawn)
}

/// `count` distinct indices into a slice of length `len`, capped at `len`.
pub fn sample_indices<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let Some(last) = len.checked_sub(1) else {
        return Vec::new();
    };
    // Capped, so the draw cannot exceed the population.
    sample(0, last as i64, count.min(len), rng)
        .unwrap_or_default()
        .into_iter()
        .map(|i| i as usize)
        .collect()
}
