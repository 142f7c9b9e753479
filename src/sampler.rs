//! Unbiased integer sampling from raw random bytes.

use crate::entropy::EntropySource;

/// Sample an integer uniformly from the inclusive range `[min, max]`.
///
/// Candidates are assembled big-endian from the fewest bytes able to represent the range. Any
/// candidate at or above the largest multiple of the range that fits in those bytes is discarded
/// and redrawn, so reducing the survivor modulo the range is exact. There is no cap on redraws;
/// each one is accepted with probability above 1/2.
///
/// # Panics
///
/// If `min > max`.
pub fn sample_uniform<S>(source: &mut S, min: u64, max: u64) -> Result<u64, rand::Error>
where
    S: EntropySource + ?Sized,
{
    assert!(
        min <= max,
        "sample_uniform called with an empty range: min ({min}) > max ({max})"
    );
    if min == max {
        return Ok(min);
    }

    let range = u128::from(max - min) + 1;
    let bytes_needed = bytes_needed(range);
    let domain_size = 1u128 << (8 * bytes_needed);
    let usable_limit = domain_size - domain_size % range;

    let mut buf = [0u8; 8];
    let buf = &mut buf[..bytes_needed];
    loop {
        source.fill(buf)?;
        let candidate = buf
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
        if candidate < usable_limit {
            // `candidate % range` is below `range`, so this can't exceed `max`.
            return Ok(min + (candidate % range) as u64);
        }
        log::trace!("rejected biased candidate {candidate} (limit {usable_limit})");
    }
}

/// `ceil(log2(range) / 8)`: the number of bytes that can represent `range` distinct values.
fn bytes_needed(range: u128) -> usize {
    debug_assert!(range >= 2);
    let bits = 128 - (range - 1).leading_zeros();
    ((bits + 7) / 8) as usize
}
