//! Nearly-equal integer partitioning.

use crate::{GcdInterleave, InterleaveStrategy, PartitionError, PartitionResult};

/// Split `total` into `parts` non-empty quotas using the default
/// [`GcdInterleave`] ordering.
///
/// Every quota is `total / parts` or one more, and the quotas sum to `total`.
///
/// # Errors
///
/// - [`PartitionError::ZeroParts`] if `parts == 0`
/// - [`PartitionError::ZeroTotal`] if `total == 0`
/// - [`PartitionError::Infeasible`] if `total < parts`
pub fn partition(total: u32, parts: u32) -> PartitionResult<Vec<u32>> {
    partition_with(total, parts, &GcdInterleave)
}

/// Like [`partition`] but with a caller-chosen ordering of the two quota sizes.
pub fn partition_with<S: InterleaveStrategy + ?Sized>(
    total: u32,
    parts: u32,
    strategy: &S,
) -> PartitionResult<Vec<u32>> {
    if parts == 0 {
        return Err(PartitionError::ZeroParts);
    }
    if total == 0 {
        return Err(PartitionError::ZeroTotal);
    }
    if total < parts {
        return Err(PartitionError::Infeasible { total, parts });
    }

    let base = total / parts;
    let big = total % parts;

    if big == 0 {
        return Ok(vec![base; parts as usize]);
    }

    let mut out = Vec::with_capacity(parts as usize);
    strategy.arrange(base, big, parts - big, &mut out);
    debug_assert_eq!(out.len(), parts as usize);
    Ok(out)
}
