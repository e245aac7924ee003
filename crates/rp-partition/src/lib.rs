//! `rp-partition` — split a chapter total into per-day quotas.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`split`]       | `partition`, `partition_with`                            |
//! | [`interleave`]  | `InterleaveStrategy`, `GcdInterleave`, `GroupedInterleave` |
//! | [`error`]       | `PartitionError`, `PartitionResult<T>`                   |
//!
//! # Shape of a partition (summary)
//!
//! ```text
//! base  = total / parts
//! big   = total % parts          parts of size base + 1
//! small = parts - big            parts of size base
//! ```
//!
//! Where the two sizes go in the sequence is decided by an
//! [`InterleaveStrategy`].  The default, [`GcdInterleave`], is the ordering
//! published plans have always used, so changing it changes every plan.

pub mod error;
pub mod interleave;
pub mod split;


pub use error::{PartitionError, PartitionResult};
pub use interleave::{GcdInterleave, GroupedInterleave, InterleaveStrategy};
pub use split::{partition, partition_with};
