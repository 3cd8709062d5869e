//! Raw storage stratum - the minimal unsafe building block.
//!
//! The module tree is intentionally stratified:
//! - `raw::*` owns every raw-storage operation and its safety contract.
//! - `optional::*` layers the occupancy flag and the safe API on top.

mod slot;

pub(crate) use slot::RawSlot;
