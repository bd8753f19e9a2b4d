//! Stats derived from attributes. Pure functions, recomputed on demand.

/// Health and magic before Endurance is added.
pub const BASE_POOL: i32 = 5;

/// Health and magic gained per point of Endurance.
pub const PER_ENDURANCE: i32 = 2;

/// Maximum health for an Endurance rating.
pub fn health_max(endurance: u32) -> i32 {
    pool_max(endurance)
}

/// Maximum magic for an Endurance rating.
pub fn magic_max(endurance: u32) -> i32 {
    pool_max(endurance)
}

fn pool_max(endurance: u32) -> i32 {
    let endurance = i32::try_from(endurance).unwrap_or(i32::MAX);
    BASE_POOL.saturating_add(endurance.saturating_mul(PER_ENDURANCE))
}
