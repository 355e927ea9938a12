use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::registrant::Matricule};

/// Issues membership numbers. Counters are partitioned by calendar year and
/// restart at 1 each January; within a year, allocation is strictly
/// sequential. There is no concurrency control, so the allocator is only
/// safe under the portal's single-process assumption.
#[async_trait]
pub trait MatriculeAllocator: Send + Sync {
    /// The matricule the next allocation would produce. Never writes, so
    /// repeated peeks return the same value.
    async fn peek(&self) -> Result<Matricule, RepositoryError>;

    /// Advance the current year's counter by exactly one, persist the
    /// counter map and return the formatted matricule.
    async fn allocate(&self) -> Result<Matricule, RepositoryError>;
}
