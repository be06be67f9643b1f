//! Job-shop domain models.
//!
//! Provides the problem definition (jobs made of ordered operations) and the
//! decoded solution (a schedule of timed assignments).
//!
//! # Domain Mappings
//!
//! | jobshop-ga | Manufacturing | Logistics |
//! |------------|---------------|-----------|
//! | Job | Order | Shipment |
//! | Operation | Process step | Transport leg |
//! | Subdivision | Machine / work center | Dock / truck |
//! | Schedule | Production plan | Route plan |

mod job;
mod operation;
mod schedule;

pub use job::Job;
pub use operation::Operation;
pub use schedule::{Assignment, Schedule, TimeTable};

/// Job identifier, unique within a problem instance.
pub type JobId = u32;

/// Ordinal position of an operation within its job.
pub type OperationId = u32;

/// Discrete time / duration unit.
pub type Time = u64;
