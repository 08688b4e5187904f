//! Database Models
//!
//! Typed models for the three SurrealDB tables: `account`, `worker`,
//! `staff`. All wire field names are camelCase; record ids serialize as
//! "table:id" strings via [`serde_helpers`].

pub mod account;
pub mod serde_helpers;
pub mod staff;
pub mod worker;

pub use account::{
    Account, AccountCreate, AccountId, GovDetails, HospitalDetails, Role, RoleDetails,
    WorkerDetails,
};
pub use staff::{StaffCreate, StaffRecord, StaffUpdate};
pub use worker::{WorkerCreate, WorkerRecord, WorkerUpdate};
