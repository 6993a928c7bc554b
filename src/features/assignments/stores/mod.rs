pub mod assignment_store;

pub use assignment_store::{AssignmentState, AssignmentStore};
