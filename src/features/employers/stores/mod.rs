pub mod employer_store;

pub use employer_store::{EmployerState, EmployerStore};
