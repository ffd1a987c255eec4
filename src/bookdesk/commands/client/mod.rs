//! Client operations. Clients cannot be deleted.

pub mod edit;
pub mod find;
pub mod list;
pub mod register;
