//! Types shared between the catalog admin frontend and backend.

pub mod domain;
pub mod shared;
