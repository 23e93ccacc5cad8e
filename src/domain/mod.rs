pub mod complexity;
pub mod phase;
pub mod project;
pub mod schedule;
