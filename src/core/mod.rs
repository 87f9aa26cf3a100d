pub mod logic;
pub mod resolver;
pub mod schedule;
