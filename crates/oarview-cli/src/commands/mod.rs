pub mod jobs;
pub mod nodes;
