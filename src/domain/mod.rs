pub mod fcfs;
pub mod movement;
pub mod summary;
