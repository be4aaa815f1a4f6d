pub mod communication;
pub mod control_system;
pub mod flow_analyzer;
pub mod global_variables;
pub mod monitoring;
pub mod shared_data;
pub mod simulation_engine;
