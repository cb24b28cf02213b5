pub mod vector;
pub mod trajectory;
pub mod states;
pub mod forces;
pub mod integrator;
pub mod field;
pub mod engine;
pub mod scenario;
