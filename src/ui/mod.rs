pub mod panels;
pub mod plot;
pub mod sections;
pub mod simulator;
