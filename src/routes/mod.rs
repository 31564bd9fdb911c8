pub mod assessment;
pub mod symptoms;
pub mod tracker;
pub mod trends;
