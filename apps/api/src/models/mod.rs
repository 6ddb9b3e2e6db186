pub mod company;
pub mod prediction;
pub mod profile;
pub mod roadmap;
