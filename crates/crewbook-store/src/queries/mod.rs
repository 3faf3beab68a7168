pub mod company;
pub mod crew;
pub mod history;
pub mod worker;
