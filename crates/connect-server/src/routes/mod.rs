pub mod errands;
pub mod health;
pub mod offers;
pub mod professionals;
