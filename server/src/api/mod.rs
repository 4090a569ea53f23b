pub mod check_rank;
pub mod health;
