pub mod case;
pub mod criminal;
pub mod officer;
pub mod user;
