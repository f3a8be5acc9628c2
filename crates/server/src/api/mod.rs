#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod operator;
pub use operator::*;

mod criminal;
pub use criminal::*;

mod case;
pub use case::*;

mod officer;
pub use officer::*;
