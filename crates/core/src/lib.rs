#![forbid(unsafe_code)]

pub mod error;
pub mod locale;
pub mod model;
pub mod seed;
pub mod time;

pub use error::Error;
pub use locale::{Locale, LocaleError};
pub use time::Clock;
