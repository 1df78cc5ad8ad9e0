mod types;

pub use types::{Whisky, WhiskyId};
