mod whisky;

pub use whisky::{CreateWhisky, UpdateWhisky};
