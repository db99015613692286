pub mod sanitize;
pub use sanitize::{FilterErrorNot, Sanitize};

pub mod terminal;
pub use terminal::Terminal;
