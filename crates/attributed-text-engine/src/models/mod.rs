pub mod inline_model;
pub mod resolver;
pub mod style;

pub use inline_model::*;
pub use resolver::*;
pub use style::*;
