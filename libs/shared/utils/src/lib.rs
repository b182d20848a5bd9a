pub mod display;
pub mod extractor;
pub mod ids;
pub mod test_utils;
pub mod validation;

pub use extractor::FormBody;
pub use validation::FormValidator;
