pub mod openai;
pub mod optimizer;

pub use openai::OpenAiSuggester;
pub use optimizer::OptimizerService;
