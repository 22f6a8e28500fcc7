pub mod stateless_llm_interface;
pub mod dashscope_llm;

pub use stateless_llm_interface::*;
pub use dashscope_llm::*;
