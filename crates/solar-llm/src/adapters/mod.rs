mod chat_model;
mod llm;

pub use chat_model::SolarChatModel;
pub use llm::SolarLlm;
