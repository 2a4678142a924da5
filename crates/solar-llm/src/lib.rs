pub mod adapters;
pub mod buffer_utils;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod streaming;
pub mod traits;
pub mod types;

pub use traits::{
    ChatModel,
    LanguageModel,
    ChatChunk, ChatResult, GenerationMetadata, IdentifyingParams,
};

pub use adapters::{SolarChatModel, SolarLlm};
pub use buffer_utils::{decode_line, SseDelta};
pub use client::{Completion, SolarClient};
pub use config::{ReasoningEffort, SolarConfig, SOLAR_API_URL};
pub use error::{Result, SolarError};
pub use payload::ChatPayload;
pub use streaming::{EventStream, StreamEvent, TextStream};
pub use types::{Content, Message, Role};
