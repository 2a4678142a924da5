pub mod content;
pub mod message;

pub use content::Content;
pub use message::{Message, Role};
