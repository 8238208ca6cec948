pub mod emitter;
pub mod template_engine;

pub use emitter::{Emitter, ToolView};
pub use template_engine::TemplateEngine;
