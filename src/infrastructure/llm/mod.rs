mod gemini;
mod vision;

pub use gemini::GeminiLlm;
pub use vision::GeminiVision;
