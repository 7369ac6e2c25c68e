pub mod dns;

pub use dns::{QuestionOutcome, Resolution, ResolveQueryUseCase};
