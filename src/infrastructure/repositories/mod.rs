pub mod http_transcript_repository;
pub mod openai_summarizer_repository;
pub mod summarizer_repository;
pub mod transcript_repository;

pub use http_transcript_repository::HttpTranscriptRepository;
pub use openai_summarizer_repository::OpenAiSummarizerRepository;
pub use summarizer_repository::{SummarizerError, SummarizerRepository};
pub use transcript_repository::{Transcript, TranscriptRepository};
