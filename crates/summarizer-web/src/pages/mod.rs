/// Page components for the summarizer web interface

pub mod chat;
pub mod not_found;
