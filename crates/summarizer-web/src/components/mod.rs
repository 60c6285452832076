/// UI components for the summarizer web interface

pub mod icons;
pub mod sidebar;
