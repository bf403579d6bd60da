pub mod import;
pub mod persist;
pub mod playback;
pub mod project;
pub mod segment;
pub mod selection;
pub mod speaker;
pub mod timecode;
pub mod undo;
