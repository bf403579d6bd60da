pub mod autoscroll;
pub mod coords;
pub mod drag;
pub mod snap;
pub mod view;

pub use drag::{DragController, DragMode, DragState};
pub use snap::{SnapConfig, SnapResult};
pub use view::TimelineView;
