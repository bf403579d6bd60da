use serde::{Deserialize, Serialize};

use crate::project::ProjectState;
use crate::segment::Segment;
use crate::speaker::Speaker;

/// Horizontal window persisted with a project: zoom in pixels-per-second
/// plus scroll offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f32,
    pub scroll_offset: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 100.0,
            scroll_offset: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub title: String,
    pub source: Option<String>,
}

/// Flat serialization of everything a session needs to resume. No
/// versioning or migration; the shape is the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProject {
    pub view: ViewState,
    pub segments: Vec<Segment>,
    pub speakers: Vec<Speaker>,
    pub meta: ProjectMeta,
}

impl SavedProject {
    pub fn capture(project: &ProjectState, view: ViewState, meta: ProjectMeta) -> Self {
        Self {
            view,
            segments: project.segments.clone(),
            speakers: project.speakers.clone(),
            meta,
        }
    }

    /// Rebuilds an editable project. History starts empty; undo does not
    /// survive a save/load cycle.
    pub fn into_project(self) -> (ProjectState, ViewState, ProjectMeta) {
        let mut project = ProjectState::new();
        project.load_transcript(self.segments);
        project.speakers = self.speakers;
        (project, self.view, self.meta)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
