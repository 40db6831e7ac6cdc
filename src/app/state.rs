// src/app/state.rs
// State-related enums and inter-thread messages for ideabench: the active command, the view type, and updates delivered to the UI thread.

use crate::app::lifecycle::LoadToken;
use crate::app::model::Idea;
use crate::app::storage::ConfigDoc;

// --- Application State Enums ---

/// The single currently-open workflow. Every command trigger is disabled
/// whenever this is not `None`, so the workflows are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveCommand {
    None,
    /// The add-idea panel is open.
    New,
    /// The upload-photo panel is open.
    Upload,
    /// The slideshow window is open.
    Slideshow,
    /// Transient: toggles the view type and immediately returns to `None`.
    ViewType,
    /// The settings window is open.
    Configure,
}

/// Presentation modes for the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewType {
    List,
    Grid,
}

// --- Inter-Thread Messages ---

/// Messages passed from background tasks or the logger to the main UI
/// thread via an MPSC channel, drained once per frame. Load completions
/// carry the token of the attempt they belong to; the lifecycle discards
/// completions whose token is no longer current.
#[derive(Debug)]
pub enum UpdateMessage {
    /// A log line (INFO level or lower) to be displayed in the UI.
    Log(String),
    /// A configuration load attempt finished, successfully or not.
    ConfigLoaded {
        token: LoadToken,
        result: Result<ConfigDoc, String>,
    },
    /// A data load attempt finished, successfully or not.
    DataLoaded {
        token: LoadToken,
        result: Result<Vec<Idea>, String>,
    },
    /// The append-idea hand-off finished; carries the idea name on success.
    IdeaAppended { result: Result<String, String> },
    /// The fire-and-forget photo save finished; carries the file name on
    /// success.
    PhotoSaved { result: Result<String, String> },
}
