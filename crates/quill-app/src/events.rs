use quill_core::{GenerationParams, GenerationResult};

use crate::error::GenerateError;
use crate::ui::UiEvent;

#[derive(Debug, Clone)]
pub enum QuillEvent {
    Ui(UiEvent),
    App(AppEvent),
    Gen(GenEvent),
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Transient feedback shown in the header (copy/export confirmations).
    Status(String),
    /// A sample's params were loaded into the form; components holding
    /// local edit buffers resynchronize from this.
    ParamsLoaded(GenerationParams),
}

#[derive(Debug, Clone)]
pub enum GenEvent {
    Finished(Result<GenerationResult, GenerateError>),
}
