//! Participant Loader Module
//!
//! Loads the participant file in a background thread so the UI can show a
//! loading indicator instead of blocking. The result comes back over a channel
//! that the event loop polls once per iteration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use serde_json::Value;

use super::record::Participant;
use crate::error::BibError;

/// Represents the current state of participant loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete(usize),
    Error(BibError),
}

/// Manages the one-shot participant load
pub struct ParticipantLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<Vec<Participant>, BibError>>>,
}

impl ParticipantLoader {
    /// Spawn a background thread that reads and validates `path`
    pub fn spawn_load(path: PathBuf) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let result = load_participants(&path);
            let _ = tx.send(result);
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while the thread is still working and after the result
    /// has already been handed out once.
    pub fn poll(&mut self) -> Option<Result<Vec<Participant>, BibError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(participants) => LoadingState::Complete(participants.len()),
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                let err = BibError::Io("Participant loader thread disconnected".to_string());
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

/// Synchronous load, used by the loader thread and by one-shot query mode
pub fn load_participants(path: &Path) -> Result<Vec<Participant>, BibError> {
    #[cfg(debug_assertions)]
    log::debug!("Loading participants from {:?}", path);

    let contents = std::fs::read_to_string(path)
        .map_err(|e| BibError::Io(format!("{} ({})", path.display(), e)))?;

    let participants = parse_participants(&contents)?;

    #[cfg(debug_assertions)]
    log::debug!("Loaded {} participants", participants.len());

    Ok(participants)
}

/// Parse and validate the participant file contents
///
/// The file must hold a non-empty JSON array of records with unique,
/// positive bib numbers and non-empty names.
pub fn parse_participants(contents: &str) -> Result<Vec<Participant>, BibError> {
    let value: Value =
        serde_json::from_str(contents).map_err(|e| BibError::InvalidJson(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(BibError::InvalidData(
            "Expected non-empty array of runners".to_string(),
        ));
    };
    if items.is_empty() {
        return Err(BibError::InvalidData(
            "Expected non-empty array of runners".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut participants = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let participant: Participant = serde_json::from_value(item)
            .map_err(|e| BibError::InvalidData(format!("runner {}: {}", index, e)))?;

        if participant.full_name.trim().is_empty() {
            return Err(BibError::InvalidData(format!(
                "runner {}: full_name must not be empty",
                index
            )));
        }
        if !seen.insert(participant.bib_number) {
            return Err(BibError::InvalidData(format!(
                "runner {}: duplicate bib number {}",
                index, participant.bib_number
            )));
        }

        participants.push(participant);
    }

    Ok(participants)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
