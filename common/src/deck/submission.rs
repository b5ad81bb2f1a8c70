//! Lifecycle of one "analyze this character" submission.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Loaded{Unsaved} ──save──▶ Loaded{Saving}
//!   ▲                 │  └─err──▶ Failed                        │      │
//!   │                 └─not CJK──▶ Invalid       Loaded{Saved} ◀─ok    err──▶ Loaded{Unsaved}
//!   └──────────────── any state ──submit──▶ Loading
//! ```
//!
//! Every submission gets a sequence number. Resolutions carrying an older
//! number than the current submission are dropped, so a slow response can
//! never overwrite the state of a newer one.

use log::debug;

use super::validation::contains_chinese;
use crate::api::ApiError;
use crate::model::analysis::{AnalysisResponse, PendingResult};
use crate::requests::NewCardRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveStatus {
    Unsaved,
    /// The save request is in flight. Still unsaved; the button is disabled.
    Saving,
    Saved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Loading { seq: u64, input: String },
    Invalid { input: String },
    Failed { input: String, reason: String },
    Loaded {
        seq: u64,
        result: PendingResult,
        save: SaveStatus,
    },
}

/// What became of a save resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed(ApiError),
    /// The save belonged to a submission that has since been replaced.
    Stale { persisted: bool },
}

#[derive(Clone, Debug)]
pub struct Submission {
    state: SubmissionState,
    current_seq: u64,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            current_seq: 0,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn current_seq(&self) -> u64 {
        self.current_seq
    }

    pub fn pending_result(&self) -> Option<&PendingResult> {
        match &self.state {
            SubmissionState::Loaded { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Starts a new submission, dropping whatever the previous one held.
    ///
    /// Returns the sequence number to analyze under, or `None` when the input
    /// was rejected and no request must be sent.
    pub fn submit(&mut self, input: &str) -> Option<u64> {
        self.current_seq += 1;
        let seq = self.current_seq;

        if !contains_chinese(input) {
            self.state = SubmissionState::Invalid {
                input: input.to_string(),
            };
            return None;
        }

        self.state = SubmissionState::Loading {
            seq,
            input: input.to_string(),
        };
        Some(seq)
    }

    /// Applies an analysis response. Returns `false` when it was stale.
    pub fn resolve_analysis(
        &mut self,
        seq: u64,
        outcome: Result<AnalysisResponse, ApiError>,
    ) -> bool {
        let input = match &self.state {
            SubmissionState::Loading { seq: current, input } if *current == seq => input.clone(),
            _ => {
                debug!("dropping analysis result for superseded submission #{seq}");
                return false;
            }
        };

        self.state = match outcome {
            Ok(response) => SubmissionState::Loaded {
                seq,
                result: PendingResult::from_response(input, response),
                save: SaveStatus::Unsaved,
            },
            Err(err) => SubmissionState::Failed {
                input,
                reason: err.to_string(),
            },
        };
        true
    }

    /// Moves `Loaded{Unsaved}` to `Loaded{Saving}` and hands back the body to post.
    /// Any other state ignores the request.
    pub fn begin_save(&mut self) -> Option<(u64, NewCardRequest)> {
        match &mut self.state {
            SubmissionState::Loaded {
                seq,
                result,
                save: save @ SaveStatus::Unsaved,
            } => {
                *save = SaveStatus::Saving;
                Some((*seq, NewCardRequest::from(&*result)))
            }
            _ => None,
        }
    }

    pub fn resolve_save(&mut self, seq: u64, outcome: Result<(), ApiError>) -> SaveOutcome {
        match &mut self.state {
            SubmissionState::Loaded {
                seq: current,
                save: save @ SaveStatus::Saving,
                ..
            } if *current == seq => match outcome {
                Ok(()) => {
                    *save = SaveStatus::Saved;
                    SaveOutcome::Saved
                }
                Err(err) => {
                    *save = SaveStatus::Unsaved;
                    SaveOutcome::Failed(err)
                }
            },
            _ => SaveOutcome::Stale {
                persisted: outcome.is_ok(),
            },
        }
    }
}
