//! The deck: one aggregate owning every piece of client state, driven by
//! messages in the Elm style.
//!
//! `Deck::update` is the only way state changes. It never performs I/O;
//! instead it returns the [`Effect`]s the shell must run (HTTP calls, a
//! blocking alert). When an effect finishes, the shell feeds the outcome back
//! as another [`Msg`]. Each network effect carries the [`RequestContext`] that
//! was current when it was produced.

pub mod search;
pub mod store;
pub mod submission;
pub mod validation;

use log::{debug, info, warn};

use crate::api::{ApiError, RequestContext};
use crate::model::analysis::AnalysisResponse;
use crate::model::card::Card;
use crate::model::identity::Identity;
use crate::model::status::BackendStatus;
use crate::requests::NewCardRequest;
use store::CardStore;
use submission::{SaveOutcome, Submission, SubmissionState};

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// The view was mounted for the first time.
    Mounted,
    SignedIn(Identity),
    SignedOut,
    Submit(String),
    AnalysisResolved {
        seq: u64,
        result: Result<AnalysisResponse, ApiError>,
    },
    Save,
    SaveResolved {
        seq: u64,
        result: Result<(), ApiError>,
    },
    /// Completion of `Effect::FetchCards` carrying the same `seq`.
    CardsFetched {
        seq: u64,
        result: Result<Vec<Card>, ApiError>,
    },
    Search(String),
    StatusLoaded(Result<BackendStatus, ApiError>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchCards {
        seq: u64,
        context: RequestContext,
    },
    Analyze {
        seq: u64,
        input: String,
        context: RequestContext,
    },
    Persist {
        seq: u64,
        card: NewCardRequest,
        context: RequestContext,
    },
    CheckStatus,
    /// Blocking, user-visible failure notice.
    Alert(String),
}

#[derive(Clone, Debug, Default)]
pub struct Deck {
    store: CardStore,
    query: String,
    submission: Submission,
    context: RequestContext,
    status: Option<BackendStatus>,
    /// Sequence number of the newest card fetch. Only its reply is applied.
    fetch_seq: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// A deck whose first requests already carry `context`, for a user who was
    /// signed in before the view mounted.
    pub fn with_context(context: RequestContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn submission(&self) -> &SubmissionState {
        self.submission.state()
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn status(&self) -> Option<&BackendStatus> {
        self.status.as_ref()
    }

    /// Cards the grid should render for the current query.
    pub fn visible_cards(&self) -> Vec<&Card> {
        search::visible(self.store.cards(), &self.query)
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Mounted => vec![self.fetch_cards(), Effect::CheckStatus],
            Msg::SignedIn(identity) => {
                info!("signed in as {}", identity.email);
                self.context = RequestContext::for_identity(identity);
                vec![self.fetch_cards()]
            }
            Msg::SignedOut => {
                info!("signed out");
                self.context = RequestContext::anonymous();
                vec![self.fetch_cards()]
            }
            Msg::Submit(input) => match self.submission.submit(&input) {
                Some(seq) => vec![Effect::Analyze {
                    seq,
                    input,
                    context: self.context.clone(),
                }],
                None => {
                    debug!("rejected non-Chinese input {input:?}");
                    Vec::new()
                }
            },
            Msg::AnalysisResolved { seq, result } => {
                if let Err(err) = &result {
                    warn!("analysis #{seq} failed: {err}");
                }
                self.submission.resolve_analysis(seq, result);
                Vec::new()
            }
            Msg::Save => match self.submission.begin_save() {
                Some((seq, card)) => vec![Effect::Persist {
                    seq,
                    card,
                    context: self.context.clone(),
                }],
                None => Vec::new(),
            },
            Msg::SaveResolved { seq, result } => match self.submission.resolve_save(seq, result) {
                SaveOutcome::Saved => {
                    info!("saved card for submission #{seq}");
                    vec![self.fetch_cards()]
                }
                SaveOutcome::Failed(err) => {
                    warn!("saving card for submission #{seq} failed: {err}");
                    vec![Effect::Alert(format!("Could not save this card: {err}"))]
                }
                SaveOutcome::Stale { persisted: true } => vec![self.fetch_cards()],
                SaveOutcome::Stale { persisted: false } => Vec::new(),
            },
            Msg::CardsFetched { seq, .. } if seq != self.fetch_seq => {
                debug!("dropping card fetch #{seq}, #{} is newer", self.fetch_seq);
                Vec::new()
            }
            Msg::CardsFetched { result: Ok(cards), .. } => {
                self.store.replace(cards);
                debug!("card store holds {} cards", self.store.len());
                Vec::new()
            }
            Msg::CardsFetched { result: Err(err), .. } => {
                warn!("fetching cards failed, keeping {} cached: {err}", self.store.len());
                Vec::new()
            }
            Msg::Search(query) => {
                self.query = query;
                Vec::new()
            }
            Msg::StatusLoaded(Ok(status)) => {
                self.status = Some(status);
                Vec::new()
            }
            Msg::StatusLoaded(Err(err)) => {
                warn!("backend status unavailable: {err}");
                Vec::new()
            }
        }
    }

    /// Starts a new card fetch. Replies to earlier fetches become stale, so
    /// cards requested under a previous identity never reach the store.
    fn fetch_cards(&mut self) -> Effect {
        self.fetch_seq += 1;
        Effect::FetchCards {
            seq: self.fetch_seq,
            context: self.context.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::submission::SaveStatus;

    fn card(character: &str, pinyin: &str) -> Card {
        Card {
            id: None,
            character: character.into(),
            pinyin: pinyin.into(),
            meaning: String::new(),
            connection: String::new(),
            created: None,
        }
    }

    fn water() -> AnalysisResponse {
        AnalysisResponse {
            result: "Your character 水 is pronounced shuǐ and means water.".into(),
            connections: "three drops beside a stream".into(),
            pinyin: "shuǐ".into(),
            meaning: "water".into(),
            cards: Vec::new(),
        }
    }

    fn fetch_count(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::FetchCards { .. }))
            .count()
    }

    /// Sequence number of the single card fetch in `effects`.
    fn fetch_seq(effects: &[Effect]) -> u64 {
        let seqs: Vec<u64> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::FetchCards { seq, .. } => Some(*seq),
                _ => None,
            })
            .collect();
        assert_eq!(seqs.len(), 1, "expected one card fetch in {effects:?}");
        seqs[0]
    }

    fn alert_count(effects: &[Effect]) -> usize {
        effects.iter().filter(|e| matches!(e, Effect::Alert(_))).count()
    }

    /// Submits 水 and resolves the analysis, returning the submission's seq.
    fn loaded_deck() -> (Deck, u64) {
        let mut deck = Deck::new();
        let effects = deck.update(Msg::Submit("水".into()));
        let seq = match effects.as_slice() {
            [Effect::Analyze { seq, input, .. }] => {
                assert_eq!(input, "水");
                *seq
            }
            other => panic!("expected one analyze effect, got {other:?}"),
        };
        deck.update(Msg::AnalysisResolved {
            seq,
            result: Ok(water()),
        });
        (deck, seq)
    }

    #[test]
    fn mounting_fetches_cards_and_status() {
        let mut deck = Deck::new();
        let effects = deck.update(Msg::Mounted);
        assert_eq!(fetch_count(&effects), 1);
        assert!(effects.contains(&Effect::CheckStatus));
    }

    #[test]
    fn preset_context_is_used_on_mount() {
        let context = RequestContext::for_identity(Identity {
            token: "tok".into(),
            email: "learner@example.com".into(),
            user_id: "u1".into(),
        });
        let mut deck = Deck::with_context(context.clone());

        let effects = deck.update(Msg::Mounted);
        assert_eq!(effects[0], Effect::FetchCards { seq: 1, context });
    }

    #[test]
    fn non_chinese_submission_issues_no_request() {
        let mut deck = Deck::new();
        let effects = deck.update(Msg::Submit("hello".into()));

        assert!(effects.is_empty());
        assert!(matches!(deck.submission(), SubmissionState::Invalid { .. }));
    }

    #[test]
    fn chinese_submission_loads_pending_result() {
        let (deck, _) = loaded_deck();
        match deck.submission() {
            SubmissionState::Loaded { result, save, .. } => {
                assert_eq!(result.title, "水");
                assert_eq!(result.meaning, "water");
                assert_eq!(*save, SaveStatus::Unsaved);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn successful_save_refetches_exactly_once() {
        let (mut deck, seq) = loaded_deck();

        let effects = deck.update(Msg::Save);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Persist { card, .. }] if card.title == "水" && card.pinyin == "shuǐ"
        ));

        let effects = deck.update(Msg::SaveResolved { seq, result: Ok(()) });
        assert_eq!(fetch_count(&effects), 1);
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            deck.submission(),
            SubmissionState::Loaded { save: SaveStatus::Saved, .. }
        ));
    }

    #[test]
    fn failed_save_alerts_once_and_stays_unsaved() {
        let (mut deck, seq) = loaded_deck();
        deck.update(Msg::Save);

        let effects = deck.update(Msg::SaveResolved {
            seq,
            result: Err(ApiError::Status {
                status: 500,
                body: "database unavailable".into(),
            }),
        });

        assert_eq!(alert_count(&effects), 1);
        assert_eq!(fetch_count(&effects), 0);
        assert!(matches!(
            deck.submission(),
            SubmissionState::Loaded { save: SaveStatus::Unsaved, .. }
        ));
    }

    #[test]
    fn overlapping_submissions_keep_the_newest() {
        let mut deck = Deck::new();
        deck.update(Msg::Submit("水".into()));
        deck.update(Msg::Submit("火".into()));

        deck.update(Msg::AnalysisResolved {
            seq: 1,
            result: Ok(water()),
        });
        assert!(matches!(deck.submission(), SubmissionState::Loading { seq: 2, .. }));

        deck.update(Msg::AnalysisResolved {
            seq: 2,
            result: Ok(AnalysisResponse {
                pinyin: "huǒ".into(),
                meaning: "fire".into(),
                ..Default::default()
            }),
        });
        match deck.submission() {
            SubmissionState::Loaded { result, .. } => assert_eq!(result.title, "火"),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn failed_fetch_keeps_cached_cards() {
        let mut deck = Deck::new();
        let seq = fetch_seq(&deck.update(Msg::Mounted));
        deck.update(Msg::CardsFetched {
            seq,
            result: Ok(vec![card("水", "shuǐ"), card("水", "shuǐ")]),
        });
        assert_eq!(deck.store().len(), 1);

        let seq = fetch_seq(&deck.update(Msg::SignedOut));
        let effects = deck.update(Msg::CardsFetched {
            seq,
            result: Err(ApiError::Network("offline".into())),
        });
        assert!(effects.is_empty());
        assert_eq!(deck.store().len(), 1);
    }

    #[test]
    fn late_fetch_from_previous_identity_is_dropped() {
        let mut deck = Deck::with_context(RequestContext::for_identity(Identity {
            token: "tok".into(),
            email: "learner@example.com".into(),
            user_id: "u1".into(),
        }));
        let signed_in_fetch = fetch_seq(&deck.update(Msg::Mounted));
        let signed_out_fetch = fetch_seq(&deck.update(Msg::SignedOut));
        assert!(signed_out_fetch > signed_in_fetch);

        deck.update(Msg::CardsFetched {
            seq: signed_out_fetch,
            result: Ok(Vec::new()),
        });
        deck.update(Msg::CardsFetched {
            seq: signed_in_fetch,
            result: Ok(vec![card("秘", "mì")]),
        });

        assert!(!deck.context().is_authenticated());
        assert!(deck.store().is_empty());
    }

    #[test]
    fn mount_fetch_finishing_after_save_refetch_is_dropped() {
        let (mut deck, seq) = loaded_deck();
        let mount_fetch = fetch_seq(&deck.update(Msg::Mounted));
        deck.update(Msg::Save);
        let save_fetch = fetch_seq(&deck.update(Msg::SaveResolved { seq, result: Ok(()) }));

        deck.update(Msg::CardsFetched {
            seq: save_fetch,
            result: Ok(vec![card("水", "shuǐ"), card("火", "huǒ")]),
        });
        deck.update(Msg::CardsFetched {
            seq: mount_fetch,
            result: Ok(vec![card("火", "huǒ")]),
        });

        assert_eq!(deck.store().len(), 2);
    }

    #[test]
    fn successful_save_for_replaced_submission_still_refetches() {
        let (mut deck, seq) = loaded_deck();
        deck.update(Msg::Save);
        deck.update(Msg::Submit("火".into()));

        let effects = deck.update(Msg::SaveResolved { seq, result: Ok(()) });
        assert_eq!(fetch_count(&effects), 1);
        assert_eq!(effects.len(), 1);
        assert!(matches!(deck.submission(), SubmissionState::Loading { .. }));
    }

    #[test]
    fn failed_save_for_replaced_submission_does_nothing() {
        let (mut deck, seq) = loaded_deck();
        deck.update(Msg::Save);
        deck.update(Msg::Submit("火".into()));

        let effects = deck.update(Msg::SaveResolved {
            seq,
            result: Err(ApiError::Network("down".into())),
        });
        assert!(effects.is_empty());
        assert!(matches!(deck.submission(), SubmissionState::Loading { .. }));
    }

    #[test]
    fn search_narrows_visible_cards() {
        let mut deck = Deck::new();
        let seq = fetch_seq(&deck.update(Msg::Mounted));
        deck.update(Msg::CardsFetched {
            seq,
            result: Ok(vec![card("拼", "pīn"), card("水", "shuǐ")]),
        });

        deck.update(Msg::Search("PIN".into()));
        let visible: Vec<_> = deck.visible_cards().iter().map(|c| c.character.clone()).collect();
        assert_eq!(visible, vec!["拼"]);

        deck.update(Msg::Search(String::new()));
        assert_eq!(deck.visible_cards().len(), 2);
    }

    #[test]
    fn signing_in_scopes_later_requests() {
        let mut deck = Deck::new();
        let identity = Identity {
            token: "tok".into(),
            email: "learner@example.com".into(),
            user_id: "u1".into(),
        };

        let effects = deck.update(Msg::SignedIn(identity.clone()));
        assert_eq!(
            effects,
            vec![Effect::FetchCards {
                seq: 1,
                context: RequestContext::for_identity(identity)
            }]
        );

        let effects = deck.update(Msg::Submit("水".into()));
        assert!(matches!(
            effects.as_slice(),
            [Effect::Analyze { context, .. }] if context.is_authenticated()
        ));

        let effects = deck.update(Msg::SignedOut);
        assert_eq!(
            effects,
            vec![Effect::FetchCards {
                seq: 2,
                context: RequestContext::anonymous()
            }]
        );
    }

    #[test]
    fn status_is_recorded() {
        let mut deck = Deck::new();
        deck.update(Msg::StatusLoaded(Ok(BackendStatus {
            database: "postgresql".into(),
            ai_available: true,
        })));
        assert!(deck.status().is_some_and(|s| s.ai_available));
    }
}
