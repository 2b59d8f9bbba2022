//! Seat allotment for a single bus.
//!
//! A bus has 50 seats in 10 rows of five: two seats left of the aisle and
//! three to the right. Some seats are already taken when the screen opens.
//! The user may hold at most one seat at a time and confirms it to book it.
//!
//! ```text
//!          empty ──select──▶ selected ──confirm──▶ booked
//!            ▲                  │
//!            └────select────────┘
//! ```
//!
//! [`SeatController`] owns the seat collection and is the only thing that
//! mutates it. The single-selection rule lives here and nowhere else.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use utoipa::ToSchema;

use crate::config::SeatsConfig;
use crate::store::{KeyValueStore, StoreError, BOOKED_SEAT_KEY};

/// Number of seat rows in the bus.
pub const ROWS: usize = 10;

/// Seats per row.
pub const SEATS_PER_ROW: usize = 5;

/// Total number of seats.
pub const SEAT_COUNT: usize = ROWS * SEATS_PER_ROW;

/// Columns left of the aisle.
pub const LEFT_COLUMNS: usize = 2;

/// Default chance that a seat is already booked when the layout is generated.
pub const DEFAULT_BOOKED_PROBABILITY: f64 = 0.4;

/// Warning shown when the user taps a second seat.
pub const SINGLE_SEAT_WARNING: &str = "You can only select one seat";

/// Booking state of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to select.
    Empty,
    /// Held by the user, not yet confirmed.
    Selected,
    /// Taken. Terminal for the session.
    Booked,
}

/// Which side of the aisle a seat is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeatPosition {
    /// Columns A and B.
    Left,
    /// Columns C, D and E.
    Right,
}

/// One bookable seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Seat {
    /// Row number followed by column letter, e.g. `3B`.
    #[schema(example = "3B")]
    pub id: String,

    /// Current booking state.
    pub status: SeatStatus,

    /// Side of the aisle.
    pub position: SeatPosition,
}

impl Seat {
    fn at_index(index: usize, status: SeatStatus) -> Self {
        let column = index % SEATS_PER_ROW;
        Self {
            id: seat_label(index),
            status,
            position: if column < LEFT_COLUMNS {
                SeatPosition::Left
            } else {
                SeatPosition::Right
            },
        }
    }
}

/// Label for the seat at `index` in layout order (`0 -> 1A`, `49 -> 10E`).
#[must_use]
pub fn seat_label(index: usize) -> String {
    let row = index / SEATS_PER_ROW + 1;
    let column = index % SEATS_PER_ROW;
    // column < 5, always fits in a u8
    #[allow(clippy::cast_possible_truncation)]
    let letter = char::from(b'A' + column as u8);
    format!("{row}{letter}")
}

/// What happened when a seat was tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The seat is now held.
    Selected(String),
    /// The seat was held and has been released.
    Deselected(String),
    /// The seat is booked and cannot be selected.
    Blocked(String),
    /// Another seat is already held; nothing changed.
    Rejected {
        /// The seat currently held.
        held: String,
        /// The seat that was tapped.
        requested: String,
    },
    /// No seat has this id.
    Ignored,
}

impl SelectOutcome {
    /// Message the UI host should show, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<&'static str> {
        match self {
            Self::Rejected { .. } => Some(SINGLE_SEAT_WARNING),
            _ => None,
        }
    }

    /// Whether the seat collection was modified.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Selected(_) | Self::Deselected(_))
    }
}

/// Result of confirming a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Nothing was held; the confirm action was disabled.
    NothingSelected,
    /// The seat was persisted and booked.
    Booked(String),
    /// The seat was booked in memory but the store write failed.
    ///
    /// The persisted booking no longer matches what the user sees.
    BookedUnpersisted {
        /// The seat that is now booked.
        seat_id: String,
        /// Rendered store error.
        error: String,
    },
}

impl ConfirmOutcome {
    /// Confirmation text for the UI host.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NothingSelected => None,
            Self::Booked(id) | Self::BookedUnpersisted { seat_id: id, .. } => {
                Some(format!("Successfully booked seat {id}"))
            }
        }
    }

    /// The booked seat, if a booking happened.
    #[must_use]
    pub fn seat_id(&self) -> Option<&str> {
        match self {
            Self::NothingSelected => None,
            Self::Booked(id) | Self::BookedUnpersisted { seat_id: id, .. } => Some(id),
        }
    }
}

/// How to react when the booking cannot be written to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PersistFailurePolicy {
    /// Log the error and book the seat anyway.
    ///
    /// The displayed state and the stored booking can disagree afterwards.
    #[default]
    LogAndContinue,
    /// Keep the seat selected and return the error so the user can retry.
    RollBack,
}

/// Errors from seat operations.
#[derive(Debug, Error)]
pub enum SeatError {
    /// The booking could not be persisted and was rolled back.
    #[error("Could not save booking for seat {seat_id}: {source}")]
    Persist {
        /// The seat that stays selected.
        seat_id: String,
        /// Underlying store error.
        #[source]
        source: StoreError,
    },

    /// A layout was requested with an out-of-range booking probability.
    #[error("Booked probability must be between 0 and 1 (got {0})")]
    InvalidProbability(f64),
}

/// Result type for seat operations.
pub type SeatResult<T> = std::result::Result<T, SeatError>;

/// Receiver of the "go back" signal after a booking.
pub trait Navigator {
    /// Return to the previous screen.
    fn go_back(&mut self);
}

/// Navigator that counts how often it was asked to go back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordingNavigator {
    /// Number of `go_back` calls.
    pub back_calls: usize,
}

impl Navigator for RecordingNavigator {
    fn go_back(&mut self) {
        self.back_calls += 1;
    }
}

/// Seats of one row split by the aisle.
#[derive(Debug, Clone, Copy)]
pub struct SeatRow<'a> {
    /// Row number, starting at 1.
    pub number: usize,
    /// Seats A and B.
    pub left: &'a [Seat],
    /// Seats C to E.
    pub right: &'a [Seat],
}

/// Tally of seats by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeatCounts {
    /// Seats still free.
    pub empty: usize,
    /// Seats held (0 or 1).
    pub selected: usize,
    /// Seats taken.
    pub booked: usize,
}

/// Owner of the seat collection and the selection rule.
pub struct SeatController<S> {
    seats: Vec<Seat>,
    selection: Option<String>,
    store: S,
    policy: PersistFailurePolicy,
}

impl<S: KeyValueStore> SeatController<S> {
    /// Generate a layout where each seat is booked with probability
    /// `booked_probability`, drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::InvalidProbability`] unless the probability is
    /// within `0.0..=1.0`.
    pub fn generate<R: Rng>(
        rng: &mut R,
        booked_probability: f64,
        store: S,
    ) -> SeatResult<Self> {
        if !(0.0..=1.0).contains(&booked_probability) {
            return Err(SeatError::InvalidProbability(booked_probability));
        }
        let seats = (0..SEAT_COUNT)
            .map(|index| {
                let status = if rng.gen_bool(booked_probability) {
                    SeatStatus::Booked
                } else {
                    SeatStatus::Empty
                };
                Seat::at_index(index, status)
            })
            .collect::<Vec<_>>();

        let controller = Self::from_seats(seats, store);
        debug!(booked = controller.counts().booked, "Generated seat layout");
        Ok(controller)
    }

    /// Generate a layout using the probability and failure policy from
    /// `config`.
    ///
    /// # Errors
    ///
    /// See [`SeatController::generate`].
    pub fn from_config<R: Rng>(rng: &mut R, config: &SeatsConfig, store: S) -> SeatResult<Self> {
        let controller = Self::generate(rng, config.booked_probability, store)?;
        Ok(controller.with_policy(config.persist_failure))
    }

    /// Build a layout where exactly the seats named in `booked` are taken.
    ///
    /// Unknown ids are ignored.
    pub fn with_booked<I, T>(booked: I, store: S) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let booked: BTreeSet<String> = booked
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let seats = (0..SEAT_COUNT)
            .map(|index| {
                let status = if booked.contains(&seat_label(index)) {
                    SeatStatus::Booked
                } else {
                    SeatStatus::Empty
                };
                Seat::at_index(index, status)
            })
            .collect();
        Self::from_seats(seats, store)
    }

    fn from_seats(seats: Vec<Seat>, store: S) -> Self {
        Self {
            seats,
            selection: None,
            store,
            policy: PersistFailurePolicy::default(),
        }
    }

    /// Choose how persistence failures during confirmation are handled.
    #[must_use]
    pub fn with_policy(mut self, policy: PersistFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured persistence failure policy.
    #[must_use]
    pub const fn policy(&self) -> PersistFailurePolicy {
        self.policy
    }

    /// All seats in layout order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Look up a seat by id.
    #[must_use]
    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == id)
    }

    /// The held seat id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Whether the confirm action is enabled.
    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        self.selection.is_some()
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Rows for rendering, split by the aisle.
    pub fn rows(&self) -> impl Iterator<Item = SeatRow<'_>> {
        self.seats
            .chunks(SEATS_PER_ROW)
            .enumerate()
            .map(|(i, row)| {
                let (left, right) = row.split_at(LEFT_COLUMNS);
                SeatRow {
                    number: i + 1,
                    left,
                    right,
                }
            })
    }

    /// Count seats by status.
    #[must_use]
    pub fn counts(&self) -> SeatCounts {
        self.seats.iter().fold(SeatCounts::default(), |mut acc, seat| {
            match seat.status {
                SeatStatus::Empty => acc.empty += 1,
                SeatStatus::Selected => acc.selected += 1,
                SeatStatus::Booked => acc.booked += 1,
            }
            acc
        })
    }

    /// Handle a tap on seat `id`.
    pub fn select_seat(&mut self, id: &str) -> SelectOutcome {
        let Some(index) = self.seats.iter().position(|seat| seat.id == id) else {
            return SelectOutcome::Ignored;
        };

        match self.seats[index].status {
            SeatStatus::Booked => SelectOutcome::Blocked(id.to_string()),
            SeatStatus::Selected => {
                self.seats[index].status = SeatStatus::Empty;
                self.selection = None;
                debug!(seat = id, "Seat deselected");
                SelectOutcome::Deselected(id.to_string())
            }
            SeatStatus::Empty => {
                if let Some(held) = &self.selection {
                    warn!(held = %held, requested = id, "{}", SINGLE_SEAT_WARNING);
                    return SelectOutcome::Rejected {
                        held: held.clone(),
                        requested: id.to_string(),
                    };
                }
                self.seats[index].status = SeatStatus::Selected;
                self.selection = Some(id.to_string());
                debug!(seat = id, "Seat selected");
                SelectOutcome::Selected(id.to_string())
            }
        }
    }

    /// Book the held seat.
    ///
    /// Writes the seat id to the store, marks the seat booked, clears the
    /// selection and sends the navigator back, in that order.
    ///
    /// # Errors
    ///
    /// Only with [`PersistFailurePolicy::RollBack`]: returns
    /// [`SeatError::Persist`] when the store write fails. The seat stays
    /// selected and the navigator is not called.
    pub fn confirm_selection<N: Navigator + ?Sized>(
        &mut self,
        navigator: &mut N,
    ) -> SeatResult<ConfirmOutcome> {
        let Some(seat_id) = self.selection.clone() else {
            return Ok(ConfirmOutcome::NothingSelected);
        };

        let persist_error = match self.store.set(BOOKED_SEAT_KEY, &seat_id) {
            Ok(()) => None,
            Err(source) => match self.policy {
                PersistFailurePolicy::LogAndContinue => {
                    error!(seat = %seat_id, error = %source, "Error saving seat");
                    Some(source.to_string())
                }
                PersistFailurePolicy::RollBack => {
                    error!(seat = %seat_id, error = %source, "Error saving seat, keeping selection");
                    return Err(SeatError::Persist { seat_id, source });
                }
            },
        };

        if let Some(seat) = self.seats.iter_mut().find(|seat| seat.id == seat_id) {
            seat.status = SeatStatus::Booked;
        }
        self.selection = None;
        navigator.go_back();

        info!(seat = %seat_id, persisted = persist_error.is_none(), "Seat booked");
        Ok(match persist_error {
            None => ConfirmOutcome::Booked(seat_id),
            Some(error) => ConfirmOutcome::BookedUnpersisted { seat_id, error },
        })
    }
}

impl<S> fmt::Debug for SeatController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeatController")
            .field("selection", &self.selection)
            .field("policy", &self.policy)
            .field("seats", &self.seats.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{booked_seat, MemoryStore};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn controller(booked: &[&str]) -> SeatController<MemoryStore> {
        SeatController::with_booked(booked.iter().copied(), MemoryStore::new())
    }

    fn statuses(c: &SeatController<MemoryStore>) -> Vec<SeatStatus> {
        c.seats().iter().map(|s| s.status).collect()
    }

    #[test]
    fn test_layout_ids_and_positions() {
        let c = controller(&[]);
        assert_eq!(c.seats().len(), SEAT_COUNT);
        assert_eq!(c.seats()[0].id, "1A");
        assert_eq!(c.seats()[4].id, "1E");
        assert_eq!(c.seats()[5].id, "2A");
        assert_eq!(c.seats()[49].id, "10E");

        assert_eq!(c.seat("3B").unwrap().position, SeatPosition::Left);
        assert_eq!(c.seat("3C").unwrap().position, SeatPosition::Right);
        assert_eq!(c.seat("10E").unwrap().position, SeatPosition::Right);

        let ids: BTreeSet<&str> = c.seats().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), SEAT_COUNT);
    }

    #[test]
    fn test_rows_split_by_aisle() {
        let c = controller(&[]);
        let rows: Vec<_> = c.rows().collect();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[2].number, 3);
        assert_eq!(rows[2].left.len(), 2);
        assert_eq!(rows[2].right.len(), 3);
        assert_eq!(rows[2].left[1].id, "3B");
        assert_eq!(rows[2].right[0].id, "3C");
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = SeatController::generate(&mut StdRng::seed_from_u64(7), 0.4, MemoryStore::new())
            .unwrap();
        let b = SeatController::generate(&mut StdRng::seed_from_u64(7), 0.4, MemoryStore::new())
            .unwrap();
        assert_eq!(statuses(&a), statuses(&b));
        assert_eq!(a.counts().selected, 0);
    }

    #[test]
    fn test_generate_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let none = SeatController::generate(&mut rng, 0.0, MemoryStore::new()).unwrap();
        assert_eq!(none.counts().booked, 0);

        let all = SeatController::generate(&mut rng, 1.0, MemoryStore::new()).unwrap();
        assert_eq!(all.counts().booked, SEAT_COUNT);
    }

    #[test]
    fn test_from_config_applies_policy() {
        let config = SeatsConfig {
            booked_probability: 0.0,
            persist_failure: PersistFailurePolicy::RollBack,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let c = SeatController::from_config(&mut rng, &config, MemoryStore::new()).unwrap();
        assert_eq!(c.policy(), PersistFailurePolicy::RollBack);
        assert_eq!(c.counts().empty, SEAT_COUNT);
    }

    #[test]
    fn test_generate_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = SeatController::generate(&mut rng, 1.5, MemoryStore::new()).unwrap_err();
        assert!(matches!(err, SeatError::InvalidProbability(_)));
    }

    #[test]
    fn test_select_then_confirm_books_seat() {
        let mut c = controller(&["5A"]);
        let mut nav = RecordingNavigator::default();
        assert_eq!(c.seat("3B").unwrap().status, SeatStatus::Empty);
        assert!(!c.can_confirm());

        assert_eq!(c.select_seat("3B"), SelectOutcome::Selected("3B".into()));
        assert_eq!(c.seat("3B").unwrap().status, SeatStatus::Selected);
        assert!(c.can_confirm());

        let outcome = c.confirm_selection(&mut nav).unwrap();
        assert_eq!(outcome, ConfirmOutcome::Booked("3B".into()));
        assert_eq!(outcome.message().unwrap(), "Successfully booked seat 3B");
        assert_eq!(booked_seat(c.store()).unwrap().as_deref(), Some("3B"));
        assert_eq!(c.seat("3B").unwrap().status, SeatStatus::Booked);
        assert!(c.selected().is_none());
        assert_eq!(nav.back_calls, 1);
    }

    #[test]
    fn test_booked_seat_is_blocked() {
        let mut c = controller(&["5A"]);
        let before = statuses(&c);
        assert_eq!(c.select_seat("5A"), SelectOutcome::Blocked("5A".into()));
        assert_eq!(statuses(&c), before);
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_second_selection_is_rejected_with_warning() {
        let mut c = controller(&[]);
        c.select_seat("1A");
        let outcome = c.select_seat("2B");
        assert_eq!(
            outcome,
            SelectOutcome::Rejected {
                held: "1A".into(),
                requested: "2B".into()
            }
        );
        assert_eq!(outcome.warning(), Some(SINGLE_SEAT_WARNING));
        assert!(!outcome.changed());
        assert_eq!(c.seat("1A").unwrap().status, SeatStatus::Selected);
        assert_eq!(c.seat("2B").unwrap().status, SeatStatus::Empty);
        assert_eq!(c.selected(), Some("1A"));
    }

    #[test]
    fn test_deselect_allows_new_selection() {
        let mut c = controller(&[]);
        c.select_seat("1A");
        assert_eq!(c.select_seat("1A"), SelectOutcome::Deselected("1A".into()));
        assert_eq!(c.seat("1A").unwrap().status, SeatStatus::Empty);
        assert_eq!(c.select_seat("2B"), SelectOutcome::Selected("2B".into()));
    }

    #[test]
    fn test_unknown_seat_is_ignored() {
        let mut c = controller(&[]);
        let before = statuses(&c);
        assert_eq!(c.select_seat("11A"), SelectOutcome::Ignored);
        assert_eq!(c.select_seat(""), SelectOutcome::Ignored);
        assert_eq!(statuses(&c), before);
    }

    #[test]
    fn test_confirm_without_selection_is_noop() {
        let mut c = controller(&[]);
        let mut nav = RecordingNavigator::default();
        let outcome = c.confirm_selection(&mut nav).unwrap();
        assert_eq!(outcome, ConfirmOutcome::NothingSelected);
        assert!(outcome.message().is_none());
        assert!(c.store().is_empty());
        assert_eq!(nav.back_calls, 0);
    }

    #[test]
    fn test_confirmed_seat_cannot_be_reselected() {
        let mut c = controller(&[]);
        let mut nav = RecordingNavigator::default();
        c.select_seat("4D");
        c.confirm_selection(&mut nav).unwrap();
        assert_eq!(c.select_seat("4D"), SelectOutcome::Blocked("4D".into()));
        assert_eq!(c.seat("4D").unwrap().status, SeatStatus::Booked);
    }

    #[test]
    fn test_persist_failure_log_and_continue_books_anyway() {
        let mut c = controller(&[]);
        let mut nav = RecordingNavigator::default();
        c.store_mut().fail_writes(true);
        c.select_seat("3B");

        let outcome = c.confirm_selection(&mut nav).unwrap();
        assert!(matches!(
            &outcome,
            ConfirmOutcome::BookedUnpersisted { seat_id, .. } if seat_id == "3B"
        ));
        assert_eq!(outcome.seat_id(), Some("3B"));
        assert_eq!(c.seat("3B").unwrap().status, SeatStatus::Booked);
        assert!(c.selected().is_none());
        assert!(booked_seat(c.store()).unwrap().is_none());
        assert_eq!(nav.back_calls, 1);
    }

    #[test]
    fn test_persist_failure_roll_back_keeps_selection() {
        let mut c = controller(&[]).with_policy(PersistFailurePolicy::RollBack);
        let mut nav = RecordingNavigator::default();
        c.store_mut().fail_writes(true);
        c.select_seat("3B");

        let err = c.confirm_selection(&mut nav).unwrap_err();
        assert!(matches!(err, SeatError::Persist { ref seat_id, .. } if seat_id == "3B"));
        assert_eq!(c.seat("3B").unwrap().status, SeatStatus::Selected);
        assert_eq!(c.selected(), Some("3B"));
        assert_eq!(nav.back_calls, 0);

        // Retry once the store recovers.
        c.store_mut().fail_writes(false);
        let outcome = c.confirm_selection(&mut nav).unwrap();
        assert_eq!(outcome, ConfirmOutcome::Booked("3B".into()));
        assert_eq!(nav.back_calls, 1);
    }

    fn seat_id_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            9 => (0..SEAT_COUNT).prop_map(seat_label),
            1 => Just("99Z".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn prop_at_most_one_selected(
            seed in any::<u64>(),
            taps in proptest::collection::vec(seat_id_strategy(), 0..60),
        ) {
            let mut c = SeatController::generate(
                &mut StdRng::seed_from_u64(seed),
                DEFAULT_BOOKED_PROBABILITY,
                MemoryStore::new(),
            ).unwrap();
            let booked_before: Vec<bool> =
                c.seats().iter().map(|s| s.status == SeatStatus::Booked).collect();

            for id in &taps {
                c.select_seat(id);
                let counts = c.counts();
                prop_assert!(counts.selected <= 1);
                prop_assert_eq!(counts.selected == 1, c.selected().is_some());
            }

            let booked_after: Vec<bool> =
                c.seats().iter().map(|s| s.status == SeatStatus::Booked).collect();
            prop_assert_eq!(booked_before, booked_after);
        }

        #[test]
        fn prop_double_tap_restores_empty(index in 0..SEAT_COUNT) {
            let mut c = controller(&[]);
            let id = seat_label(index);
            c.select_seat(&id);
            c.select_seat(&id);
            prop_assert_eq!(c.seat(&id).unwrap().status, SeatStatus::Empty);
            prop_assert!(c.selected().is_none());
        }
    }
}
