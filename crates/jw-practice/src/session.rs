use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::pager::{PageOutOfRange, Pager};

/// How long the completion celebration plays before navigating away
pub const COMPLETION_CELEBRATION: Duration = Duration::from_secs(5);

/// Where the learner is sent once a lesson is completed
pub const COMPLETION_REDIRECT: &str = "/user/lessons";

/// Completing is only possible from the last card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lesson can only be completed from the last card")]
pub struct NotOnLastCard;

/// Which navigation controls are available for the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub previous_enabled: bool,
    pub next_visible: bool,
    pub complete_visible: bool,
}

/// Result of finishing a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    #[serde(rename = "delayMs", serialize_with = "serialize_millis")]
    pub celebration: Duration,
    pub redirect_to: &'static str,
}

impl Default for Completion {
    fn default() -> Self {
        Self {
            celebration: COMPLETION_CELEBRATION,
            redirect_to: COMPLETION_REDIRECT,
        }
    }
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// One-card-at-a-time walk through a lesson's words.
///
/// The session owns its cards and a pager with one item per page, so
/// [`FlashcardSession::current`] can never index outside the list.
#[derive(Debug, Clone)]
pub struct FlashcardSession<T> {
    cards: Vec<T>,
    pager: Pager,
}

impl<T> FlashcardSession<T> {
    pub fn new(cards: Vec<T>) -> Self {
        let pager = Pager::new(cards.len(), 1);
        Self { cards, pager }
    }

    /// Start the session on a given 1-based card position
    pub fn starting_at(cards: Vec<T>, position: usize) -> Result<Self, PageOutOfRange> {
        let mut session = Self::new(cards);
        session.pager.set_current_page(position)?;
        Ok(session)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// 1-based position of the visible card
    pub const fn position(&self) -> Option<usize> {
        self.pager.current_page()
    }

    pub fn current(&self) -> Option<&T> {
        let range = self.pager.item_range()?;
        self.cards.get(range.start)
    }

    /// Advance to the next card. Returns `false` when already on the last one.
    pub fn next_card(&mut self) -> bool {
        self.move_to(self.pager.next_page())
    }

    /// Go back one card. Returns `false` when already on the first one.
    pub fn previous_card(&mut self) -> bool {
        self.move_to(self.pager.previous_page())
    }

    fn move_to(&mut self, page: Option<usize>) -> bool {
        page.is_some_and(|page| self.pager.set_current_page(page).is_ok())
    }

    pub fn is_on_last_card(&self) -> bool {
        self.position().is_some() && self.pager.next_page().is_none()
    }

    pub fn controls(&self) -> Controls {
        Controls {
            previous_enabled: self.pager.previous_page().is_some(),
            next_visible: self.pager.next_page().is_some(),
            complete_visible: self.is_on_last_card(),
        }
    }

    /// Finish the lesson from its last card
    pub fn complete(&self) -> Result<Completion, NotOnLastCard> {
        if self.is_on_last_card() {
            Ok(Completion::default())
        } else {
            Err(NotOnLastCard)
        }
    }
}
