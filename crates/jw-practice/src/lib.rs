//! Lesson practice flow for JapWord
//!
//! This crate provides the flashcard walk-through used when a learner
//! practices the vocabulary of one lesson: a 1-based pager over the word
//! list, a session that shows one card at a time with previous/next
//! navigation, and the completion step that celebrates and sends the
//! learner back to the lesson list.
//!
//! Everything here is pure and synchronous. Callers fetch the words and
//! own the session.

mod pager;
mod session;

pub use pager::{PageOutOfRange, Pager};
pub use session::{
    COMPLETION_CELEBRATION, COMPLETION_REDIRECT, Completion, Controls, FlashcardSession,
    NotOnLastCard,
};
