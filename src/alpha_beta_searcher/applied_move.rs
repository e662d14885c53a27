//! Scoped move application.

use std::ops::{Deref, DerefMut};

use super::GameMove;

/// A move that has been applied to a borrowed state and is undone when the
/// guard is dropped. Every exit from a search frame, including a pruning
/// `break`, drops the guard and so restores the state.
pub struct AppliedMove<'a, M: GameMove> {
    state: &'a mut M::State,
    game_move: &'a M,
    undo: Option<M::Undo>,
}

impl<'a, M: GameMove> AppliedMove<'a, M> {
    pub fn new(state: &'a mut M::State, game_move: &'a M) -> Self {
        let undo = game_move.apply(state);
        Self {
            state,
            game_move,
            undo: Some(undo),
        }
    }

    pub fn game_move(&self) -> &M {
        self.game_move
    }
}

impl<M: GameMove> Deref for AppliedMove<'_, M> {
    type Target = M::State;

    fn deref(&self) -> &Self::Target {
        &*self.state
    }
}

impl<M: GameMove> DerefMut for AppliedMove<'_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.state
    }
}

impl<M: GameMove> Drop for AppliedMove<'_, M> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.game_move.undo(&mut *self.state, undo);
        }
    }
}
