//! Snapshot builder: captures the visible state after a frame.

use snake3d_core::enums::{GamePhase, Heading};
use snake3d_core::events::GameEvent;
use snake3d_core::state::{AppleView, FrameSnapshot};
use snake3d_core::types::SimTime;

use crate::store::EntityStore;

pub fn build_snapshot(
    store: &EntityStore,
    time: SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let (heading, parts) = match store.snake() {
        Some(snake) => (snake.heading, snake.parts().to_vec()),
        None => (Heading::default(), Vec::new()),
    };

    let apples = store
        .apples()
        .map(|(id, apple)| AppleView {
            id,
            position: apple.position,
        })
        .collect();

    FrameSnapshot {
        time,
        phase,
        heading,
        length: parts.len(),
        parts,
        apples,
        events,
    }
}
