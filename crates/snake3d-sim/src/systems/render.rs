//! Render submission: describes the current world to a `RenderSink`.
//!
//! Draw order: board slab, snake parts head first, the neck, apples.
//! Positions are narrowed to f32 here; the simulation itself stays in f64.

use glam::{DVec3, Vec3};

use snake3d_core::config::GameConfig;
use snake3d_core::constants::{APPLE_COLOR, BOARD_COLOR, SNAKE_COLOR};
use snake3d_core::render::{Camera, DrawRequest, RenderSink};

use crate::store::EntityStore;

/// Distance, in cells, the neck cube sits ahead of the first body segment.
const NECK_OFFSET: f64 = 0.1;

/// Queue every box for the current frame without presenting.
pub fn submit(store: &EntityStore, config: &GameConfig, sink: &mut impl RenderSink) {
    let cell = config.cell_size as f32;

    sink.submit(DrawRequest {
        position: Vec3::new(0.0, (config.board_level - config.cell_size) as f32, 0.0),
        scale: Vec3::new(
            2.0 * config.board_half_width as f32,
            cell,
            2.0 * config.board_half_height as f32,
        ),
        color: Vec3::from_array(BOARD_COLOR),
    });

    if let Some(snake) = store.snake() {
        let color = Vec3::from_array(SNAKE_COLOR);
        for part in snake.parts() {
            sink.submit(DrawRequest::cube(to_render(*part), cell, color));
        }
        // Bridges the gap between the moving head and the snapped first segment.
        let neck = snake.parts()[1] + snake.heading.vector() * NECK_OFFSET * config.cell_size;
        sink.submit(DrawRequest::cube(to_render(neck), cell, color));
    }

    let color = Vec3::from_array(APPLE_COLOR);
    for (_, apple) in store.apples() {
        sink.submit(DrawRequest::cube(to_render(apple.position), cell, color));
    }
}

/// Queue the frame and present it through the fixed camera.
pub fn run(store: &EntityStore, config: &GameConfig, sink: &mut impl RenderSink) {
    submit(store, config, sink);
    let camera = Camera::from_config(config);
    sink.present(&camera.view(), &camera.projection());
}

fn to_render(position: DVec3) -> Vec3 {
    position.as_vec3()
}

#[cfg(test)]
mod tests {
    use snake3d_core::components::{Apple, Snake};
    use snake3d_core::enums::Heading;
    use snake3d_core::render::RecordingSink;

    use super::*;

    #[test]
    fn draws_board_parts_and_apples() {
        let config = GameConfig::default();
        let mut store = EntityStore::new();
        store.insert_snake(
            Snake::new(
                vec![DVec3::ZERO, DVec3::Z, DVec3::new(0.0, 0.0, 2.0)],
                Heading::Top,
                1.0,
            )
            .unwrap(),
        );
        store.spawn_apple(Apple {
            position: DVec3::new(2.0, 0.0, -1.0),
        });

        let mut sink = RecordingSink::new();
        run(&store, &config, &mut sink);

        let frame = sink.last_frame().unwrap();
        assert_eq!(frame.draws.len(), 1 + 3 + 1 + 1);
        assert!(sink.pending().is_empty());

        let board = frame.draws[0];
        assert_eq!(board.position, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(board.scale, Vec3::new(10.0, 1.0, 10.0));

        assert_eq!(frame.draws[1].position, Vec3::ZERO);
        assert_eq!(frame.draws[1].color, Vec3::from_array(SNAKE_COLOR));
        let neck = frame.draws[4];
        assert!(neck.position.abs_diff_eq(Vec3::new(0.0, 0.0, 0.9), 1e-6));
        assert_eq!(neck.color, Vec3::from_array(SNAKE_COLOR));

        assert_eq!(frame.draws[5].position, Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(frame.draws[5].color, Vec3::from_array(APPLE_COLOR));

        let camera = Camera::from_config(&config);
        assert_eq!(frame.view, camera.view());
        assert_eq!(frame.projection, camera.projection());
    }

    #[test]
    fn empty_store_still_draws_board() {
        let mut sink = RecordingSink::new();
        submit(&EntityStore::new(), &GameConfig::default(), &mut sink);
        assert_eq!(sink.pending().len(), 1);
    }
}
