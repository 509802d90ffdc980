// engine/tests/animator_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the grid animator core.
 *
 * Purpose:
 * - Provide fuzz-like coverage using generated seeds and frame schedules.
 * - Lock core invariants that must hold regardless of timing or RNG draws.
 *
 * Invariants covered:
 * - The quadrant rotation applied 4 times is the identity for every template.
 * - `can_place` enforces X walls, the floor, and occupancy; permits y < 0.
 * - Locked-cell count is monotonically non-decreasing (rows are never cleared).
 * - Snapshots never contain an out-of-bounds cell or invalid color index.
 * - Spawn resolution terminates against a fully saturated grid.
 */
use proptest::prelude::*;

use blockfall_engine::engine::{
    can_place, occupied_cells, rotate_cell, rotated_cells, Animator, FreeFallField, Grid, Kind,
    SceneSnapshot, ShapeStream, H, MAX_ROTS, W,
};

#[test]
fn rotation_four_times_is_identity_for_all_kinds() {
    for &kind in Kind::all() {
        let base = rotated_cells(kind, 0);
        for &(x0, y0) in &base {
            let mut x = x0;
            let mut y = y0;
            for _ in 0..4 {
                let (nx, ny) = rotate_cell(1, x, y);
                x = nx;
                y = ny;
            }
            assert_eq!((x, y), (x0, y0), "kind {:?} cell ({},{})", kind, x0, y0);
        }

        // Each quadrant keeps the cell count.
        for rot in 0..MAX_ROTS {
            assert_eq!(rotated_cells(kind, rot).len(), 4);
        }
    }
}

#[test]
fn can_place_enforces_walls_floor_and_occupancy() {
    let mut grid: Grid = [[0u8; W]; H];

    // Inside the walls on an empty grid.
    assert!(can_place(&grid, Kind::O, 0, 5, 0));
    // Above the visible top is allowed.
    assert!(can_place(&grid, Kind::O, 0, 5, -2));

    // X walls.
    assert!(!can_place(&grid, Kind::O, 0, -1, 0));
    assert!(!can_place(&grid, Kind::I, 0, (W - 3) as i32, 0));

    // Floor: any cell at y >= H is rejected.
    assert!(!can_place(&grid, Kind::O, 0, 5, (H - 1) as i32));

    // Occupancy.
    grid[1][6] = 3;
    assert!(!can_place(&grid, Kind::O, 0, 5, 0));
    assert!(can_place(&grid, Kind::O, 0, 2, 0));
}

#[test]
fn spawn_against_saturated_grid_terminates_via_escape_hatch() {
    let grid: Grid = [[1u8; W]; H];
    let mut stream = ShapeStream::new(99);

    for _ in 0..50 {
        let a = stream.resolve_spawn(&grid);
        // Terminal fallback keeps the original top-row draw, unvalidated.
        assert_eq!(a.y, 0);
        assert!((1..=7).contains(&a.kind.idx()));
        assert!(a.rot < MAX_ROTS);
    }
}

proptest! {
    #[test]
    fn generated_playback_respects_core_invariants(
        seed in any::<u64>(),
        frames in 1usize..600,
        fps in 20u32..120,
    ) {
        let mut animator = Animator::new(seed);
        let mut field = FreeFallField::new(seed ^ 0xF1E1D, 8);
        let dt = 1.0 / fps as f64;

        let mut prev_occupied = 0u32;

        for frame in 0..frames {
            let r = animator.advance(frame as f64 * dt);
            field.advance();

            // A lock leaves the animator shapeless; spawn happens next frame.
            prop_assert!(!(r.spawned && r.locked));
            prop_assert!(animator.spawns >= animator.locks);
            prop_assert!(animator.spawns - animator.locks <= 1);

            // Rows are never cleared.
            let occ = occupied_cells(&animator.grid);
            prop_assert!(occ >= prev_occupied);
            prev_occupied = occ;

            for row in &animator.grid {
                for &v in row {
                    prop_assert!(v <= 7);
                }
            }

            let snap = SceneSnapshot::capture(&animator, &field);
            prop_assert!(snap.active_cells.len() <= 4);
            for cell in snap.grid_cells.iter().chain(snap.active_cells.iter()) {
                prop_assert!(cell.x >= 0 && cell.x < W as i32);
                prop_assert!(cell.y >= 0 && cell.y < H as i32);
                prop_assert!(cell.color_index < 7);
            }
            for p in &snap.particles {
                prop_assert!(p.color_index < 7);
                prop_assert!(p.scale >= 0.5 && p.scale <= 1.0);
            }
        }
    }
}
