use ziggurat_life::{CpuGrid, GridDims, LifeConfig, LifeEngine, Parity};

fn engine(width: u32, height: u32, frames_per_step: u32, paused: bool) -> LifeEngine<CpuGrid> {
    let config = LifeConfig {
        width,
        height,
        tile_size: 16,
        frames_per_step,
        paused,
        ..LifeConfig::default()
    };
    let dims = GridDims::new(config.width, config.height, config.tile_size).unwrap();
    LifeEngine::new(CpuGrid::recording(dims), &config)
}

fn live(cells: &[u8]) -> usize {
    cells.iter().filter(|&&c| c != 0).count()
}

// ── scenarios ─────────────────────────────────────────────────────────────

#[test]
fn single_activation_is_visible_to_first_commit() {
    let mut e = engine(64, 64, 1, false);
    e.request_activate(5, 5);

    let report = e.run_frame(&mut ()).unwrap();
    assert!(report.committed);
    assert_eq!(e.backend().dispatches().len(), 1);

    let seen = &e.backend().dispatches()[0].source;
    assert_eq!(live(seen), 1);
    assert_eq!(seen[e.dims().index(5, 5)], 1);
}

#[test]
fn clear_discards_same_batch_activation() {
    let mut e = engine(64, 64, 1, true);
    e.request_activate(3, 3);
    e.request_clear();
    e.run_frame(&mut ()).unwrap();
    assert_eq!(live(e.backend().cells(e.active())), 0);
}

#[test]
fn rounded_grid_is_used_end_to_end() {
    let e = engine(70, 70, 1, false);
    assert_eq!((e.dims().width(), e.dims().height()), (64, 64));

    let e = engine(8, 8, 1, false);
    assert_eq!((e.dims().width(), e.dims().height()), (16, 16));
}

// ── cadence ───────────────────────────────────────────────────────────────

#[test]
fn commits_exactly_every_nth_frame() {
    let mut e = engine(16, 16, 3, false);
    let commits: Vec<bool> = (0..12).map(|_| e.run_frame(&mut ()).unwrap().committed).collect();
    let expected: Vec<bool> = (1..=12).map(|f| f % 3 == 0).collect();
    assert_eq!(commits, expected);
    assert!(e.cadence().frames_since_step() < 3);
}

#[test]
fn paused_engine_never_advances() {
    let mut e = engine(16, 16, 0, true);
    // Blinker: would change every generation if committed.
    for x in 4..7 {
        e.request_activate(x, 5);
    }
    e.run_frame(&mut ()).unwrap();
    let before = e.backend().cells(Parity::Even).to_vec();

    for _ in 0..50 {
        let r = e.run_frame(&mut ()).unwrap();
        assert!(!r.committed);
        assert_eq!(r.active, Parity::Even);
    }
    assert_eq!(e.backend().cells(Parity::Even), &before[..]);
    assert_eq!(e.backend().dispatches().len(), 51);
    assert!(e.backend().dispatches().iter().all(|d| !d.write_enable));
}

#[test]
fn active_index_strictly_alternates() {
    let mut e = engine(16, 16, 2, false);
    let mut committed = Vec::new();
    for _ in 0..20 {
        let r = e.run_frame(&mut ()).unwrap();
        if r.committed {
            committed.push(r.active.index());
        }
    }
    assert_eq!(committed.len(), 10);
    for pair in committed.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn resume_continues_from_frozen_counter() {
    let mut e = engine(16, 16, 4, false);
    e.run_frame(&mut ()).unwrap();
    e.run_frame(&mut ()).unwrap();
    e.set_paused(true);
    for _ in 0..7 {
        e.run_frame(&mut ()).unwrap();
    }
    e.set_paused(false);
    assert!(!e.run_frame(&mut ()).unwrap().committed);
    assert!(e.run_frame(&mut ()).unwrap().committed);
}

// ── simulation ────────────────────────────────────────────────────────────

#[test]
fn blinker_oscillates_across_commits() {
    let mut e = engine(16, 16, 0, false);
    for x in 4..7 {
        e.request_activate(x, 5);
    }

    e.run_frame(&mut ()).unwrap();
    let vertical = e.backend().cells(e.active()).to_vec();
    let d = e.dims();
    assert_eq!(live(&vertical), 3);
    assert!((4..7).all(|y| vertical[d.index(5, y)] == 1));

    e.run_frame(&mut ()).unwrap();
    let horizontal = e.backend().cells(e.active()).to_vec();
    assert!((4..7).all(|x| horizontal[d.index(x, 5)] == 1));
}

#[test]
fn edits_between_commits_land_in_current_generation() {
    let mut e = engine(16, 16, 2, false);
    // Block still life.
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        e.request_activate(x, y);
    }
    e.run_frame(&mut ()).unwrap(); // edits, no commit
    e.run_frame(&mut ()).unwrap(); // commit
    assert_eq!(live(e.backend().cells(e.active())), 4);

    e.request_deactivate(2, 2);
    e.request_deactivate(2, 2);
    let r = e.run_frame(&mut ()).unwrap();
    assert!(r.edits_applied && !r.committed);
    assert_eq!(live(e.backend().cells(e.active())), 3);
    assert_eq!(live(e.backend().output()), 3);
}

#[test]
fn clear_then_commit_does_not_resurrect_cells() {
    let mut e = engine(16, 16, 0, false);
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        e.request_activate(x, y);
    }
    e.run_frame(&mut ()).unwrap();
    e.run_frame(&mut ()).unwrap();
    assert!(live(e.backend().cells(e.active().other())) > 0);

    e.request_clear();
    e.run_frame(&mut ()).unwrap();
    assert_eq!(live(e.backend().cells(e.active())), 0);
    e.run_frame(&mut ()).unwrap();
    assert_eq!(live(e.backend().cells(e.active())), 0);
}

#[test]
fn independent_engines_do_not_interfere() {
    let mut a = engine(16, 16, 1, false);
    let mut b = engine(16, 16, 1, true);
    a.request_activate(1, 1);
    a.run_frame(&mut ()).unwrap();
    b.run_frame(&mut ()).unwrap();
    assert_eq!(a.active(), Parity::Odd);
    assert_eq!(b.active(), Parity::Even);
    assert_eq!(live(b.backend().dispatches()[0].source.as_slice()), 0);
}

#[test]
fn teardown_returns_backend() {
    let mut e = engine(16, 16, 1, true);
    e.request_activate(0, 0);
    e.run_frame(&mut ()).unwrap();
    let grid = e.teardown();
    assert_eq!(live(grid.cells(Parity::Even)), 1);
}
