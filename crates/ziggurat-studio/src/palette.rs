use ziggurat_life::CellPalette;

/// Live-cell colour drifting with time; dead cells keep `dead`.
///
/// Each channel follows its own period so the hue never settles.
pub fn cycling(elapsed: f32, dead: [f32; 4]) -> CellPalette {
    let wave = |v: f32| 0.5 + 0.5 * v;
    CellPalette {
        live: [
            wave((elapsed / 0.5).cos()),
            wave((elapsed / 1.25).sin()),
            wave(elapsed.sin()),
            1.0,
        ],
        dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAD: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn starts_from_a_known_colour() {
        let p = cycling(0.0, DEAD);
        assert_eq!(p.live, [1.0, 0.5, 0.5, 1.0]);
        assert_eq!(p.dead, DEAD);
    }

    #[test]
    fn channels_stay_in_unit_range() {
        for i in 0..1000 {
            let p = cycling(i as f32 * 0.037, DEAD);
            assert!(p.live.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", p.live);
            assert_eq!(p.live[3], 1.0);
        }
    }

    #[test]
    fn colour_changes_over_time() {
        assert_ne!(cycling(0.0, DEAD).live, cycling(0.4, DEAD).live);
    }
}
