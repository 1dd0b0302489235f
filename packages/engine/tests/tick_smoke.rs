use snowdrift_engine::{DisplayGeometry, DisplayShape, SnowCore, SnowRng, SnowSettings, SnowWorld};

#[test]
fn every_preset_ticks_within_bounds() {
    for shape in [DisplayShape::Rect, DisplayShape::RectSparse, DisplayShape::Round] {
        let geometry = shape.geometry();
        let mut core = SnowCore::new(geometry, SnowRng::from_seed_u64(17));
        core.enable_perf_metrics(true);

        for t in 0..500 {
            core.tick_with_sensor(&mut Some((t % 9 - 4) * 250));
        }

        assert_eq!(core.flakes().len(), geometry.flake_count());
        assert_eq!(core.heights().len(), geometry.width() as usize);
        assert!(core.heights().iter().all(|&h| h <= geometry.height()));
        assert!(core
            .flakes()
            .iter()
            .all(|f| f.x >= 0 && f.x < geometry.width() as i32));
        assert!(core.stats().step_ms() >= 0.0);
    }
}

#[test]
fn snow_accumulates_on_a_fresh_field() {
    let mut core = SnowCore::new(DisplayGeometry::RECT, SnowRng::from_seed_u64(1));
    for _ in 0..300 {
        core.tick(0);
    }
    let piled: u32 = core
        .heights()
        .iter()
        .map(|&h| (core.height() - h) as u32)
        .sum();
    assert!(piled > 0);
}

#[test]
fn settings_pick_the_display_and_seed() {
    let settings = SnowSettings::from_json(r#"{"display":"round","seed":5}"#).unwrap();
    let mut a = SnowCore::from_settings(&settings);
    let mut b = SnowCore::from_settings(&settings);
    assert_eq!(a.width(), 180);
    assert_eq!(a.flakes().len(), 250);

    for _ in 0..100 {
        a.tick(1);
        b.tick(1);
    }
    assert_eq!(a.heights(), b.heights());
}

#[test]
fn world_facade_smoke() {
    let mut world = SnowWorld::with_seed(3);
    world.enable_perf_metrics(true);
    for _ in 0..20 {
        world.tick(None);
    }
    world.tick(Some(-1000));
    assert_eq!(world.get_tick_stats().wind_bias(), -4);
    assert_eq!(world.tick_count(), 21);

    world.reset();
    assert_eq!(world.reset_count(), 1);
    assert!((0..world.width() as i32).all(|x| world.height_at(x) == world.height()));
    assert_eq!(world.heights_len(), world.width() as usize);
}
