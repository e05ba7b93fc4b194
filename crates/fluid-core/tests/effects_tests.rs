// Generator determinism for the spell pair and spin emitters.

use fluid_core::{base_radius, normalize_color, Emitter, SpellPairConfig, SpinConfig};
use glam::Vec2;
use std::f32::consts::PI;

fn canvas() -> Vec2 {
    Vec2::new(800.0, 600.0)
}

fn emitter(x_offset: f32) -> Emitter {
    Emitter {
        color_rgb: [214.0, 61.0, 47.0],
        radius: 0.2,
        strength: 10.0,
        x_offset,
        y_offset: 0.0,
    }
}

#[test]
fn base_radius_uses_min_dimension() {
    assert_eq!(base_radius(canvas()), 6000.0);
    assert_eq!(base_radius(Vec2::new(600.0, 800.0)), 6000.0);
}

#[test]
fn spell_pair_emits_opposed_horizontal_forces() {
    let config = SpellPairConfig {
        left: emitter(-0.9),
        right: emitter(0.9),
    };
    let [left, right] = config.splats(canvas());

    assert_eq!(left.velocity, Vec2::new(100.0, 0.0));
    assert_eq!(right.velocity, Vec2::new(-100.0, 0.0));
    assert_eq!(left.radius, 0.2 * 6000.0);
    assert_eq!(right.radius, 0.2 * 6000.0);
}

#[test]
fn spell_pair_anchors_relative_to_center() {
    let config = SpellPairConfig {
        left: emitter(-0.9),
        right: emitter(0.9),
    };
    let [left, right] = config.splats(canvas());

    assert_eq!(left.position, Vec2::new(40.0, 300.0));
    assert_eq!(right.position, Vec2::new(760.0, 300.0));
}

#[test]
fn spell_pair_normalizes_gui_colors() {
    let [left, _] = SpellPairConfig::default().splats(canvas());
    for c in left.color {
        assert!((0.0..=1.0).contains(&c), "component {c} out of range");
    }
    assert!((left.color[0] - 214.0 / 255.0).abs() < 1e-6);
}

#[test]
fn spin_at_time_zero_points_along_x() {
    let config = SpinConfig {
        emitter: Emitter {
            strength: 5.0,
            ..SpinConfig::default().emitter
        },
        rate: 1.0,
        phase: 0.0,
    };
    let splat = config.splat(canvas(), 0.0);

    assert!((splat.velocity.x - 50.0).abs() < 1e-4);
    assert!(splat.velocity.y.abs() < 1e-4);
}

#[test]
fn spin_velocity_revolves_with_time() {
    let config = SpinConfig {
        rate: PI,
        ..SpinConfig::default()
    };
    let splat = config.splat(canvas(), 0.5);

    // A quarter turn in: the force points straight up.
    assert!(splat.velocity.x.abs() < 1e-3);
    assert!((splat.velocity.y - 100.0).abs() < 1e-3);
}

#[test]
fn spin_phase_offsets_the_angle() {
    let config = SpinConfig {
        rate: 0.0,
        phase: PI,
        ..SpinConfig::default()
    };
    for t in [0.0, 1.0, 42.0] {
        let splat = config.splat(canvas(), t);
        assert!((splat.velocity.x + 100.0).abs() < 1e-3, "at t={t}");
        assert!(splat.velocity.y.abs() < 1e-3, "at t={t}");
    }
}

#[test]
fn spin_anchor_honors_offsets() {
    let mut config = SpinConfig::default();
    config.emitter.x_offset = 0.5;
    config.emitter.y_offset = -0.5;
    let splat = config.splat(canvas(), 0.0);

    assert_eq!(splat.position, Vec2::new(600.0, 150.0));
}

#[test]
fn normalize_color_maps_full_scale_to_one() {
    assert_eq!(normalize_color([255.0, 0.0, 127.5]), [1.0, 0.0, 0.5]);
}
