// Frame orchestration: directive ordering, pause semantics, and the
// obstacle lifecycle, observed through a recording renderer stand-in.

use fluid_core::{
    Effect, FluidSurface, FrameDriver, Mode, SimParams, SpellPairConfig, SpinConfig,
};
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Splat {
        radius: f32,
        position: Vec2,
        velocity: Vec2,
    },
    Obstacle {
        size: Option<f32>,
        circle: bool,
    },
    Update {
        paused: bool,
        time_sec: f32,
        iterations: u32,
        curl: f32,
    },
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl FluidSurface for Recorder {
    fn splat(
        &mut self,
        radius: f32,
        position: Vec2,
        velocity: Vec2,
        _color: [f32; 3],
    ) -> anyhow::Result<()> {
        self.calls.push(Call::Splat {
            radius,
            position,
            velocity,
        });
        Ok(())
    }

    fn set_obstacle(
        &mut self,
        size: Option<f32>,
        _position: Vec2,
        _color: [f32; 3],
        circle: bool,
    ) -> anyhow::Result<()> {
        self.calls.push(Call::Obstacle { size, circle });
        Ok(())
    }

    fn update(
        &mut self,
        paused: bool,
        time_sec: f32,
        _mode: Mode,
        iterations: u32,
        _viscosity: f32,
        _dissipation: f32,
        curl: f32,
        _pressure: f32,
    ) -> anyhow::Result<()> {
        self.calls.push(Call::Update {
            paused,
            time_sec,
            iterations,
            curl,
        });
        Ok(())
    }
}

// A surface whose splat always fails, for loss-of-frame behavior.
struct Failing;

impl FluidSurface for Failing {
    fn splat(
        &mut self,
        _radius: f32,
        _position: Vec2,
        _velocity: Vec2,
        _color: [f32; 3],
    ) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("splat rejected"))
    }

    fn set_obstacle(
        &mut self,
        _size: Option<f32>,
        _position: Vec2,
        _color: [f32; 3],
        _circle: bool,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    fn update(
        &mut self,
        _paused: bool,
        _time_sec: f32,
        _mode: Mode,
        _iterations: u32,
        _viscosity: f32,
        _dissipation: f32,
        _curl: f32,
        _pressure: f32,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

fn driver() -> FrameDriver {
    FrameDriver::new(SimParams::new(false))
}

fn size() -> Vec2 {
    Vec2::new(800.0, 600.0)
}

fn move_pointer(d: &mut FrameDriver) {
    d.pointer.down(0.0, 0.0);
    d.pointer.update(10.0, 0.0, 1.0);
}

#[test]
fn idle_frame_emits_only_the_update_call() {
    let mut d = driver();
    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.5).unwrap();

    assert_eq!(
        surface.calls,
        vec![Call::Update {
            paused: false,
            time_sec: 0.5,
            iterations: 20,
            curl: -0.25,
        }]
    );
}

#[test]
fn full_frame_preserves_directive_order() {
    let mut d = driver();
    d.obstacle.enabled = true;
    d.effect = Effect::SpellPair(SpellPairConfig::default());
    move_pointer(&mut d);

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();

    assert_eq!(surface.calls.len(), 5);
    assert!(matches!(surface.calls[0], Call::Obstacle { size: Some(_), .. }));
    // The pointer splat comes before the pair, at the contact position.
    assert!(
        matches!(surface.calls[1], Call::Splat { position, .. } if position == Vec2::new(10.0, 0.0))
    );
    assert!(
        matches!(surface.calls[2], Call::Splat { position, .. } if position == Vec2::new(40.0, 300.0))
    );
    assert!(
        matches!(surface.calls[3], Call::Splat { position, .. } if position == Vec2::new(760.0, 300.0))
    );
    assert!(matches!(surface.calls[4], Call::Update { .. }));
}

#[test]
fn pointer_splat_is_consumed_after_the_frame() {
    let mut d = driver();
    move_pointer(&mut d);

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();
    d.advance(&mut surface, size(), 0.016).unwrap();

    let splats = surface
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Splat { .. }))
        .count();
    assert_eq!(splats, 1, "a movement must be splatted exactly once");
}

#[test]
fn pointer_splat_uses_radius_setting_and_velocity() {
    let mut d = driver();
    d.params.pointer_radius = 0.5;
    d.pointer.down(0.0, 0.0);
    d.pointer.update(4.0, 3.0, 10.0);

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();

    assert!(matches!(
        surface.calls[0],
        Call::Splat {
            radius,
            velocity,
            ..
        } if radius == 0.5 * 6000.0 && velocity == Vec2::new(40.0, 30.0)
    ));
}

#[test]
fn paused_frame_suppresses_generators_but_not_the_pointer() {
    let mut d = driver();
    d.params.paused = true;
    d.effect = Effect::SpellPair(SpellPairConfig::default());
    move_pointer(&mut d);

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();

    assert_eq!(surface.calls.len(), 2);
    assert!(matches!(surface.calls[0], Call::Splat { .. }));
    assert!(matches!(surface.calls[1], Call::Update { paused: true, .. }));
}

#[test]
fn obstacle_stays_live_while_paused() {
    let mut d = driver();
    d.params.paused = true;
    d.obstacle.enabled = true;

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();
    d.advance(&mut surface, size(), 0.016).unwrap();

    let placements = surface
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Obstacle { size: Some(_), .. }))
        .count();
    assert_eq!(placements, 2);
}

#[test]
fn obstacle_disable_emits_a_single_clear() {
    let mut d = driver();
    d.obstacle.enabled = true;

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();

    d.obstacle.enabled = false;
    d.advance(&mut surface, size(), 0.016).unwrap();
    d.advance(&mut surface, size(), 0.033).unwrap();
    d.advance(&mut surface, size(), 0.050).unwrap();

    let directives: Vec<_> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Obstacle { size, .. } => Some(*size),
            _ => None,
        })
        .collect();
    assert_eq!(directives, vec![Some(100.0), None]);
}

#[test]
fn no_obstacle_means_no_directives_at_all() {
    let mut d = driver();
    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();
    d.advance(&mut surface, size(), 0.016).unwrap();

    assert!(!surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Obstacle { .. })));
}

#[test]
fn reenabling_the_obstacle_resumes_placement() {
    let mut d = driver();
    d.obstacle.enabled = true;

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();
    d.obstacle.enabled = false;
    d.advance(&mut surface, size(), 0.016).unwrap();
    d.obstacle.enabled = true;
    d.advance(&mut surface, size(), 0.033).unwrap();

    let directives: Vec<_> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Obstacle { size, .. } => Some(size.is_some()),
            _ => None,
        })
        .collect();
    assert_eq!(directives, vec![true, false, true]);
}

#[test]
fn update_receives_negated_curl() {
    let mut d = driver();
    d.params.curl = 0.4;

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 1.25).unwrap();

    assert!(matches!(
        surface.calls[0],
        Call::Update { curl, time_sec, .. } if curl == -0.4 && time_sec == 1.25
    ));
}

#[test]
fn spin_frame_emits_one_generator_splat() {
    let mut d = driver();
    d.effect = Effect::Spin(SpinConfig::default());

    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.0).unwrap();

    assert_eq!(surface.calls.len(), 2);
    assert!(matches!(
        surface.calls[0],
        Call::Splat { velocity, .. } if (velocity.x - 100.0).abs() < 1e-4 && velocity.y.abs() < 1e-4
    ));
}

#[test]
fn failed_frame_still_consumes_the_movement() {
    let mut d = driver();
    move_pointer(&mut d);

    assert!(d.advance(&mut Failing, size(), 0.0).is_err());
    assert!(
        !d.pointer.is_moved(),
        "moved flag must be consumed even on a failed frame"
    );

    // The next, healthy frame must not replay the stale movement.
    let mut surface = Recorder::default();
    d.advance(&mut surface, size(), 0.016).unwrap();
    assert!(!surface
        .calls
        .iter()
        .any(|c| matches!(c, Call::Splat { .. })));
}
