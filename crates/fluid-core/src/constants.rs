// Shared tuning defaults for the front-end. The control surface exposes
// most of these as live sliders; the values here are the session startup
// state.

// Default dye palette (GUI 0..255 scale)
pub const DEFAULT_BLUE: [f32; 3] = [47.0, 161.0, 214.0];
pub const DEFAULT_RED: [f32; 3] = [214.0, 61.0, 47.0];

// Scale from emitter/pointer strength to splat velocity
pub const SPLAT_FORCE: f32 = 10.0;

// Resolution-independent falloff scale, applied to min(canvas dimension)
pub const BASE_RADIUS_SCALE: f32 = 10.0;

// Pointer splat defaults; handhelds get a wider splat for fat fingers
pub const POINTER_RADIUS_DESKTOP: f32 = 0.2;
pub const POINTER_RADIUS_MOBILE: f32 = 0.4;
pub const POINTER_STRENGTH: f32 = 10.0;

// Solver pass-through defaults
pub const SOLVER_ITERATIONS: u32 = 20;
pub const VISCOSITY: f32 = 0.5;
pub const DISSIPATION: f32 = 2.0;
pub const CURL: f32 = 0.25;
pub const PRESSURE: f32 = 0.8;

// Random pointer color bands (HSL); narrow enough to stay readable
// against the dark canvas
pub const RANDOM_HUE: (f32, f32) = (0.0, 360.0);
pub const RANDOM_SATURATION: (f32, f32) = (0.5, 0.9);
pub const RANDOM_LIGHTNESS: (f32, f32) = (0.3, 0.5);

// Emitter defaults
pub const EMITTER_RADIUS: f32 = 0.2;
pub const EMITTER_STRENGTH: f32 = 10.0;
// Default spell anchors sit 5% in from the side edges
pub const EMITTER_EDGE_OFFSET: f32 = 0.9;

// Obstacle defaults
pub const OBSTACLE_SIZE: f32 = 100.0;
pub const OBSTACLE_COLOR: [f32; 3] = [200.0, 200.0, 200.0];
