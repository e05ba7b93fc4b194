use crate::constants::{
    CURL, DEFAULT_BLUE, DISSIPATION, POINTER_RADIUS_DESKTOP, POINTER_RADIUS_MOBILE,
    POINTER_STRENGTH, PRESSURE, SOLVER_ITERATIONS, VISCOSITY,
};

/// Field visualized by the renderer's draw pass.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Dye = 0,
    Velocity = 1,
    Pressure = 2,
}

impl Mode {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Mode::Dye),
            1 => Some(Mode::Velocity),
            2 => Some(Mode::Pressure),
            _ => None,
        }
    }
}

/// Texture coarseness divisor relative to the canvas backing size. Finer
/// levels cost proportionally more compute; the values mirror the
/// renderer's own enumeration.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
    Sixteen = 16,
}

impl Resolution {
    pub fn from_divisor(divisor: u32) -> Option<Self> {
        match divisor {
            1 => Some(Resolution::One),
            2 => Some(Resolution::Two),
            4 => Some(Resolution::Four),
            8 => Some(Resolution::Eight),
            16 => Some(Resolution::Sixteen),
            _ => None,
        }
    }
}

/// Live simulation parameters. The control surface writes them between
/// ticks, the orchestrator reads them once per frame; last write wins.
#[derive(Clone, Debug)]
pub struct SimParams {
    pub paused: bool,
    pub mode: Mode,
    pub dye_resolution: Resolution,
    pub sim_resolution: Resolution,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub iterations: u32,
    pub viscosity: f32,
    pub dissipation: f32,
    pub curl: f32,
    pub pressure: f32,
    /// Pointer dye color on the GUI 0..255 scale.
    pub color: [f32; 3],
    pub use_random_color: bool,
    /// Handheld profile: coarser grid, wider pointer splat, flat iteration
    /// count.
    pub mobile: bool,
}

impl SimParams {
    pub fn new(mobile: bool) -> Self {
        Self {
            paused: false,
            mode: Mode::Dye,
            dye_resolution: Resolution::Two,
            sim_resolution: if mobile {
                Resolution::Eight
            } else {
                Resolution::Four
            },
            pointer_radius: if mobile {
                POINTER_RADIUS_MOBILE
            } else {
                POINTER_RADIUS_DESKTOP
            },
            pointer_strength: POINTER_STRENGTH,
            iterations: SOLVER_ITERATIONS,
            viscosity: VISCOSITY,
            dissipation: DISSIPATION,
            curl: CURL,
            pressure: PRESSURE,
            color: DEFAULT_BLUE,
            use_random_color: true,
            mobile,
        }
    }

    /// Switch the simulation grid, retuning the solver pass count for the
    /// new cell density.
    pub fn set_sim_resolution(&mut self, resolution: Resolution) {
        self.sim_resolution = resolution;
        self.iterations = solver_iterations(resolution, self.mobile);
    }
}

/// Finer grids need more Jacobi passes to converge; handhelds stay at the
/// floor regardless.
pub fn solver_iterations(resolution: Resolution, mobile: bool) -> u32 {
    if mobile {
        return SOLVER_ITERATIONS;
    }

    match resolution {
        Resolution::One => 50,
        Resolution::Two => 40,
        Resolution::Four => 30,
        _ => SOLVER_ITERATIONS,
    }
}
