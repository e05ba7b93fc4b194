use glam::Vec2;

/// One user contact (mouse button or first touch point) tracked across
/// input events.
///
/// Event handlers feed `down`/`update`/`up` at whatever cadence the host
/// delivers them; the frame loop reads the latest sample once per tick and
/// then calls `consume_move`. The `moved` flag is the only device
/// reconciling the two cadences: updates between frames coalesce down to
/// the latest velocity, and a consumed movement is never re-applied.
#[derive(Clone, Debug, Default)]
pub struct Pointer {
    position: Vec2,
    last_position: Vec2,
    velocity: Vec2,
    down: bool,
    moved: bool,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a contact at `(x, y)`.
    pub fn down(&mut self, x: f32, y: f32) {
        self.moved = false;
        self.down = true;
        self.position = Vec2::new(x, y);
        self.last_position = self.position;
        self.velocity = Vec2::ZERO;
    }

    /// Record a movement sample. Ignored while no contact is active.
    /// `strength` is a caller-supplied gain on the derived velocity.
    pub fn update(&mut self, x: f32, y: f32, strength: f32) {
        if !self.down {
            return;
        }

        self.last_position = self.position;
        self.position = Vec2::new(x, y);
        self.velocity = (self.position - self.last_position) * strength;
        self.moved = self.velocity.x != 0.0 || self.velocity.y != 0.0;
    }

    /// End the contact. Velocity is zeroed so nothing leaks into later
    /// frames; the position sticks around but is irrelevant while up.
    pub fn up(&mut self) {
        self.down = false;
        self.moved = false;
        self.velocity = Vec2::ZERO;
    }

    /// Clear the moved flag after a frame has read it. No-op when nothing
    /// moved, so calling it again loses no state.
    pub fn consume_move(&mut self) {
        if !self.moved {
            return;
        }

        self.moved = false;
        self.velocity = Vec2::ZERO;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    #[inline]
    pub fn is_moved(&self) -> bool {
        self.moved
    }
}
