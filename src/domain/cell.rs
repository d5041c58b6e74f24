/// Liveness of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Logical negation of the state
    pub const fn flipped(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// A double-buffered cell anchored at a pixel origin.
///
/// `current` is the authoritative state. `pending` holds the outcome written
/// during a generation sweep and only becomes visible through [`Cell::update`],
/// so a sweep never observes values produced by the same sweep.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    x: i32,
    y: i32,
    current: CellState,
    pending: CellState,
}

impl Cell {
    /// Create a dead cell whose top-left pixel is `(x, y)`
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            current: CellState::Dead,
            pending: CellState::Dead,
        }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn state(&self) -> CellState {
        self.current
    }

    /// Value that the next commit will make current
    pub const fn pending(&self) -> CellState {
        self.pending
    }

    pub const fn is_alive(&self) -> bool {
        self.current.is_alive()
    }

    pub const fn is_dead(&self) -> bool {
        !self.current.is_alive()
    }

    pub fn kill(&mut self) {
        self.pending = CellState::Dead;
    }

    pub fn spawn(&mut self) {
        self.pending = CellState::Alive;
    }

    /// Schedule the opposite of the *current* state.
    ///
    /// Toggling twice before a commit still schedules a single flip.
    pub fn toggle(&mut self) -> CellState {
        self.pending = self.current.flipped();
        self.pending
    }

    /// Commit: make the pending state current
    pub fn update(&mut self) {
        self.current = self.pending;
    }

    /// Apply Conway's rule for `neighbors` live neighbours to `pending`.
    /// Cells the rule does not change keep whatever is pending.
    pub fn apply_rule(&mut self, neighbors: u8) {
        match (self.current, neighbors) {
            (CellState::Alive, 2 | 3) => {}
            (CellState::Alive, _) => self.kill(),
            (CellState::Dead, 3) => self.spawn(),
            (CellState::Dead, _) => {}
        }
    }

    /// Hit test with exclusive bounds on every edge; a point on the
    /// border belongs to no cell.
    pub const fn is_clicked(&self, px: i32, py: i32, cell_w: i32, cell_h: i32) -> bool {
        px > self.x && px < self.x + cell_w && py > self.y && py < self.y + cell_h
    }
}
