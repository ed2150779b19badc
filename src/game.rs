//! Game orchestrator: drives the grid through swap, fall and combo
//! states each tick, reconciles pending combos against the live grid
//! and accumulates score.

use crate::grid::{Block, Combo, Grid, GridError, Orientation};
use crate::logging::EventLog;
use crate::state::{StateData, StateError, StateId, StateMachine, Status};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Delay before the AI performs its first swap.
const AI_SWAP_FIRST_DELAY: Duration = Duration::from_secs(2);
/// Cooldown between AI swaps.
const AI_SWAP_COOLDOWN: Duration = Duration::from_millis(1500);
/// One gravity step per fall state timer.
const FALL_STEP_DURATION: Duration = Duration::from_millis(200);
/// How long a detected combo is displayed before it resolves.
const COMBO_DURATION: Duration = Duration::from_secs(2);
/// Combo ids are drawn from `0..MAX_COMBO_IDS`.
const MAX_COMBO_IDS: u8 = 100;

/// Score for a group of `n` distinct cleared cells is `SCORES[n - 3]`,
/// capped at 1000 for groups of 11 and more.
const SCORES: [u32; 11] = [2, 3, 5, 10, 20, 50, 100, 200, 400, 600, 800];

fn score_for(group_size: usize) -> u32 {
    match group_size {
        0..=2 => 0,
        3..=10 => SCORES[group_size - 3],
        _ => 1000,
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error("more than {MAX_COMBO_IDS} concurrent combos")]
    TooManyConcurrentCombos,
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
}

/// Discrete cursor move, clamped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "right" => Ok(Self::Right),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            other => Err(GameError::InvalidDirection(other.to_string())),
        }
    }
}

/// Which local detection to run after a grid mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComboCheck {
    Swap,
    Fall,
}

/// One running game: a grid, its scheduled states, a cursor, a score.
pub struct Game {
    pub grid: Grid,
    machine: StateMachine,
    rng: ChaCha8Rng,
    /// Left cell of the pair the next swap exchanges.
    pub swapper_pos: (usize, usize),
    pub score: u32,
    pub score_multiplier: u32,
    pub paused: bool,
    strategy: crate::ReconcileStrategy,
    log: EventLog,
}

impl Game {
    pub fn new(config: &crate::GameConfig, mut log: EventLog) -> Result<Self, GridError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::new(config.width, config.height, config.nb_symbols, &mut rng)?;
        let mut machine = StateMachine::new();
        if config.ai {
            machine.transition(StateId::AiSwap, Some(AI_SWAP_FIRST_DELAY), StateData::None);
        }
        log.event(&format!(
            "game start: {}x{} seed {seed} strategy {:?}",
            config.width, config.height, config.strategy
        ));
        Ok(Self {
            grid,
            machine,
            rng,
            swapper_pos: (0, 0),
            score: 0,
            score_multiplier: 1,
            paused: false,
            strategy: config.strategy,
            log,
        })
    }

    /// One tick. Handles every state that was live at entry, then
    /// advances all clocks by the same `dt`. A paused game skips the
    /// whole tick, so no state's elapsed time moves.
    pub fn update(&mut self, dt: Duration) -> Result<(), GameError> {
        if self.paused {
            return Ok(());
        }

        for id in self.machine.ids() {
            // Handling an earlier id may have deleted this one.
            let Some(status) = self.machine.get(id).map(|s| s.status) else {
                continue;
            };
            match id {
                StateId::AiSwap => match status {
                    Status::Starting => {
                        if let Some(pos) = self.grid.random_swap(&mut self.rng) {
                            self.swapper_pos = pos;
                        }
                    }
                    Status::Ending => {
                        self.swap()?;
                        self.machine.transition(
                            StateId::AiSwap,
                            Some(AI_SWAP_COOLDOWN),
                            StateData::None,
                        );
                    }
                    Status::Ongoing => {}
                },
                StateId::Fall { column } => {
                    if status == Status::Ending {
                        self.step_fall(id, column)?;
                    }
                }
                StateId::Combo { .. } => {
                    if status == Status::Ending {
                        self.resolve_combo(id)?;
                    }
                }
            }
        }

        self.machine.update(dt);
        Ok(())
    }

    /// Advance one falling column by a single row. The state re-arms
    /// while its tracked cell is still a hole, or retargets when another
    /// lower hole remains in the column; otherwise the column settled.
    fn step_fall(&mut self, id: StateId, column: usize) -> Result<(), GameError> {
        let Some(StateData::FallAt { x, y }) = self.machine.get(id).map(|s| s.data.clone())
        else {
            return Ok(());
        };
        self.grid.fall_step_pos(x, y);
        if self.grid.is_hole(x, y) {
            self.machine
                .transition(id, Some(FALL_STEP_DURATION), StateData::FallAt { x, y });
            return Ok(());
        }
        if let Some(&(hx, hy)) = self.grid.lower_holes(Some(&[column])).first() {
            self.machine.transition(
                id,
                Some(FALL_STEP_DURATION),
                StateData::FallAt { x: hx, y: hy },
            );
            return Ok(());
        }
        // Falling ended for this column.
        self.machine.delete(id)?;
        let falls_remaining = self
            .machine
            .iter()
            .filter(|(other, _)| matches!(other, StateId::Fall { .. }))
            .count();
        let combos = self.check_combo(ComboCheck::Fall, (x, y))?;
        if falls_remaining == 0 && combos.is_empty() {
            if self.score_multiplier > 1 {
                self.log.event("cascade over, multiplier reset");
            }
            self.score_multiplier = 1;
        }
        Ok(())
    }

    /// A combo's display timer elapsed: re-validate the stored group
    /// against the live grid, score and clear the survivors, then check
    /// for the holes the clearing opened.
    fn resolve_combo(&mut self, id: StateId) -> Result<(), GameError> {
        let Some(StateData::ComboGroup(group)) = self.machine.get(id).map(|s| s.data.clone())
        else {
            return Ok(());
        };
        let surviving = self.reconcile(&group);
        self.process_combos(&surviving);
        self.machine.delete(id)?;
        self.check_fall(None);
        Ok(())
    }

    /// Fresh local scan at a stored combo's anchor, along its recorded
    /// orientation. Irregular groups cannot be rescanned.
    fn rescan(&self, combo: &Combo) -> Option<Combo> {
        let Block { x, y, .. } = combo.first();
        match combo.orientation() {
            Orientation::Horizontal => self.grid.combo_horizontal_around(x, y),
            Orientation::Vertical => self.grid.combo_vertical_around(x, y),
            Orientation::Irregular => None,
        }
    }

    fn reconcile(&self, group: &[Combo]) -> Vec<Combo> {
        match self.strategy {
            crate::ReconcileStrategy::Lazy => self.reconcile_lazy(group),
            crate::ReconcileStrategy::Morph => self.reconcile_morph(group),
        }
    }

    /// Lazy strategy: keep exactly the stored combos still on the grid
    /// unchanged; anything disturbed in the meantime is dropped.
    fn reconcile_lazy(&self, group: &[Combo]) -> Vec<Combo> {
        group
            .iter()
            .filter(|combo| self.rescan(combo).as_ref() == Some(*combo))
            .cloned()
            .collect()
    }

    /// Morph strategy: rescan to get the end-of-timer group, then keep
    /// every end combo overlapping a position present both at detection
    /// time and now. Tolerates combos that grew or shifted.
    fn reconcile_morph(&self, group: &[Combo]) -> Vec<Combo> {
        let end: Vec<Combo> = group.iter().filter_map(|combo| self.rescan(combo)).collect();
        let start_pos: HashSet<(usize, usize)> = group.iter().flat_map(Combo::positions).collect();
        let common: HashSet<(usize, usize)> = end
            .iter()
            .flat_map(Combo::positions)
            .filter(|pos| start_pos.contains(pos))
            .collect();
        end.into_iter()
            .filter(|combo| combo.positions().any(|pos| common.contains(&pos)))
            .collect()
    }

    /// Score and clear a resolved combo group. The score is looked up by
    /// the number of distinct cleared cells and multiplied by the
    /// cascade multiplier, which then increments.
    fn process_combos(&mut self, group: &[Combo]) {
        if group.is_empty() {
            return;
        }
        let positions: HashSet<(usize, usize)> = group.iter().flat_map(Combo::positions).collect();
        let points = score_for(positions.len()) * self.score_multiplier;
        self.log.event(&format!(
            "scored {points} ({} cells, x{})",
            positions.len(),
            self.score_multiplier
        ));
        self.score += points;
        self.score_multiplier += 1;
        for &(x, y) in &positions {
            self.grid.clear_cell(x, y);
        }
    }

    /// Create a fall state for every targeted column with an eligible
    /// hole. At most one fall state per column, ever.
    fn check_fall(&mut self, focus: Option<&[usize]>) -> Vec<(usize, usize)> {
        let holes = self.grid.lower_holes(focus);
        for &(x, y) in &holes {
            let id = StateId::Fall { column: x };
            if !self.machine.contains(id) {
                self.machine
                    .transition(id, Some(FALL_STEP_DURATION), StateData::FallAt { x, y });
            }
        }
        holes
    }

    /// Detect new combos around `pos` and register them, deduplicating
    /// against already-pending combo states. Returns the genuinely new
    /// combos (empty when everything was filtered or merged).
    fn check_combo(
        &mut self,
        kind: ComboCheck,
        pos: (usize, usize),
    ) -> Result<Vec<Combo>, GameError> {
        let mut group = match kind {
            ComboCheck::Swap => self.grid.combos_after_swap(pos.0, pos.1),
            ComboCheck::Fall => self.grid.combos_after_fall(pos),
        };
        if group.is_empty() {
            return Ok(group);
        }

        // A combo touching a column that is still falling is a moving
        // target; drop it, it gets re-detected once the column settles.
        let falling: HashSet<usize> = self
            .grid
            .lower_holes(None)
            .into_iter()
            .map(|(x, _)| x)
            .collect();
        let before = group.len();
        group.retain(|combo| !combo.blocks().iter().any(|b| falling.contains(&b.x)));
        if group.len() < before {
            self.log.event("dropped combo on falling column");
        }

        // Two or more shared blocks means a pending combo seen again
        // (possibly grown): update its stored group in place instead of
        // spawning a duplicate state.
        for cid in self.machine.ids() {
            let Some(state) = self.machine.get_mut(cid) else {
                continue;
            };
            let StateData::ComboGroup(stored) = &mut state.data else {
                continue;
            };
            for old in stored.iter_mut() {
                let mut i = 0;
                while i < group.len() {
                    if group[i].shared_blocks(old) >= 2 {
                        if *old != group[i] {
                            *old = group[i].clone();
                        }
                        group.remove(i);
                    } else {
                        i += 1;
                    }
                }
            }
        }

        if !group.is_empty() {
            let id = self.gen_combo_id()?;
            self.log.event(&format!(
                "combo#{id}: {} group(s) around ({}, {})",
                group.len(),
                pos.0,
                pos.1
            ));
            self.machine.transition(
                StateId::Combo { id },
                Some(COMBO_DURATION),
                StateData::ComboGroup(group.clone()),
            );
        }
        Ok(group)
    }

    /// Lowest unused combo id. Exhausting the pool means the scheduler
    /// is leaking combo states, which must not go unnoticed.
    fn gen_combo_id(&self) -> Result<u8, GameError> {
        (0..MAX_COMBO_IDS)
            .find(|&id| !self.machine.contains(StateId::Combo { id }))
            .ok_or(GameError::TooManyConcurrentCombos)
    }

    /// Move the swap cursor, clamped so both its cells stay on the grid.
    pub fn move_swapper(&mut self, dir: Direction) {
        let (x, y) = self.swapper_pos;
        self.swapper_pos = match dir {
            Direction::Up => (x, y.saturating_sub(1)),
            Direction::Right => ((x + 1).min(self.grid.width - 2), y),
            Direction::Down => (x, (y + 1).min(self.grid.height - 1)),
            Direction::Left => (x.saturating_sub(1), y),
        };
    }

    /// Swap the cursor pair, then request fall checks for both affected
    /// columns; when no hole resulted the combo check runs immediately
    /// (an immediate match needs no fall first).
    pub fn swap(&mut self) -> Result<(), GameError> {
        let (x, y) = self.swapper_pos;
        self.grid.swap(x, y);
        let holes = self.check_fall(Some(&[x, x + 1]));
        if holes.is_empty() {
            self.check_combo(ComboCheck::Swap, (x, y))?;
        }
        Ok(())
    }

    /// Halt tick advancement without resetting any state's clock.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Compact dump of live state ids and statuses, for the HUD.
    pub fn state_summary(&self) -> String {
        self.machine.compact_repr()
    }

    /// Stored groups of all pending combo states, for highlighting.
    pub fn pending_combo_groups(&self) -> Vec<&[Combo]> {
        self.machine
            .iter()
            .filter_map(|(_, state)| match &state.data {
                StateData::ComboGroup(group) => Some(group.as_slice()),
                _ => None,
            })
            .collect()
    }
}
