use crate::board::{Board, Cell, Direction, FoodSpawner, Step};
use crate::config::Config;
use crate::input::Action;
use crate::ticker::Ticker;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// A button the player can press in the current phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Control {
    Start,
    Pause,
    Resume,
    Stop,
    TryAgain,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "Start Game",
            Control::Pause => "Pause",
            Control::Resume => "Resume",
            Control::Stop => "Stop",
            Control::TryAgain => "Try Again",
        }
    }

    pub fn action(self) -> Action {
        match self {
            Control::Start | Control::TryAgain => Action::Start,
            Control::Pause | Control::Resume => Action::TogglePause,
            Control::Stop => Action::Stop,
        }
    }
}

pub struct Session {
    board: Board,
    direction: Direction,
    phase: Phase,
    ticker: Option<Ticker>,
    tick_interval: f64,
    revision: u64,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let grid = config.grid_size;
        let board = Board::new(
            grid,
            start_cell(grid),
            Cell::new(grid * 3 / 4, grid * 3 / 4),
        );
        Self {
            board,
            direction: Direction::Right,
            phase: Phase::NotStarted,
            ticker: None,
            tick_interval: config.tick_interval(),
            revision: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Bumped on every change the screen needs to reflect.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn controls(&self) -> &'static [Control] {
        match self.phase {
            Phase::NotStarted => &[Control::Start],
            Phase::Running => &[Control::Pause, Control::Stop],
            Phase::Paused => &[Control::Resume, Control::Stop],
            Phase::GameOver => &[Control::TryAgain],
        }
    }

    pub fn dispatch(&mut self, action: Action, now: f64, spawner: &mut impl FoodSpawner) {
        match action {
            Action::Steer(dir) => self.steer(dir),
            Action::Start => self.start(now, spawner),
            Action::TogglePause => self.toggle_pause(now),
            Action::Stop => self.stop(),
        }
    }

    /// Starts from scratch; also serves as restart after game over.
    pub fn start(&mut self, now: f64, spawner: &mut impl FoodSpawner) {
        if !matches!(self.phase, Phase::NotStarted | Phase::GameOver) {
            return;
        }

        let grid = self.board.grid_size();
        let food = spawner.spawn(grid);
        self.board = Board::new(grid, start_cell(grid), food);
        self.direction = Direction::Right;
        self.phase = Phase::Running;
        self.ticker = Some(Ticker::install(self.tick_interval, now));
        self.revision += 1;
        log::info!("session started, food at ({}, {})", food.x, food.y);
    }

    pub fn toggle_pause(&mut self, now: f64) {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                self.ticker = None;
                log::info!("paused at score {}", self.score());
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.ticker = Some(Ticker::install(self.tick_interval, now));
                log::info!("resumed");
            }
            Phase::NotStarted | Phase::GameOver => return,
        }
        self.revision += 1;
    }

    pub fn stop(&mut self) {
        if !self.is_started() {
            return;
        }
        self.end();
        log::info!("stopped by player, final score {}", self.score());
    }

    /// Last write wins; nothing stops a reversal into the body.
    pub fn steer(&mut self, dir: Direction) {
        if self.direction != dir {
            log::debug!("steer {:?} -> {:?}", self.direction, dir);
        }
        self.direction = dir;
    }

    /// Runs one tick if the timer is due.
    pub fn update(&mut self, now: f64, spawner: &mut impl FoodSpawner) -> Option<Step> {
        let due = self.ticker.as_mut().is_some_and(|t| t.poll(now));
        if due { self.tick(spawner) } else { None }
    }

    /// One move of the snake; ignored unless running.
    pub fn tick(&mut self, spawner: &mut impl FoodSpawner) -> Option<Step> {
        if self.phase != Phase::Running {
            return None;
        }

        let step = self.board.step(self.direction, spawner);
        log::debug!("tick {:?} -> {:?}", self.direction, step);
        match step {
            Step::Crashed(crash) => {
                self.end();
                log::info!("game over ({:?}), final score {}", crash, self.score());
            }
            Step::Moved | Step::Ate => self.revision += 1,
        }
        Some(step)
    }

    fn end(&mut self) {
        self.phase = Phase::GameOver;
        self.ticker = None;
        self.revision += 1;
    }
}

fn start_cell(grid_size: i32) -> Cell {
    Cell::new(grid_size / 2, grid_size / 2)
}
