use macroquad::rand;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn neighbour(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn in_bounds(self, grid_size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < grid_size && self.y < grid_size
    }
}

/// Source of new food positions.
pub trait FoodSpawner {
    fn spawn(&mut self, grid_size: i32) -> Cell;
}

/// Uniform over the whole grid, snake cells included.
pub struct RandomFood;

impl FoodSpawner for RandomFood {
    fn spawn(&mut self, grid_size: i32) -> Cell {
        Cell {
            x: rand::gen_range(0, grid_size),
            y: rand::gen_range(0, grid_size),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Crash {
    Wall,
    Tail,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
    Moved,
    Ate,
    Crashed(Crash),
}

#[derive(Clone, Debug)]
pub struct Board {
    grid_size: i32,
    snake: Vec<Cell>,
    food: Cell,
    score: u32,
}

impl Board {
    pub fn new(grid_size: i32, head: Cell, food: Cell) -> Self {
        Self { grid_size, snake: vec![head], food, score: 0 }
    }

    #[cfg(test)]
    pub fn with_snake(grid_size: i32, snake: Vec<Cell>, food: Cell) -> Self {
        assert!(!snake.is_empty());
        Self { grid_size, snake, food, score: 0 }
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Head first.
    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Advances the snake by one cell. A crash leaves the board untouched.
    pub fn step(&mut self, dir: Direction, spawner: &mut impl FoodSpawner) -> Step {
        let new_head = self.head().neighbour(dir);

        if !new_head.in_bounds(self.grid_size) {
            return Step::Crashed(Crash::Wall);
        }
        // checked against the body before the tail moves away
        if self.snake.contains(&new_head) {
            return Step::Crashed(Crash::Tail);
        }

        self.snake.insert(0, new_head);

        if new_head == self.food {
            self.score += 1;
            self.food = spawner.spawn(self.grid_size);
            Step::Ate
        } else {
            self.snake.pop();
            Step::Moved
        }
    }
}
