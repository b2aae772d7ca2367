use std::collections::VecDeque;

use rand::Rng;

use crate::maze::{Maze, Pos, Tile, COLS, ROWS, START};

const STARTING_LIVES: u32 = 3;
const GHOST_SPAWNS: [Pos; 2] = [Pos { row: 5, col: 8 }, Pos { row: 6, col: 8 }];
const GHOST_HISTORY_LEN: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

/// One discrete command per turn. `Noop` is any unrecognized key: the player
/// stands still but the ghosts still take their turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Dir),
    Pause,
    Restart,
    Quit,
    Noop,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Paused,
    Won,
    Lost,
    Quit,
}

pub struct Game {
    maze: Maze,
    player: Pos,
    ghosts: [Pos; 2],
    // Last couple of ghost moves. Nothing decides on this; it is kept around
    // for display experiments.
    ghost_history: VecDeque<Pos>,
    score: u32,
    lives: u32,
    phase: Phase,
}

impl Game {
    pub fn new(rng: &mut impl Rng) -> Self {
        Game {
            maze: Maze::generate(rng),
            player: START,
            ghosts: GHOST_SPAWNS,
            ghost_history: VecDeque::new(),
            score: 0,
            lives: STARTING_LIVES,
            phase: Phase::Playing,
        }
    }

    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.maze = Maze::generate(rng);
        self.player = START;
        self.ghosts = GHOST_SPAWNS;
        self.ghost_history.clear();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = Phase::Playing;
    }

    /// Resolve one turn. While paused, any command acknowledges the pause and
    /// nothing else happens; terminal phases ignore input entirely.
    pub fn handle(&mut self, cmd: Command, rng: &mut impl Rng) {
        match self.phase {
            Phase::Paused => {
                self.phase = Phase::Playing;
                return;
            }
            Phase::Playing => {}
            _ => return,
        }

        match cmd {
            Command::Quit => {
                self.phase = Phase::Quit;
                return;
            }
            Command::Pause => {
                self.phase = Phase::Paused;
                return;
            }
            Command::Restart => self.restart(rng),
            Command::Move(dir) => {
                self.move_player(dir);
                self.move_ghosts(rng);
            }
            Command::Noop => self.move_ghosts(rng),
        }

        if self.lives == 0 {
            self.phase = Phase::Lost;
        } else if self.score == self.maze.pellet_total() {
            self.phase = Phase::Won;
        }
    }

    // The player only ever stands on interior cells and the border is solid
    // wall, so the candidate cell is always in bounds.
    fn move_player(&mut self, dir: Dir) {
        let (dr, dc) = dir.delta();
        let next = Pos {
            row: (self.player.row as isize + dr) as usize,
            col: (self.player.col as isize + dc) as usize,
        };
        match self.maze.tile(next) {
            Tile::Wall => {}
            Tile::Ghost => {
                // Caught: lose a life and respawn at the start, without
                // completing the move. Score is untouched.
                self.lives -= 1;
                self.maze.set(self.player, Tile::Empty);
                self.player = START;
                self.maze.set(START, Tile::Player);
            }
            tile => {
                if tile == Tile::Pellet {
                    self.score += 1;
                    self.maze.remove_pellet(next);
                }
                self.maze.set(self.player, Tile::Empty);
                self.player = next;
                self.maze.set(next, Tile::Player);
            }
        }
    }

    // Each ghost drifts one random step, clamped into the interior. A wall
    // candidate means the ghost skips its turn; there is no retry. Ghosts
    // stamp over whatever they land on and leave empty cells behind: a
    // trampled pellet is gone from the board (not from the registry) and a
    // trampled player marker is not a collision.
    fn move_ghosts(&mut self, rng: &mut impl Rng) {
        for i in 0..self.ghosts.len() {
            let dr: isize = rng.gen_range(-1..=1);
            let dc: isize = rng.gen_range(-1..=1);
            let next = Pos {
                row: (self.ghosts[i].row as isize + dr).clamp(1, ROWS as isize - 2) as usize,
                col: (self.ghosts[i].col as isize + dc).clamp(1, COLS as isize - 2) as usize,
            };
            if self.maze.tile(next) == Tile::Wall {
                continue;
            }
            self.maze.set(self.ghosts[i], Tile::Empty);
            self.ghosts[i] = next;
            self.maze.set(next, Tile::Ghost);

            if self.ghost_history.len() == GHOST_HISTORY_LEN {
                self.ghost_history.pop_front();
            }
            self.ghost_history.push_back(next);
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn ghosts(&self) -> [Pos; 2] {
        self.ghosts
    }

    pub fn ghost_history(&self) -> &VecDeque<Pos> {
        &self.ghost_history
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pellets_remaining(&self) -> u32 {
        self.maze.pellet_total() - self.score
    }
}
