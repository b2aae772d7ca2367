use std::collections::HashSet;

use rand::Rng;

pub const ROWS: usize = 10;
pub const COLS: usize = 10;

/// The player always starts (and respawns) here; generation forces this cell open.
pub const START: Pos = Pos { row: 1, col: 1 };

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Wall,
    Pellet,
    Empty,
    Player,
    Ghost,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Pellet => '.',
            Tile::Empty => ' ',
            Tile::Player => 'P',
            Tile::Ghost => 'G',
        }
    }
}

/// The board plus the pellet registry built alongside it.
///
/// `pellet_total` is frozen at generation time and drives the win check;
/// `pellets` shrinks as the player eats.
pub struct Maze {
    grid: [[Tile; COLS]; ROWS],
    pellets: HashSet<Pos>,
    pellet_total: u32,
}

impl Maze {
    /// Generate a fresh layout: walled border, interior cells independently
    /// a wall with probability 1/5, otherwise empty with a 1/4 chance of a
    /// pellet. The start cell is forced to the player afterwards, discarding
    /// whatever was rolled there. No connectivity guarantee beyond the start
    /// cell being open; pellets may end up unreachable.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut grid = [[Tile::Empty; COLS]; ROWS];
        let mut pellets = HashSet::new();

        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Pos { row, col };
                grid[row][col] = if row == 0 || row == ROWS - 1 || col == 0 || col == COLS - 1 {
                    Tile::Wall
                } else if rng.gen_ratio(1, 5) {
                    Tile::Wall
                } else if rng.gen_ratio(1, 4) {
                    pellets.insert(pos);
                    Tile::Pellet
                } else {
                    Tile::Empty
                };
            }
        }

        // The forced start cell may stomp a rolled wall or pellet; a stomped
        // pellet leaves the registry so it stays in sync with the grid.
        pellets.remove(&START);
        grid[START.row][START.col] = Tile::Player;

        let pellet_total = pellets.len() as u32;
        Maze {
            grid,
            pellets,
            pellet_total,
        }
    }

    pub fn tile(&self, pos: Pos) -> Tile {
        self.grid[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        self.grid[pos.row][pos.col] = tile;
    }

    /// Drop a pellet from the registry. Returns false if no pellet was
    /// recorded at `pos`.
    pub fn remove_pellet(&mut self, pos: Pos) -> bool {
        self.pellets.remove(&pos)
    }

    pub fn pellet_total(&self) -> u32 {
        self.pellet_total
    }

    pub fn pellets(&self) -> &HashSet<Pos> {
        &self.pellets
    }

    /// Orthogonal non-wall neighbors of `pos`, computed straight from the
    /// grid. Nothing stores adjacency; this is the only reachability query.
    pub fn open_neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut open = Vec::new();
        for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
            let row = pos.row as isize + dr;
            let col = pos.col as isize + dc;
            if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
                continue;
            }
            let next = Pos {
                row: row as usize,
                col: col as usize,
            };
            if self.tile(next) != Tile::Wall {
                open.push(next);
            }
        }
        open
    }

    #[cfg(test)]
    pub(crate) fn blank() -> Self {
        let mut grid = [[Tile::Empty; COLS]; ROWS];
        for row in 0..ROWS {
            for col in 0..COLS {
                if row == 0 || row == ROWS - 1 || col == 0 || col == COLS - 1 {
                    grid[row][col] = Tile::Wall;
                }
            }
        }
        grid[START.row][START.col] = Tile::Player;
        Maze {
            grid,
            pellets: HashSet::new(),
            pellet_total: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn put_pellet(&mut self, pos: Pos) {
        self.set(pos, Tile::Pellet);
        self.pellets.insert(pos);
        self.pellet_total += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pellet_cells(maze: &Maze) -> HashSet<Pos> {
        let mut cells = HashSet::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Pos { row, col };
                if maze.tile(pos) == Tile::Pellet {
                    cells.insert(pos);
                }
            }
        }
        cells
    }

    #[test]
    fn border_cells_are_always_walls() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(&mut rng);
            for row in 0..ROWS {
                assert_eq!(maze.tile(Pos { row, col: 0 }), Tile::Wall);
                assert_eq!(maze.tile(Pos { row, col: COLS - 1 }), Tile::Wall);
            }
            for col in 0..COLS {
                assert_eq!(maze.tile(Pos { row: 0, col }), Tile::Wall);
                assert_eq!(maze.tile(Pos { row: ROWS - 1, col }), Tile::Wall);
            }
        }
    }

    #[test]
    fn start_cell_holds_the_player() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(&mut rng);
            assert_eq!(maze.tile(START), Tile::Player);
        }
    }

    #[test]
    fn registry_matches_grid_after_generation() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(&mut rng);
            assert_eq!(*maze.pellets(), pellet_cells(&maze));
            assert_eq!(maze.pellet_total(), maze.pellets().len() as u32);
        }
    }

    #[test]
    fn open_neighbors_skips_walls_and_bounds() {
        let mut maze = Maze::blank();
        maze.set(Pos { row: 1, col: 2 }, Tile::Wall);

        // (1,1) sits in a corner of the interior: up and left are border
        // walls, right was just walled off, only down remains.
        assert_eq!(maze.open_neighbors(START), vec![Pos { row: 2, col: 1 }]);

        // A mid-board cell with nothing around it sees all four neighbors.
        let mid = Pos { row: 5, col: 5 };
        assert_eq!(maze.open_neighbors(mid).len(), 4);

        // Corner of the full grid never reaches out of bounds.
        assert!(maze.open_neighbors(Pos { row: 0, col: 0 })
            .iter()
            .all(|p| p.row < ROWS && p.col < COLS));
    }

    #[test]
    fn removing_a_pellet_is_removal_by_key() {
        let mut maze = Maze::blank();
        let pos = Pos { row: 3, col: 3 };
        maze.put_pellet(pos);
        assert!(maze.remove_pellet(pos));
        assert!(!maze.remove_pellet(pos));
        assert!(maze.pellets().is_empty());
    }
}
