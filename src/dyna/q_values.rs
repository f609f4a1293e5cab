use rand::Rng;

use crate::maze::{Action, Cell, Maze};

/// Dense action-value table `Q(cell, action)` over a maze grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionValues {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl ActionValues {
    /// Zero-initialized table shaped like `maze`.
    pub fn new(maze: &Maze) -> Self {
        Self::with_shape(maze.height, maze.width)
    }

    pub fn with_shape(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; height * width * Action::ALL.len()],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn offset(&self, cell: Cell) -> usize {
        (cell.row * self.width + cell.col) * Action::ALL.len()
    }

    /// Values of every action in `cell`, in [`Action::ALL`] order.
    pub fn row(&self, cell: Cell) -> &[f64] {
        let start = self.offset(cell);
        &self.values[start..start + Action::ALL.len()]
    }

    pub fn get(&self, cell: Cell, action: Action) -> f64 {
        self.values[self.offset(cell) + action.index()]
    }

    pub fn set(&mut self, cell: Cell, action: Action, value: f64) {
        let i = self.offset(cell) + action.index();
        self.values[i] = value;
    }

    pub fn add(&mut self, cell: Cell, action: Action, delta: f64) {
        let i = self.offset(cell) + action.index();
        self.values[i] += delta;
    }

    /// Best action value in `cell`.
    pub fn max(&self, cell: Cell) -> f64 {
        self.row(cell).iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// First action with the best value.
    pub fn argmax(&self, cell: Cell) -> Action {
        let row = self.row(cell);
        let mut best = 0;
        for (i, &v) in row.iter().enumerate() {
            if v > row[best] {
                best = i;
            }
        }
        Action::ALL[best]
    }

    /// All actions sharing the best value in `cell`.
    pub fn greedy_actions(&self, cell: Cell) -> Vec<Action> {
        let best = self.max(cell);
        Action::ALL
            .iter()
            .copied()
            .filter(|a| self.get(cell, *a) == best)
            .collect()
    }

    /// Greedy action with ties broken uniformly at random.
    ///
    /// When every value in `cell` is NaN no action equals the maximum, and
    /// the first action is returned as [`argmax`](Self::argmax) does.
    pub fn sample_greedy<R: Rng + ?Sized>(&self, cell: Cell, rng: &mut R) -> Action {
        let greedy = self.greedy_actions(cell);
        if greedy.is_empty() {
            return self.argmax(cell);
        }
        greedy[rng.gen_range(0..greedy.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fresh_table_is_all_ties() {
        let q = ActionValues::new(&Maze::dyna());
        let c = Cell::new(3, 4);
        assert_eq!(q.max(c), 0.0);
        assert_eq!(q.argmax(c), Action::Up);
        assert_eq!(q.greedy_actions(c), Action::ALL.to_vec());
    }

    #[test]
    fn cells_do_not_alias() {
        let mut q = ActionValues::with_shape(2, 3);
        q.set(Cell::new(1, 2), Action::Right, 1.0);
        q.add(Cell::new(0, 0), Action::Up, -0.5);
        assert_eq!(q.get(Cell::new(1, 2), Action::Right), 1.0);
        assert_eq!(q.row(Cell::new(1, 1)), &[0.0; 4]);
        assert_eq!(q.argmax(Cell::new(1, 2)), Action::Right);
        assert_eq!(q.max(Cell::new(0, 0)), 0.0);
    }

    #[test]
    fn sample_greedy_breaks_ties_among_best() {
        let mut q = ActionValues::with_shape(1, 1);
        let c = Cell::new(0, 0);
        q.set(c, Action::Down, 2.0);
        q.set(c, Action::Left, 2.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(q.sample_greedy(c, &mut rng));
        }
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&Action::Down) && seen.contains(&Action::Left));
    }

    #[test]
    fn all_nan_cell_falls_back_to_first_action() {
        let mut q = ActionValues::with_shape(1, 1);
        let c = Cell::new(0, 0);
        for a in Action::ALL {
            q.set(c, a, f64::NAN);
        }
        assert!(q.greedy_actions(c).is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(q.sample_greedy(c, &mut rng), Action::Up);
    }
}
