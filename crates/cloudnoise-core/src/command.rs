//! The shared colour buffer and the commands that mutate it.
//!
//! All in-place mutation goes through [`ColourGrid::apply`]. Readers only get
//! shared access to the cells.
use log::trace;

use crate::colour::Colour;
use crate::error::Result;
use crate::grid::Grid;
use crate::tone::{to_colour, xor_filter, ToneCurve};

/// Operations a user can issue against the colour grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Re-map every cell through the contrast/brightness tone curve.
    Adjust { contrast: f32, brightness: f32 },
    /// XOR every cell with `mask`.
    Filter { mask: Colour },
    /// Export request; leaves the grid untouched.
    Save,
    /// Usage request; leaves the grid untouched.
    Help,
}

impl Command {
    /// `Filter` with [`Colour::FILTER_MASK`].
    pub fn filter() -> Self {
        Command::Filter { mask: Colour::FILTER_MASK }
    }

    /// Whether applying this command changes any cell.
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Adjust { .. } | Command::Filter { .. })
    }
}

/// Owned greyscale (until filtered) colour buffer produced by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourGrid {
    cells: Grid<Colour>,
}

impl ColourGrid {
    /// Tone-map a normalized noise field.
    pub fn from_noise(noise: &Grid<f32>) -> Self {
        Self { cells: noise.map(|&v| to_colour(v)) }
    }

    #[cfg(test)]
    pub(crate) fn from_grid(cells: Grid<Colour>) -> Self {
        Self { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Colour {
        *self.cells.get(row, col)
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Colour> {
        self.cells.rows()
    }

    /// Apply `command`. Inputs are validated before any cell is touched, so a
    /// failed command leaves the grid unchanged.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Adjust { contrast, brightness } => {
                let curve = ToneCurve::new(contrast, brightness)?;
                // Cells are greyscale after tone mapping; red carries the intensity.
                for cell in self.cells.iter_mut() {
                    let v = cell.r as f32 / 255.0;
                    *cell = to_colour(curve.apply(v));
                }
                trace!("adjusted {} cells (contrast {contrast}, brightness {brightness})", self.cells.len());
            }
            Command::Filter { mask } => {
                for cell in self.cells.iter_mut() {
                    *cell = xor_filter(*cell, mask);
                }
                trace!("filtered {} cells with mask {mask:?}", self.cells.len());
            }
            Command::Save | Command::Help => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoiseError;
    use crate::noise::blend;
    use crate::random_field::{generate, RandomSource};

    fn sample_grid() -> ColourGrid {
        let base = generate(16, 16, &mut RandomSource::from_seed(42)).unwrap();
        ColourGrid::from_noise(&blend(&base, 4).unwrap())
    }

    #[test]
    fn from_noise_is_greyscale() {
        let grid = sample_grid();
        assert_eq!((grid.width(), grid.height()), (16, 16));
        for row in grid.rows() {
            for c in row {
                assert!(c.r == c.g && c.g == c.b);
            }
        }
    }

    #[test]
    fn filter_twice_restores_grid() {
        let original = sample_grid();
        let mut grid = original.clone();
        grid.apply(Command::filter()).unwrap();
        assert_ne!(grid, original);
        grid.apply(Command::Filter { mask: Colour::new(127, 127, 254) }).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn neutral_adjust_keeps_cells() {
        let original = sample_grid();
        let mut grid = original.clone();
        grid.apply(Command::Adjust { contrast: 0.0, brightness: 0.0 }).unwrap();
        assert_eq!(grid, original);
    }

    #[test]
    fn adjust_rebuilds_greyscale_from_red() {
        let cells = Grid::new(2, 2, Colour::new(100, 7, 250)).unwrap();
        let mut grid = ColourGrid::from_grid(cells);
        grid.apply(Command::Adjust { contrast: 0.0, brightness: 10.0 }).unwrap();
        assert_eq!(grid.get(1, 1), Colour::grey(110));
    }

    #[test]
    fn adjust_clamps_channels() {
        let mut grid = sample_grid();
        grid.apply(Command::Adjust { contrast: 0.0, brightness: 255.0 }).unwrap();
        assert!(grid.rows().flatten().all(|&c| c == Colour::WHITE));
    }

    #[test]
    fn rejected_adjust_leaves_grid_untouched() {
        let original = sample_grid();
        let mut grid = original.clone();
        let err = grid.apply(Command::Adjust { contrast: 258.9, brightness: 0.0 }).unwrap_err();
        assert_eq!(err, NoiseError::InvalidContrast(258.9));
        assert_eq!(grid, original);
    }

    #[test]
    fn save_and_help_do_not_mutate() {
        let original = sample_grid();
        let mut grid = original.clone();
        grid.apply(Command::Save).unwrap();
        grid.apply(Command::Help).unwrap();
        assert_eq!(grid, original);
        assert!(!Command::Save.mutates() && !Command::Help.mutates());
        assert!(Command::filter().mutates());
    }
}
