use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

/// A fixed-size 2D grid stored row-major.
/// `row` runs over `0..height`, `col` over `0..width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>")]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// Unchecked wire form; every deserialized grid passes through [`Grid::from_vec`].
#[derive(Deserialize)]
struct RawGrid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = NoiseError;

    fn try_from(raw: RawGrid<T>) -> Result<Self> {
        Grid::from_vec(raw.width, raw.height, raw.data)
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid filled with the given value.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self { data: vec![fill; width * height], width, height })
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Ok(Self { data, width, height })
    }

    /// Wrap an existing row-major buffer. `data.len()` must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        if width.checked_mul(height) != Some(data.len()) {
            return Err(NoiseError::DataLength { len: data.len(), width, height });
        }
        Ok(Self { data, width, height })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.width + col]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate rows top to bottom; every row has exactly `width` cells.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.width)
    }

    /// Produce a new grid of the same shape by mapping every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid { data: self.data.iter().map(f).collect(), width: self.width, height: self.height }
    }
}

impl Grid<f32> {
    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimension { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(3, 2, |r, c| r * 10 + c).unwrap();
        assert_eq!(g.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(*g.get(1, 2), 12);
    }

    #[test]
    fn rows_have_uniform_width() {
        let g = Grid::new(5, 3, 0u8).unwrap();
        assert_eq!(g.rows().count(), 3);
        assert!(g.rows().all(|row| row.len() == 5));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Grid::new(0, 4, 0.0f32),
            Err(NoiseError::InvalidDimension { width: 0, height: 4 })
        );
        assert!(Grid::from_fn(4, 0, |_, _| 0.0f32).is_err());
    }

    #[test]
    fn from_vec_checks_length() {
        assert_eq!(
            Grid::from_vec(2, 2, vec![1, 2, 3]),
            Err(NoiseError::DataLength { len: 3, width: 2, height: 2 })
        );
        assert!(Grid::from_vec(2, 2, vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn min_and_max_values() {
        let g = Grid::from_fn(4, 4, |r, c| if (r, c) == (3, 1) { 0.25f32 } else { 0.0 }).unwrap();
        assert_eq!(*g.get(3, 1), 0.25);
        assert_eq!(g.max_value(), 0.25);
        assert_eq!(g.min_value(), 0.0);
    }

    #[test]
    fn deserialize_accepts_consistent_shape() {
        let g: Grid<f32> =
            serde_json::from_str(r#"{ "data": [0.0, 0.5, 1.0, 0.25], "width": 2, "height": 2 }"#).unwrap();
        assert_eq!(*g.get(1, 0), 1.0);
        assert_eq!(g.rows().count(), 2);
        let back: Grid<f32> = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialize_rejects_zero_dimensions() {
        let err = serde_json::from_str::<Grid<f32>>(r#"{ "data": [], "width": 0, "height": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("at least 1×1"), "unexpected error: {err}");
    }

    #[test]
    fn deserialize_rejects_mismatched_length() {
        let err = serde_json::from_str::<Grid<f32>>(r#"{ "data": [0.1, 0.2, 0.3], "width": 2, "height": 2 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("holds 3 cells, expected 2×2"), "unexpected error: {err}");
    }

    #[test]
    fn deserialize_rejects_overflowing_shape() {
        let json = format!(r#"{{ "data": [0.5], "width": {}, "height": 2 }}"#, usize::MAX);
        assert!(serde_json::from_str::<Grid<f32>>(&json).is_err());
    }
}
