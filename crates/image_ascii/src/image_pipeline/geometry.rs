/// Output grid dimensions in characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridResolution {
    pub columns: u16,
    pub rows: u16,
}

impl GridResolution {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Derives the row count from the source image's aspect ratio:
    /// `rows = round(columns * height / width)`, clamped to at least one
    /// row. Returns `None` for a degenerate source.
    pub fn derive(columns: u16, source_width: u32, source_height: u32) -> Option<Self> {
        if source_width == 0 || source_height == 0 {
            return None;
        }

        let columns = columns.max(1);
        let image_ratio = source_height as f32 / source_width as f32;
        let rows = ((f32::from(columns) * image_ratio).round() as u16).max(1);
        Some(Self { columns, rows })
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_source_aspect_ratio() {
        let resolution = GridResolution::derive(100, 1000, 500).unwrap();
        assert_eq!(resolution, GridResolution::new(100, 50));
    }

    #[test]
    fn rows_are_rounded_to_nearest() {
        // 80 * 601 / 800 = 60.1 -> 60; 80 * 607 / 800 = 60.7 -> 61.
        assert_eq!(GridResolution::derive(80, 800, 601).unwrap().rows, 60);
        assert_eq!(GridResolution::derive(80, 800, 607).unwrap().rows, 61);
    }

    #[test]
    fn degenerate_source_yields_none() {
        assert!(GridResolution::derive(100, 0, 500).is_none());
        assert!(GridResolution::derive(100, 500, 0).is_none());
    }

    #[test]
    fn at_least_one_row_and_column() {
        let resolution = GridResolution::derive(0, 10_000, 1).unwrap();
        assert_eq!(resolution, GridResolution::new(1, 1));
    }

    #[test]
    fn cell_count_is_columns_times_rows() {
        assert_eq!(GridResolution::new(120, 45).cell_count(), 5400);
    }
}
