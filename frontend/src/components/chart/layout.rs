/// Pixel geometry of the chart, shared by drawing and pointer hit-testing.
///
/// The plotting area starts after the left margin and the y label area and
/// ends at the right margin. Day `i` of `n` sits at x = i on an axis running
/// from 0 to `x_span(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotLayout {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl PlotLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: 15,
            x_label_area: 35,
            y_label_area: 50,
        }
    }

    pub fn plot_left(&self) -> f64 {
        (self.margin + self.y_label_area) as f64
    }

    pub fn plot_right(&self) -> f64 {
        self.width.saturating_sub(self.margin) as f64
    }

    /// Upper bound of the x axis for `len` days (never zero)
    pub fn x_span(&self, len: usize) -> f64 {
        len.saturating_sub(1).max(1) as f64
    }

    fn step(&self, len: usize) -> f64 {
        (self.plot_right() - self.plot_left()) / self.x_span(len)
    }

    /// Pixel x of day `index`
    pub fn x_for_index(&self, index: usize, len: usize) -> f64 {
        self.plot_left() + self.step(len) * index as f64
    }

    /// Pixel x of day `index` as a percentage of the full chart width
    pub fn x_percent(&self, index: usize, len: usize) -> f64 {
        if self.width == 0 {
            return 0.0;
        }
        self.x_for_index(index, len) / self.width as f64 * 100.0
    }

    /// Nearest day to pixel `x`, or `None` when the pointer is more than half
    /// a step outside the plotted days
    pub fn index_at(&self, x: f64, len: usize) -> Option<usize> {
        if len == 0 || self.plot_right() <= self.plot_left() {
            return None;
        }

        let raw = (x - self.plot_left()) / self.step(len);
        let last = (len - 1) as f64;
        if raw < -0.5 || raw > last + 0.5 {
            return None;
        }
        Some(raw.round().clamp(0.0, last) as usize)
    }
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self::new(800, 350)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_bounds() {
        let layout = PlotLayout::new(800, 350);
        assert_eq!(layout.plot_left(), 65.0);
        assert_eq!(layout.plot_right(), 785.0);
    }

    #[test]
    fn test_index_at_edges() {
        let layout = PlotLayout::default();
        assert_eq!(layout.index_at(65.0, 30), Some(0));
        assert_eq!(layout.index_at(785.0, 30), Some(29));
        assert_eq!(layout.index_at(795.0, 30), Some(29));
    }

    #[test]
    fn test_index_at_rounds_to_nearest_day() {
        let layout = PlotLayout::default();
        let step = 720.0 / 29.0;
        assert_eq!(layout.index_at(65.0 + step * 10.0, 30), Some(10));
        assert_eq!(layout.index_at(65.0 + step * 10.4, 30), Some(10));
        assert_eq!(layout.index_at(65.0 + step * 10.6, 30), Some(11));
    }

    #[test]
    fn test_index_at_outside_plot() {
        let layout = PlotLayout::default();
        assert_eq!(layout.index_at(10.0, 30), None);
        assert_eq!(layout.index_at(65.0 - 120.0, 7), None);
        assert_eq!(layout.index_at(400.0, 0), None);
    }

    #[test]
    fn test_x_for_index_round_trips() {
        let layout = PlotLayout::default();
        for len in [7, 14, 30] {
            for index in 0..len {
                assert_eq!(layout.index_at(layout.x_for_index(index, len), len), Some(index));
            }
        }
    }

    #[test]
    fn test_single_day_sits_on_the_left_edge() {
        let layout = PlotLayout::default();
        assert_eq!(layout.x_span(1), 1.0);
        assert_eq!(layout.x_for_index(0, 1), 65.0);
        assert_eq!(layout.index_at(70.0, 1), Some(0));
        assert_eq!(layout.index_at(700.0, 1), None);
    }

    #[test]
    fn test_x_percent() {
        let layout = PlotLayout::new(1000, 400);
        assert!((layout.x_percent(0, 7) - 6.5).abs() < 1e-9);
        assert!((layout.x_percent(6, 7) - 98.5).abs() < 1e-9);
        assert_eq!(PlotLayout::new(0, 0).x_percent(3, 7), 0.0);
    }
}
