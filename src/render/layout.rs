//! Fit-to-width scale policy.

use crate::document::PageSize;

/// Default width of the area the canvas is fitted into.
pub const DEFAULT_CONTAINER_WIDTH: u32 = 1120;
/// Horizontal breathing room subtracted from the container width.
pub const DEFAULT_MARGIN: u32 = 20;
/// Cap so huge containers don't blow pages up past a comfortable size.
pub const DEFAULT_MAX_WIDTH: u32 = 1100;

/// Fits page width into the container, capped at `max_width` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitWidth {
    pub container_width: u32,
    pub margin: u32,
    pub max_width: u32,
}

impl Default for FitWidth {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_WIDTH,
            margin: DEFAULT_MARGIN,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl FitWidth {
    /// Target pixel width for a page
    pub fn target_width(&self) -> u32 {
        self.container_width
            .saturating_sub(self.margin)
            .min(self.max_width)
            .max(1)
    }

    /// Scale that makes `size` exactly `target_width` pixels wide
    pub fn scale_for(&self, size: PageSize) -> f32 {
        if size.width_pt <= 0.0 {
            return 1.0;
        }
        self.target_width() as f32 / size.width_pt
    }

    /// Copy with a different container width
    pub fn with_container_width(self, container_width: u32) -> Self {
        Self {
            container_width,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A4: PageSize = PageSize {
        width_pt: 595.0,
        height_pt: 842.0,
    };

    #[test]
    fn narrow_container_uses_width_minus_margin() {
        let fit = FitWidth::default().with_container_width(615);
        assert_eq!(fit.target_width(), 595);
        assert!((fit.scale_for(A4) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn wide_container_is_capped() {
        let fit = FitWidth::default().with_container_width(4000);
        assert_eq!(fit.target_width(), 1100);
        let scale = fit.scale_for(PageSize::LETTER);
        assert!((scale - 1100.0 / 612.0).abs() < 1e-6);
    }

    #[test]
    fn tiny_container_never_collapses_to_zero() {
        let fit = FitWidth::default().with_container_width(5);
        assert_eq!(fit.target_width(), 1);
        assert!(fit.scale_for(A4) > 0.0);
    }

    #[test]
    fn zero_width_page_falls_back_to_unit_scale() {
        let degenerate = PageSize {
            width_pt: 0.0,
            height_pt: 10.0,
        };
        assert_eq!(FitWidth::default().scale_for(degenerate), 1.0);
    }
}
