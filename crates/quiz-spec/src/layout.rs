use serde::{Deserialize, Serialize};

use crate::responsive::{Breakpoint, Breakpoints, ResponsiveValue};

/// Window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Sizes used by the onboarding hero: headline, subtitle and logo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroMetrics {
    pub base_font_size: f64,
    pub subtitle_font_size: f64,
    pub logo_size: f64,
}

/// Layout helpers for one viewport.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    viewport: Viewport,
    breakpoints: &'a Breakpoints,
}

impl<'a> Layout<'a> {
    pub fn new(viewport: Viewport, breakpoints: &'a Breakpoints) -> Self {
        Self {
            viewport,
            breakpoints,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn device_class(&self) -> DeviceClass {
        let width = self.viewport.width;
        if width < self.breakpoints.sm {
            DeviceClass::ExtraSmall
        } else if width < self.breakpoints.md {
            DeviceClass::Small
        } else if width < self.breakpoints.lg {
            DeviceClass::Medium
        } else if width < self.breakpoints.xl {
            DeviceClass::Large
        } else {
            DeviceClass::ExtraLarge
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.width < self.breakpoints.md
    }

    pub fn is_tablet(&self) -> bool {
        self.viewport.width >= self.breakpoints.md && self.viewport.width < self.breakpoints.lg
    }

    pub fn is_desktop(&self) -> bool {
        self.viewport.width >= self.breakpoints.lg
    }

    pub fn value<'v, T>(&self, table: &'v ResponsiveValue<T>) -> &'v T {
        table.resolve(self.breakpoints, self.viewport.width)
    }

    /// `percentage` of the viewport width, 0-100.
    pub fn width_percentage(&self, percentage: f64) -> f64 {
        percentage / 100.0 * self.viewport.width
    }

    /// `percentage` of the viewport height, 0-100.
    pub fn height_percentage(&self, percentage: f64) -> f64 {
        percentage / 100.0 * self.viewport.height
    }

    /// Width of the centered content column.
    pub fn container_width(&self) -> f64 {
        let width = self.viewport.width;
        let table = ResponsiveValue::new(width)
            .at(Breakpoint::Md, (width * 0.9).min(700.0))
            .at(Breakpoint::Lg, (width * 0.8).min(900.0))
            .at(Breakpoint::Xl, (width * 0.7).min(1100.0));
        *self.value(&table)
    }

    pub fn hero_metrics(&self) -> HeroMetrics {
        let Viewport { width, height } = self.viewport;

        let base_font_size = *self.value(
            &ResponsiveValue::new((width * 0.15).min(height * 0.1))
                .at(Breakpoint::Md, (width * 0.12).min(height * 0.09))
                .at(Breakpoint::Lg, (width * 0.08).min(height * 0.08))
                .at(Breakpoint::Xl, (width * 0.06).min(height * 0.07)),
        );
        let subtitle_font_size = *self.value(
            &ResponsiveValue::new(base_font_size * 0.25)
                .at(Breakpoint::Lg, (base_font_size * 0.2).max(16.0)),
        );
        let logo_size = *self.value(
            &ResponsiveValue::new(width * 0.3)
                .at(Breakpoint::Md, width * 0.25)
                .at(Breakpoint::Lg, (width * 0.18).min(250.0)),
        );

        HeroMetrics {
            base_font_size,
            subtitle_font_size,
            logo_size,
        }
    }
}
