use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named viewport classes, smallest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }
}

/// Minimum viewport widths, in logical pixels, for each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Breakpoints {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
            xxl: 1536.0,
        }
    }
}

impl Breakpoints {
    pub fn threshold(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// Breakpoints paired with their thresholds, largest threshold first.
    pub fn descending(&self) -> [(Breakpoint, f64); 5] {
        let mut ordered = Breakpoint::ALL.map(|breakpoint| (breakpoint, self.threshold(breakpoint)));
        ordered.sort_by(|left, right| right.1.total_cmp(&left.1));
        ordered
    }
}

/// A base value plus optional overrides per breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveValue<T> {
    pub base: T,
    #[serde(flatten)]
    pub overrides: BTreeMap<Breakpoint, T>,
}

impl<T> ResponsiveValue<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: BTreeMap::new(),
        }
    }

    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.overrides.insert(breakpoint, value);
        self
    }

    /// Value of the largest breakpoint whose threshold fits in `width`, or the
    /// base value when none does.
    pub fn resolve(&self, breakpoints: &Breakpoints, width: f64) -> &T {
        breakpoints
            .descending()
            .into_iter()
            .filter(|(_, threshold)| *threshold <= width)
            .find_map(|(breakpoint, _)| self.overrides.get(&breakpoint))
            .unwrap_or(&self.base)
    }
}
