// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver configuration: band thresholds and fallback toggles.

/// Errors produced when validating a [`ResolverConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A threshold was NaN or infinite.
    #[error("band threshold {0} is not finite")]
    NotFinite(f64),
    /// The leading threshold must lie in `[0, 0.5]`.
    #[error("leading band threshold {0} is outside [0, 0.5]")]
    Leading(f64),
    /// The trailing threshold must lie in `[0.5, 1]`.
    #[error("trailing band threshold {0} is outside [0.5, 1]")]
    Trailing(f64),
}

/// Fractional thresholds splitting an item's extent into bands.
///
/// With the defaults an item of extent `L` has a leading band `[0, 0.25·L)`,
/// a center band `[0.25·L, 0.75·L]`, and a trailing band `(0.75·L, L]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandThresholds {
    leading: f64,
    trailing: f64,
}

impl BandThresholds {
    /// The 25% / 75% split.
    pub const DEFAULT: Self = Self {
        leading: 0.25,
        trailing: 0.75,
    };

    /// Creates thresholds, validating `0 <= leading <= 0.5 <= trailing <= 1`.
    pub fn new(leading: f64, trailing: f64) -> Result<Self, ConfigError> {
        for value in [leading, trailing] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(value));
            }
        }
        if !(0.0..=0.5).contains(&leading) {
            return Err(ConfigError::Leading(leading));
        }
        if !(0.5..=1.0).contains(&trailing) {
            return Err(ConfigError::Trailing(trailing));
        }
        Ok(Self { leading, trailing })
    }

    /// Fraction of the extent where the center band starts.
    #[must_use]
    pub const fn leading(&self) -> f64 {
        self.leading
    }

    /// Fraction of the extent where the center band ends.
    #[must_use]
    pub const fn trailing(&self) -> f64 {
        self.trailing
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Knobs for [`Resolver`](crate::Resolver).
///
/// The defaults reproduce the full resolution pipeline. Disabling a fallback
/// makes the corresponding step report "no item" instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverConfig {
    /// Band thresholds applied to the hovered item.
    pub bands: BandThresholds,
    /// Snap to the nearest item along the layout axis when nothing is hit.
    pub axis_probe: bool,
    /// Fall back to a bottom-level group's first item when nothing is hit.
    pub group_fallback: bool,
}

impl ResolverConfig {
    /// Replaces the band thresholds.
    #[must_use]
    pub fn with_bands(mut self, bands: BandThresholds) -> Self {
        self.bands = bands;
        self
    }

    /// Enables or disables axis probing.
    #[must_use]
    pub fn with_axis_probe(mut self, enabled: bool) -> Self {
        self.axis_probe = enabled;
        self
    }

    /// Enables or disables the group fallback.
    #[must_use]
    pub fn with_group_fallback(mut self, enabled: bool) -> Self {
        self.group_fallback = enabled;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            bands: BandThresholds::DEFAULT,
            axis_probe: true,
            group_fallback: true,
        }
    }
}
