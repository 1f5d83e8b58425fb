// Pure displacement state: the unit registry, pointer influence, and the
// per-frame integration step. No platform types here, so the full update
// path runs host-side in tests without a rendering surface.

use super::constants::*;
use glam::Vec2;

/// Influence and integration tuning. Construct freely, then rely on
/// [`MagnetConfig::clamped`] (applied by [`MagnetField::new`]) to keep the
/// values usable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetConfig {
    /// Influence cutoff distance in viewport pixels.
    pub radius: f32,
    /// Push distance at the pointer itself, falling off linearly to zero
    /// at `radius`.
    pub max_displacement: f32,
    /// Fraction of the remaining distance to target closed each frame.
    pub lerp_factor: f32,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            max_displacement: DEFAULT_MAX_DISPLACEMENT,
            lerp_factor: DEFAULT_LERP_FACTOR,
        }
    }
}

impl MagnetConfig {
    /// Replace non-finite or out-of-range values with defaults and clamp
    /// `lerp_factor` into (0, 1]. A poisoned config would otherwise feed
    /// NaN into every unit's offsets, which the lerp never recovers from.
    pub fn clamped(mut self) -> Self {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            self.radius = DEFAULT_RADIUS;
        }
        if !self.max_displacement.is_finite() || self.max_displacement < 0.0 {
            self.max_displacement = DEFAULT_MAX_DISPLACEMENT;
        }
        if !self.lerp_factor.is_finite() {
            self.lerp_factor = DEFAULT_LERP_FACTOR;
        }
        self.lerp_factor = self.lerp_factor.clamp(MIN_LERP_FACTOR, 1.0);
        self
    }
}

/// One word or letter. `rest` is the bounding-box center measured at
/// registration; both offsets are relative to it. `target` is written only
/// by the influence step, `current` only by the integration step.
#[derive(Clone, Copy, Debug)]
pub struct TextUnit {
    pub rest: Vec2,
    pub current: Vec2,
    pub target: Vec2,
}

impl TextUnit {
    pub fn at_rest(rest: Vec2) -> Self {
        Self {
            rest,
            current: Vec2::ZERO,
            target: Vec2::ZERO,
        }
    }
}

/// Target offset for a unit at `rest` while the pointer sits at `pointer`:
/// pushed straight away from the pointer, force falling off linearly from
/// `max_displacement` at distance 0 to zero at `radius`. Outside the
/// radius the unit relaxes back to rest. A pointer exactly on the rest
/// position pushes along +X at full force so the result stays finite.
pub fn displacement_target(rest: Vec2, pointer: Vec2, config: &MagnetConfig) -> Vec2 {
    let delta = rest - pointer;
    let distance = delta.length();
    if distance >= config.radius {
        return Vec2::ZERO;
    }
    let force = (1.0 - distance / config.radius) * config.max_displacement;
    if distance < ZERO_DISTANCE_EPS {
        return Vec2::X * force;
    }
    delta / distance * force
}

/// Ordered registry of every decomposed unit, in document order. The order
/// is set once at registration and stays stable for the page lifetime.
#[derive(Clone, Debug)]
pub struct MagnetField {
    pub units: Vec<TextUnit>,
    config: MagnetConfig,
}

impl MagnetField {
    pub fn new(config: MagnetConfig) -> Self {
        Self {
            units: Vec::new(),
            config: config.clamped(),
        }
    }

    pub fn config(&self) -> &MagnetConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append a unit at its measured rest position with zero offsets.
    pub fn register(&mut self, rest: Vec2) {
        self.units.push(TextUnit::at_rest(rest));
    }

    /// Rewrite one unit's rest position after a re-measure. Offsets are
    /// untouched; an out-of-range index is ignored.
    pub fn set_rest(&mut self, index: usize, rest: Vec2) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.rest = rest;
        }
    }

    /// Influence step: recompute every unit's target from one pointer
    /// sample (viewport coordinates). O(units) per sample.
    pub fn apply_influence(&mut self, pointer: Vec2) {
        let config = self.config;
        for unit in &mut self.units {
            unit.target = displacement_target(unit.rest, pointer, &config);
        }
    }

    /// Integration step: move each current offset a fixed fraction of the
    /// way to its target. Runs once per animation frame; with a constant
    /// target the remaining distance shrinks by `1 - lerp_factor` per tick.
    pub fn integrate(&mut self) {
        let lerp = self.config.lerp_factor;
        for unit in &mut self.units {
            unit.current += (unit.target - unit.current) * lerp;
        }
    }
}
