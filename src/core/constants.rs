/// Influence and integration tuning constants.
///
/// These express the intended feel of the effect (cutoff distance, peak
/// push, convergence rate) and keep magic numbers out of the code.
// Influence cutoff distance (viewport pixels)
pub const DEFAULT_RADIUS: f32 = 150.0;

// Peak push at distance zero (viewport pixels)
pub const DEFAULT_MAX_DISPLACEMENT: f32 = 300.0;

// Per-frame convergence fraction, must stay in (0, 1]
pub const DEFAULT_LERP_FACTOR: f32 = 0.1;
pub const MIN_LERP_FACTOR: f32 = 1e-4;

// Below this distance the push direction is undefined; the field pushes
// along +X instead so no NaN can reach the commit stage
pub const ZERO_DISTANCE_EPS: f32 = 1e-6;
