//=========================================================================
// Game Constants
//=========================================================================
//
// Fixed rules of the Chakravyuh. Not externally configurable.
//
//=========================================================================

/// Number of concentric layers in the formation.
pub const TOTAL_LAYERS: u32 = 7;

/// Questions that must be answered to clear one layer.
pub const QUESTIONS_PER_LAYER: usize = 10;

/// Total time budget for a run, in seconds (30 minutes).
pub const TOTAL_TIME_SEC: u32 = 30 * 60;

/// Points granted per correct answer. Wrong answers cost nothing.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Every question offers exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Longest team name the entry screen accepts.
pub const TEAM_NAME_MAX_LEN: usize = 20;

/// Below this many seconds the clock is shown as critical.
pub const TIME_CRITICAL_SEC: u32 = 5 * 60;

/// Sliding offset between consecutive layers in the template pool.
pub(crate) const LAYER_TEMPLATE_STRIDE: usize = 3;
