//! Host-side knobs for circuit synthesis.

/// Default prefix of rendered gates.
pub const DEFAULT_GATE_PREFIX: &str = "TOF";

/// Configuration for expression building, gate rendering and embedding.
///
/// Use `SynthConfig::default()` for standard settings.
///
/// # Examples
///
/// ```
/// use revsynth_rs::config::SynthConfig;
///
/// let config = SynthConfig {
///     max_arity: None,
///     ..SynthConfig::default()
/// };
/// assert_eq!(config.gate_prefix, "TOF");
/// assert_eq!(config.max_width, Some(20));
/// ```
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Maximum number of input variables accepted (default: 16, `None` disables the check)
    pub max_arity: Option<usize>,
    /// Prefix used when rendering gates, followed by the 1-based target index (default: "TOF")
    pub gate_prefix: &'static str,
    /// Maximum bit width of an embedded mapping (default: 20, `None` leaves only the hard cap)
    pub max_width: Option<usize>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            max_arity: Some(16),
            gate_prefix: DEFAULT_GATE_PREFIX,
            max_width: Some(20),
        }
    }
}
