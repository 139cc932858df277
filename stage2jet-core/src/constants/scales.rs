//! Energy Scales and Producer Defaults
//!
//! Hardware jet energies are integer counts. The physical transverse energy is
//! `hwPt * LSB`, a linear scale with zero intercept.

/// Default jet transverse-energy LSB (GeV per hardware count).
///
/// Stage 2 jets are read out in 0.5 GeV steps.
pub const DEFAULT_JET_LSB_GEV: f64 = 0.5;

/// Mass assigned to every converted jet (GeV).
///
/// The trigger measures energy deposits only, so jets are treated as massless.
pub const JET_MASS_GEV: f64 = 0.0;

/// Default input collection: jets from the Stage 2 main processor.
pub const DEFAULT_JET_SOURCE: &str = "caloStage2Digis:MP";

/// Name of the input-collection parameter.
pub const PARAM_JET_SOURCE: &str = "stage2JetSource";

/// Name of the energy-scale parameter.
pub const PARAM_JET_LSB: &str = "jetLsb";

/// Instance label of the central-jet product.
pub const CENTRAL_LABEL: &str = "Central";

/// Instance label of the forward-jet product.
pub const FORWARD_LABEL: &str = "Forward";

/// Maximum length of any input-tag component.
pub const MAX_TAG_COMPONENT_LEN: usize = 32;
