/// Game-rule constants used by the derivation engine.
///
/// These are literal rules of the tracked story's system, not user settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineRules;

impl EngineRules {
    /// Free points granted per level-up when a trait redirects them.
    pub const FREE_POINTS_PER_LEVEL: i64 = 3;

    /// From this level on, a trait multiplier above 1 also scales newly
    /// gained title rates.
    pub const TITLE_ESCALATION_LEVEL: u32 = 30;

    /// Max HP granted per point of Constitution.
    pub const HP_PER_CONSTITUTION: i64 = 10;

    /// Max MP granted per point of Mana.
    pub const MP_PER_MANA: i64 = 10;

    /// Level assumed as the baseline when no snapshot has been taken.
    pub const STARTING_LEVEL: u32 = 1;
}
