pub mod base_power;
pub mod final_modifiers;
pub mod immunity;
pub mod stat_modifiers;
