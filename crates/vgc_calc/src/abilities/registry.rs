use crate::abilities::hooks::AbilityHooks;
use crate::abilities::implementations::{base_power, final_modifiers, immunity, stat_modifiers};
use crate::abilities::AbilityId;
use crate::natures::BattleStat;
use crate::types::Type;

pub static ABILITY_REGISTRY: [Option<AbilityHooks>; AbilityId::COUNT] = {
    let mut registry: [Option<AbilityHooks>; AbilityId::COUNT] = [None; AbilityId::COUNT];

    // =========================================================================
    // Base Power Modifiers (OnModifyBasePower)
    // =========================================================================
    registry[AbilityId::Technician as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::technician),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SheerForce as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::sheer_force),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ToughClaws as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::tough_claws),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::IronFist as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::iron_fist),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::RockyPayload as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::rocky_payload),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Sharpness as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::sharpness),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::StrongJaw as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::strong_jaw),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SupremeOverlord as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::supreme_overlord),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MegaLauncher as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::mega_launcher),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Reckless as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::reckless),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SandForce as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::sand_force),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SteelySpirit as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::steely_spirit),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Transistor as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::transistor),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::DragonsMaw as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::dragons_maw),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Analytic as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::analytic),
        ..AbilityHooks::NONE
    });

    // Both halves: boosts its own moves, softens incoming ones
    registry[AbilityId::WaterBubble as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::water_bubble),
        on_defender_final_mod: Some(final_modifiers::heatproof),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::PunkRock as usize] = Some(AbilityHooks {
        on_modify_base_power: Some(base_power::punk_rock),
        on_defender_final_mod: Some(final_modifiers::punk_rock),
        ..AbilityHooks::BREAKABLE
    });

    // =========================================================================
    // Type-changing (-ate) abilities
    // =========================================================================
    registry[AbilityId::Aerilate as usize] = Some(AbilityHooks {
        ate_type: Some(Type::Flying),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Pixilate as usize] = Some(AbilityHooks {
        ate_type: Some(Type::Fairy),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Refrigerate as usize] = Some(AbilityHooks {
        ate_type: Some(Type::Ice),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Galvanize as usize] = Some(AbilityHooks {
        ate_type: Some(Type::Electric),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Stat Modifiers (OnModifyAttack)
    // =========================================================================
    registry[AbilityId::HugePower as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PurePower as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Hustle as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::hustle),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::GorillaTactics as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::hustle),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Guts as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::guts),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::FlareBoost as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::flare_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ToxicBoost as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::toxic_boost),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::OrichalcumPulse as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::orichalcum_pulse),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::HadronEngine as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::hadron_engine),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Ruin auras (lower the stat on every other battler)
    // =========================================================================
    registry[AbilityId::TabletsOfRuin as usize] = Some(AbilityHooks {
        ruin: Some(BattleStat::Atk),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::VesselOfRuin as usize] = Some(AbilityHooks {
        ruin: Some(BattleStat::SpA),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SwordOfRuin as usize] = Some(AbilityHooks {
        ruin: Some(BattleStat::Def),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::BeadsOfRuin as usize] = Some(AbilityHooks {
        ruin: Some(BattleStat::SpD),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Attacker Final Modifiers (OnAttackerFinalMod)
    // =========================================================================
    registry[AbilityId::TintedLens as usize] = Some(AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::tinted_lens),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Sniper as usize] = Some(AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::sniper),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Neuroforce as usize] = Some(AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::neuroforce),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Defender Final Modifiers (OnDefenderFinalMod)
    // =========================================================================
    registry[AbilityId::Multiscale as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::multiscale),
        ..AbilityHooks::BREAKABLE
    });
    // Shadow Shield is not breakable
    registry[AbilityId::ShadowShield as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::multiscale),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::IceScales as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::ice_scales),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::Filter as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::SolidRock as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::PrismArmor as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Fluffy as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::fluffy),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::ThickFat as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::thick_fat),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::PurifyingSalt as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::purifying_salt),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::Heatproof as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::heatproof),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::FurCoat as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::fur_coat),
        ..AbilityHooks::BREAKABLE
    });
    // Tera Shell is applied to effectiveness directly and is not breakable
    registry[AbilityId::TeraShell as usize] = Some(AbilityHooks::NONE);

    // =========================================================================
    // Type Immunity (OnTypeImmunity)
    // =========================================================================
    registry[AbilityId::Levitate as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::ground),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::EarthEater as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::ground),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::FlashFire as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::fire),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::WellBakedBody as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::fire),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::VoltAbsorb as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::electric),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::MotorDrive as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::electric),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::LightningRod as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::electric),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::WaterAbsorb as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::water),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::StormDrain as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::water),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::DrySkin as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::water),
        on_defender_final_mod: Some(final_modifiers::dry_skin),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::SapSipper as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::grass),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::WindRider as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::wind_rider),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::Soundproof as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::soundproof),
        ..AbilityHooks::BREAKABLE
    });
    registry[AbilityId::Bulletproof as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::bulletproof),
        ..AbilityHooks::BREAKABLE
    });

    // =========================================================================
    // Handled directly by the pipeline
    // =========================================================================
    registry[AbilityId::Protosynthesis as usize] = Some(AbilityHooks::BREAKABLE);
    registry[AbilityId::QuarkDrive as usize] = Some(AbilityHooks::BREAKABLE);

    registry
};

/// Hooks for an ability, if it has any.
#[inline]
pub fn ability_hooks(ability: Option<AbilityId>) -> Option<&'static AbilityHooks> {
    ability.and_then(|id| ABILITY_REGISTRY[id as usize].as_ref())
}

/// Whether Mold Breaker and its variants ignore this ability.
#[inline]
pub fn is_breakable(ability: AbilityId) -> bool {
    ABILITY_REGISTRY[ability as usize].is_some_and(|hooks| hooks.breakable)
}
