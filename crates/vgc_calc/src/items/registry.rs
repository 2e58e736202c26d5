use crate::items::hooks::ItemHooks;
use crate::items::implementations::*;
use crate::items::ItemId;
use crate::types::Type;

pub static ITEM_REGISTRY: [Option<ItemHooks>; ItemId::COUNT] = {
    let mut registry: [Option<ItemHooks>; ItemId::COUNT] = [None; ItemId::COUNT];

    // =========================================================================
    // Stat items
    // =========================================================================
    registry[ItemId::ChoiceBand as usize] = Some(ItemHooks {
        on_modify_attack: Some(on_modify_attack_choice_band),
        ..ItemHooks::NONE
    });
    registry[ItemId::ChoiceSpecs as usize] = Some(ItemHooks {
        on_modify_attack: Some(on_modify_attack_choice_specs),
        ..ItemHooks::NONE
    });
    registry[ItemId::AssaultVest as usize] = Some(ItemHooks {
        on_modify_defense: Some(on_modify_defense_assault_vest),
        ..ItemHooks::NONE
    });

    // =========================================================================
    // Final damage items
    // =========================================================================
    registry[ItemId::LifeOrb as usize] = Some(ItemHooks {
        on_attacker_final_mod: Some(on_final_mod_life_orb),
        ..ItemHooks::NONE
    });
    registry[ItemId::ExpertBelt as usize] = Some(ItemHooks {
        on_attacker_final_mod: Some(on_final_mod_expert_belt),
        ..ItemHooks::NONE
    });
    registry[ItemId::MuscleBand as usize] = Some(ItemHooks {
        on_attacker_final_mod: Some(on_final_mod_muscle_band),
        ..ItemHooks::NONE
    });
    registry[ItemId::WiseGlasses as usize] = Some(ItemHooks {
        on_attacker_final_mod: Some(on_final_mod_wise_glasses),
        ..ItemHooks::NONE
    });
    registry[ItemId::PunchingGlove as usize] = Some(ItemHooks {
        on_attacker_final_mod: Some(on_final_mod_punching_glove),
        ..ItemHooks::NONE
    });

    // =========================================================================
    // Base power items
    // =========================================================================
    registry[ItemId::NormalGem as usize] = Some(ItemHooks {
        on_modify_base_power: Some(on_modify_base_power_normal_gem),
        ..ItemHooks::NONE
    });
    let mask = Some(ItemHooks {
        on_modify_base_power: Some(on_modify_base_power_mask),
        ..ItemHooks::NONE
    });
    registry[ItemId::CornerstoneMask as usize] = mask;
    registry[ItemId::HearthflameMask as usize] = mask;
    registry[ItemId::WellspringMask as usize] = mask;

    registry[ItemId::SilkScarf as usize] = ItemHooks::boosting(Type::Normal);
    registry[ItemId::Charcoal as usize] = ItemHooks::boosting(Type::Fire);
    registry[ItemId::MysticWater as usize] = ItemHooks::boosting(Type::Water);
    registry[ItemId::Magnet as usize] = ItemHooks::boosting(Type::Electric);
    registry[ItemId::MiracleSeed as usize] = ItemHooks::boosting(Type::Grass);
    registry[ItemId::NeverMeltIce as usize] = ItemHooks::boosting(Type::Ice);
    registry[ItemId::BlackBelt as usize] = ItemHooks::boosting(Type::Fighting);
    registry[ItemId::PoisonBarb as usize] = ItemHooks::boosting(Type::Poison);
    registry[ItemId::SoftSand as usize] = ItemHooks::boosting(Type::Ground);
    registry[ItemId::SharpBeak as usize] = ItemHooks::boosting(Type::Flying);
    registry[ItemId::TwistedSpoon as usize] = ItemHooks::boosting(Type::Psychic);
    registry[ItemId::SilverPowder as usize] = ItemHooks::boosting(Type::Bug);
    registry[ItemId::HardStone as usize] = ItemHooks::boosting(Type::Rock);
    registry[ItemId::SpellTag as usize] = ItemHooks::boosting(Type::Ghost);
    registry[ItemId::DragonFang as usize] = ItemHooks::boosting(Type::Dragon);
    registry[ItemId::BlackGlasses as usize] = ItemHooks::boosting(Type::Dark);
    registry[ItemId::MetalCoat as usize] = ItemHooks::boosting(Type::Steel);
    registry[ItemId::FairyFeather as usize] = ItemHooks::boosting(Type::Fairy);

    registry[ItemId::FlamePlate as usize] = ItemHooks::boosting(Type::Fire);
    registry[ItemId::SplashPlate as usize] = ItemHooks::boosting(Type::Water);
    registry[ItemId::ZapPlate as usize] = ItemHooks::boosting(Type::Electric);
    registry[ItemId::MeadowPlate as usize] = ItemHooks::boosting(Type::Grass);
    registry[ItemId::IciclePlate as usize] = ItemHooks::boosting(Type::Ice);
    registry[ItemId::FistPlate as usize] = ItemHooks::boosting(Type::Fighting);
    registry[ItemId::ToxicPlate as usize] = ItemHooks::boosting(Type::Poison);
    registry[ItemId::EarthPlate as usize] = ItemHooks::boosting(Type::Ground);
    registry[ItemId::SkyPlate as usize] = ItemHooks::boosting(Type::Flying);
    registry[ItemId::MindPlate as usize] = ItemHooks::boosting(Type::Psychic);
    registry[ItemId::InsectPlate as usize] = ItemHooks::boosting(Type::Bug);
    registry[ItemId::StonePlate as usize] = ItemHooks::boosting(Type::Rock);
    registry[ItemId::SpookyPlate as usize] = ItemHooks::boosting(Type::Ghost);
    registry[ItemId::DracoPlate as usize] = ItemHooks::boosting(Type::Dragon);
    registry[ItemId::DreadPlate as usize] = ItemHooks::boosting(Type::Dark);
    registry[ItemId::IronPlate as usize] = ItemHooks::boosting(Type::Steel);
    registry[ItemId::PixiePlate as usize] = ItemHooks::boosting(Type::Fairy);

    // =========================================================================
    // Defensive items
    // =========================================================================
    registry[ItemId::AirBalloon as usize] = Some(ItemHooks {
        on_type_immunity: Some(on_type_immunity_air_balloon),
        ..ItemHooks::NONE
    });

    registry[ItemId::OccaBerry as usize] = ItemHooks::berry(Type::Fire);
    registry[ItemId::PasshoBerry as usize] = ItemHooks::berry(Type::Water);
    registry[ItemId::WacanBerry as usize] = ItemHooks::berry(Type::Electric);
    registry[ItemId::RindoBerry as usize] = ItemHooks::berry(Type::Grass);
    registry[ItemId::YacheBerry as usize] = ItemHooks::berry(Type::Ice);
    registry[ItemId::ChopleBerry as usize] = ItemHooks::berry(Type::Fighting);
    registry[ItemId::KebiaBerry as usize] = ItemHooks::berry(Type::Poison);
    registry[ItemId::ShucaBerry as usize] = ItemHooks::berry(Type::Ground);
    registry[ItemId::CobaBerry as usize] = ItemHooks::berry(Type::Flying);
    registry[ItemId::PayapaBerry as usize] = ItemHooks::berry(Type::Psychic);
    registry[ItemId::TangaBerry as usize] = ItemHooks::berry(Type::Bug);
    registry[ItemId::ChartiBerry as usize] = ItemHooks::berry(Type::Rock);
    registry[ItemId::KasibBerry as usize] = ItemHooks::berry(Type::Ghost);
    registry[ItemId::HabanBerry as usize] = ItemHooks::berry(Type::Dragon);
    registry[ItemId::ColburBerry as usize] = ItemHooks::berry(Type::Dark);
    registry[ItemId::BabiriBerry as usize] = ItemHooks::berry(Type::Steel);
    registry[ItemId::RoseliBerry as usize] = ItemHooks::berry(Type::Fairy);
    registry[ItemId::ChilanBerry as usize] = ItemHooks::berry(Type::Normal);

    registry
};

/// Hooks for a held item, if it has any.
#[inline]
pub fn item_hooks(item: Option<ItemId>) -> Option<&'static ItemHooks> {
    item.and_then(|id| ITEM_REGISTRY[id as usize].as_ref())
}
