use super::*;

#[test]
fn test_ability_lookup() {
    assert_eq!(AbilityId::from_str("levitate"), Some(AbilityId::Levitate));
    assert_eq!(AbilityId::from_str("Tablets of Ruin"), Some(AbilityId::TabletsOfRuin));
    assert_eq!(AbilityId::from_str("dragons-maw"), Some(AbilityId::DragonsMaw));
    assert_eq!(AbilityId::from_str("Mind's Eye"), Some(AbilityId::MindsEye));
    assert_eq!(AbilityId::from_str("Stench"), None, "not damage-relevant");
}

#[test]
fn test_every_variant_round_trips_through_its_name() {
    for &ability in AbilityId::ALL {
        assert_eq!(
            AbilityId::from_str(ability.name()),
            Some(ability),
            "{} should resolve from its display name",
            ability.name()
        );
    }
}

#[test]
fn test_breakable_flags() {
    assert!(is_breakable(AbilityId::Multiscale));
    assert!(is_breakable(AbilityId::Levitate));
    assert!(is_breakable(AbilityId::Filter));
    assert!(!is_breakable(AbilityId::ShadowShield));
    assert!(!is_breakable(AbilityId::PrismArmor));
    assert!(!is_breakable(AbilityId::TeraShell));
    assert!(!is_breakable(AbilityId::Technician));
}

#[test]
fn test_registry_entries() {
    let hooks = ability_hooks(Some(AbilityId::Pixilate)).expect("pixilate registered");
    assert_eq!(hooks.ate_type, Some(crate::types::Type::Fairy));

    let hooks = ability_hooks(Some(AbilityId::SwordOfRuin)).expect("sword registered");
    assert_eq!(hooks.ruin, Some(crate::natures::BattleStat::Def));

    let hooks = ability_hooks(Some(AbilityId::DrySkin)).expect("dry skin registered");
    assert!(hooks.on_type_immunity.is_some());
    assert!(hooks.on_defender_final_mod.is_some());

    assert!(ability_hooks(None).is_none());
    assert!(AbilityId::MoldBreaker.breaks_molds());
    assert!(!AbilityId::Scrappy.breaks_molds());
}
