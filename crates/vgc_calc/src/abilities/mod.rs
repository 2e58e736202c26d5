//! Ability identifiers, hooks and registry.
//!
//! Only abilities that change a damage number are listed. Anything else
//! supplied by a caller resolves to "no ability".

use crate::macros::identifiers;

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::AbilityHooks;
pub use registry::{ability_hooks, is_breakable, ABILITY_REGISTRY};

identifiers! {
    /// Damage-relevant abilities.
    pub enum AbilityId (kind = "ability", lookup = ABILITY_LOOKUP) {
        Adaptability => "adaptability", "Adaptability";
        Aerilate => "aerilate", "Aerilate";
        Analytic => "analytic", "Analytic";
        BeadsOfRuin => "beadsofruin", "Beads of Ruin";
        Bulletproof => "bulletproof", "Bulletproof";
        Commander => "commander", "Commander";
        DragonsMaw => "dragonsmaw", "Dragon's Maw";
        DrySkin => "dryskin", "Dry Skin";
        EarthEater => "eartheater", "Earth Eater";
        Filter => "filter", "Filter";
        FlareBoost => "flareboost", "Flare Boost";
        FlashFire => "flashfire", "Flash Fire";
        Fluffy => "fluffy", "Fluffy";
        FurCoat => "furcoat", "Fur Coat";
        Galvanize => "galvanize", "Galvanize";
        GorillaTactics => "gorillatactics", "Gorilla Tactics";
        Guts => "guts", "Guts";
        HadronEngine => "hadronengine", "Hadron Engine";
        Heatproof => "heatproof", "Heatproof";
        HugePower => "hugepower", "Huge Power";
        Hustle => "hustle", "Hustle";
        IceScales => "icescales", "Ice Scales";
        IronFist => "ironfist", "Iron Fist";
        Levitate => "levitate", "Levitate";
        LightningRod => "lightningrod", "Lightning Rod";
        MegaLauncher => "megalauncher", "Mega Launcher";
        MindsEye => "mindseye", "Mind's Eye";
        MoldBreaker => "moldbreaker", "Mold Breaker";
        MotorDrive => "motordrive", "Motor Drive";
        Multiscale => "multiscale", "Multiscale";
        Neuroforce => "neuroforce", "Neuroforce";
        OrichalcumPulse => "orichalcumpulse", "Orichalcum Pulse";
        Pixilate => "pixilate", "Pixilate";
        PrismArmor => "prismarmor", "Prism Armor";
        Protosynthesis => "protosynthesis", "Protosynthesis";
        PunkRock => "punkrock", "Punk Rock";
        PurePower => "purepower", "Pure Power";
        PurifyingSalt => "purifyingsalt", "Purifying Salt";
        QuarkDrive => "quarkdrive", "Quark Drive";
        Reckless => "reckless", "Reckless";
        Refrigerate => "refrigerate", "Refrigerate";
        RockyPayload => "rockypayload", "Rocky Payload";
        SandForce => "sandforce", "Sand Force";
        SapSipper => "sapsipper", "Sap Sipper";
        Scrappy => "scrappy", "Scrappy";
        ShadowShield => "shadowshield", "Shadow Shield";
        Sharpness => "sharpness", "Sharpness";
        SheerForce => "sheerforce", "Sheer Force";
        Sniper => "sniper", "Sniper";
        SolidRock => "solidrock", "Solid Rock";
        Soundproof => "soundproof", "Soundproof";
        SteelySpirit => "steelyspirit", "Steely Spirit";
        StormDrain => "stormdrain", "Storm Drain";
        StrongJaw => "strongjaw", "Strong Jaw";
        SupremeOverlord => "supremeoverlord", "Supreme Overlord";
        SwordOfRuin => "swordofruin", "Sword of Ruin";
        TabletsOfRuin => "tabletsofruin", "Tablets of Ruin";
        Technician => "technician", "Technician";
        TeraShell => "terashell", "Tera Shell";
        Teravolt => "teravolt", "Teravolt";
        ThickFat => "thickfat", "Thick Fat";
        TintedLens => "tintedlens", "Tinted Lens";
        ToughClaws => "toughclaws", "Tough Claws";
        ToxicBoost => "toxicboost", "Toxic Boost";
        Transistor => "transistor", "Transistor";
        Turboblaze => "turboblaze", "Turboblaze";
        VesselOfRuin => "vesselofruin", "Vessel of Ruin";
        VoltAbsorb => "voltabsorb", "Volt Absorb";
        WaterAbsorb => "waterabsorb", "Water Absorb";
        WaterBubble => "waterbubble", "Water Bubble";
        WellBakedBody => "wellbakedbody", "Well-Baked Body";
        WindRider => "windrider", "Wind Rider";
    }
}

impl AbilityId {
    /// Abilities that let the holder's moves ignore breakable defender abilities.
    #[inline]
    pub fn breaks_molds(self) -> bool {
        matches!(
            self,
            AbilityId::MoldBreaker | AbilityId::Teravolt | AbilityId::Turboblaze
        )
    }
}

#[cfg(test)]
mod tests;
