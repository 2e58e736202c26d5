//! Held item identifiers, hooks and registry.

use crate::macros::identifiers;

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::ItemHooks;
pub use registry::{item_hooks, ITEM_REGISTRY};

identifiers! {
    /// Damage-relevant held items.
    pub enum ItemId (kind = "item", lookup = ITEM_LOOKUP) {
        AirBalloon => "airballoon", "Air Balloon";
        AssaultVest => "assaultvest", "Assault Vest";
        BoosterEnergy => "boosterenergy", "Booster Energy";
        ChoiceBand => "choiceband", "Choice Band";
        ChoiceSpecs => "choicespecs", "Choice Specs";
        ExpertBelt => "expertbelt", "Expert Belt";
        LifeOrb => "lifeorb", "Life Orb";
        MuscleBand => "muscleband", "Muscle Band";
        PunchingGlove => "punchingglove", "Punching Glove";
        WiseGlasses => "wiseglasses", "Wise Glasses";
        NormalGem => "normalgem", "Normal Gem";
        // Type-boosting items
        BlackBelt => "blackbelt", "Black Belt";
        BlackGlasses => "blackglasses", "Black Glasses";
        Charcoal => "charcoal", "Charcoal";
        DragonFang => "dragonfang", "Dragon Fang";
        FairyFeather => "fairyfeather", "Fairy Feather";
        HardStone => "hardstone", "Hard Stone";
        Magnet => "magnet", "Magnet";
        MetalCoat => "metalcoat", "Metal Coat";
        MiracleSeed => "miracleseed", "Miracle Seed";
        MysticWater => "mysticwater", "Mystic Water";
        NeverMeltIce => "nevermeltice", "Never-Melt Ice";
        PoisonBarb => "poisonbarb", "Poison Barb";
        SharpBeak => "sharpbeak", "Sharp Beak";
        SilkScarf => "silkscarf", "Silk Scarf";
        SilverPowder => "silverpowder", "Silver Powder";
        SoftSand => "softsand", "Soft Sand";
        SpellTag => "spelltag", "Spell Tag";
        TwistedSpoon => "twistedspoon", "Twisted Spoon";
        // Plates
        DracoPlate => "dracoplate", "Draco Plate";
        DreadPlate => "dreadplate", "Dread Plate";
        EarthPlate => "earthplate", "Earth Plate";
        FistPlate => "fistplate", "Fist Plate";
        FlamePlate => "flameplate", "Flame Plate";
        IciclePlate => "icicleplate", "Icicle Plate";
        InsectPlate => "insectplate", "Insect Plate";
        IronPlate => "ironplate", "Iron Plate";
        MeadowPlate => "meadowplate", "Meadow Plate";
        MindPlate => "mindplate", "Mind Plate";
        PixiePlate => "pixieplate", "Pixie Plate";
        SkyPlate => "skyplate", "Sky Plate";
        SplashPlate => "splashplate", "Splash Plate";
        SpookyPlate => "spookyplate", "Spooky Plate";
        StonePlate => "stoneplate", "Stone Plate";
        ToxicPlate => "toxicplate", "Toxic Plate";
        ZapPlate => "zapplate", "Zap Plate";
        // Ogerpon masks
        CornerstoneMask => "cornerstonemask", "Cornerstone Mask";
        HearthflameMask => "hearthflamemask", "Hearthflame Mask";
        WellspringMask => "wellspringmask", "Wellspring Mask";
        // Resistance berries
        BabiriBerry => "babiriberry", "Babiri Berry";
        ChartiBerry => "chartiberry", "Charti Berry";
        ChilanBerry => "chilanberry", "Chilan Berry";
        ChopleBerry => "chopleberry", "Chople Berry";
        CobaBerry => "cobaberry", "Coba Berry";
        ColburBerry => "colburberry", "Colbur Berry";
        HabanBerry => "habanberry", "Haban Berry";
        KasibBerry => "kasibberry", "Kasib Berry";
        KebiaBerry => "kebiaberry", "Kebia Berry";
        OccaBerry => "occaberry", "Occa Berry";
        PasshoBerry => "passhoberry", "Passho Berry";
        PayapaBerry => "payapaberry", "Payapa Berry";
        RindoBerry => "rindoberry", "Rindo Berry";
        RoseliBerry => "roseliberry", "Roseli Berry";
        ShucaBerry => "shucaberry", "Shuca Berry";
        TangaBerry => "tangaberry", "Tanga Berry";
        WacanBerry => "wacanberry", "Wacan Berry";
        YacheBerry => "yacheberry", "Yache Berry";
    }
}
