//! Move name tables.
//!
//! Keys are lookup keys (lowercase ASCII alphanumerics, see
//! [`crate::macros::lookup_key`]).

use phf::{phf_map, phf_set};

use super::SpecialMove;

pub static PUNCH_MOVES: phf::Set<&'static str> = phf_set! {
    "icepunch", "firepunch", "thunderpunch", "machpunch", "megapunch",
    "focuspunch", "cometpunch", "dizzypunch", "dynamicpunch", "meteormash",
    "shadowpunch", "skyuppercut", "drainpunch", "bulletpunch", "hammerarm",
    "poweruppunch", "plasmafists", "doubleironbash", "surgingstrikes",
    "wickedblow", "jetpunch", "ragefist", "headlongrush", "icehammer",
};

pub static SLICING_MOVES: phf::Set<&'static str> = phf_set! {
    "aerialace", "aircutter", "airslash", "aquacutter", "behemothblade",
    "ceaselessedge", "crosspoison", "cut", "furycutter", "kowtowcleave",
    "leafblade", "nightslash", "populationbomb", "psychocut", "razorleaf",
    "razorshell", "sacredsword", "secretsword", "slash", "solarblade",
    "stoneaxe", "xscissor", "psyblade", "bitterblade", "tachyoncutter",
};

pub static BITING_MOVES: phf::Set<&'static str> = phf_set! {
    "bite", "crunch", "firefang", "icefang", "thunderfang", "poisonfang",
    "psychicfangs", "hyperfang", "superfang", "jawlock", "fishiousrend",
};

pub static SOUND_MOVES: phf::Set<&'static str> = phf_set! {
    "boomburst", "bugbuzz", "chatter", "clangingscales", "clangoroussoul",
    "clangoroussoulblaze", "confide", "disarmingvoice", "echoedvoice",
    "eeriespell", "grasswhistle", "growl", "healbell", "howl", "hypervoice",
    "metalsound", "nobleroar", "overdrive", "partingshot", "perishsong",
    "relicsong", "roar", "round", "screech", "sing", "snarl", "snore",
    "sparklingaria", "supersonic", "torchsong", "uproar", "alluringvoice",
    "psychicnoise",
};

pub static PULSE_MOVES: phf::Set<&'static str> = phf_set! {
    "aurasphere", "darkpulse", "dragonpulse", "healpulse",
    "originpulse", "terrainpulse", "waterpulse",
};

pub static RECOIL_MOVES: phf::Set<&'static str> = phf_set! {
    "bravebird", "doubleedge", "flareblitz", "headcharge", "headsmash",
    "highjumpkick", "submission", "takedown", "volttackle", "wildcharge",
    "woodhammer", "wavecrash", "axekick", "supercellslam",
};

pub static BULLET_MOVES: phf::Set<&'static str> = phf_set! {
    "acidspray", "aurasphere", "barrage", "beakblast", "bulletseed",
    "eggbomb", "electroball", "energyball", "focusblast", "gyroball",
    "iceball", "magnetbomb", "mistball", "mudbomb", "octazooka",
    "pollenpuff", "pyroball", "rockblast", "rockwrecker", "seedbomb",
    "shadowball", "sludgebomb", "weatherball", "zapcannon",
};

pub static WIND_MOVES: phf::Set<&'static str> = phf_set! {
    "bleakwindstorm", "fairywind", "gust", "hurricane", "petalblizzard",
    "sandstorm", "tailwind", "twister", "whirlwind", "wildboltstorm",
    "heatwave", "icywind", "sandsearstorm", "springtidestorm", "aircutter",
};

pub static SPREAD_MOVES: phf::Set<&'static str> = phf_set! {
    "earthquake", "rockslide", "heatwave", "dazzlinggleam", "discharge",
    "surf", "muddywater", "snarl", "icywind", "electroweb", "bulldoze",
    "breakingswipe", "lavaplume", "hypervoice", "blizzard", "boomburst",
    "makeitrain", "eruption", "waterspout", "bleakwindstorm",
    "wildboltstorm", "sandsearstorm", "springtidestorm", "glaciallance",
    "astralbarrage", "precipiceblades", "originpulse", "expandingforce",
};

/// Moves with a secondary effect that Sheer Force removes.
pub static SECONDARY_EFFECT_MOVES: phf::Set<&'static str> = phf_set! {
    "sacredfire", "scald", "lavaplume", "searingshot", "inferno", "blueflare",
    "steameruption", "flamethrower", "fireblast", "heatwave", "ember",
    "firepunch", "blazekick", "mysticalfire", "thunder", "thunderbolt",
    "discharge", "nuzzle", "bodyslam", "bounce", "forcepalm", "spark",
    "thunderpunch", "thunderfang", "lick", "zapcannon", "dragonbreath",
    "icebeam", "blizzard", "icepunch", "powdersnow", "icefang", "freezedry",
    "sludgebomb", "sludgewave", "sludge", "gunkshot", "poisonjab",
    "crosspoison", "poisonsting", "poisonfang", "rockslide", "ironhead",
    "zenheadbutt", "airslash", "fakeout", "waterfall", "bite", "darkpulse",
    "headbutt", "iciclecrash", "stomp", "astonish", "extrasensory",
    "dragonrush", "heartstamp", "twister", "snore", "zingzap", "hurricane",
    "psybeam", "confusion", "dynamicpunch", "relicsong", "snarl", "icywind",
    "electroweb", "breakingswipe", "moonblast", "shadowball", "psychic",
    "energyball", "earthpower", "flashcannon", "focusblast", "acidspray",
    "crunch", "rocksmash", "crushclaw", "razorshell", "firelash",
    "liquidation", "seedflare",
};

pub static ALWAYS_CRIT_MOVES: phf::Set<&'static str> = phf_set! {
    "wickedblow", "frostbreath", "stormthrow", "zippyzap", "flowertrick",
    "surgingstrikes",
};

/// (min hits, max hits)
pub static MULTI_HIT_MOVES: phf::Map<&'static str, (u8, u8)> = phf_map! {
    "surgingstrikes" => (3, 3),
    "dragondarts" => (2, 2),
    "tripleaxel" => (3, 3),
    "triplekick" => (3, 3),
    "dualwingbeat" => (2, 2),
    "doublehit" => (2, 2),
    "doublekick" => (2, 2),
    "doubleironbash" => (2, 2),
    "twineedle" => (2, 2),
    "geargrind" => (2, 2),
    "bonemerang" => (2, 2),
    "tachyoncutter" => (2, 2),
    "armthrust" => (2, 5),
    "bulletseed" => (2, 5),
    "rockblast" => (2, 5),
    "iciclespear" => (2, 5),
    "tailslap" => (2, 5),
    "scaleshot" => (2, 5),
    "pinmissile" => (2, 5),
    "furyattack" => (2, 5),
    "furyswipes" => (2, 5),
    "spikecannon" => (2, 5),
    "cometpunch" => (2, 5),
    "barrage" => (2, 5),
    "bonerush" => (2, 5),
    "watershuriken" => (2, 5),
    "populationbomb" => (1, 10),
};

pub static PRIORITY_MOVES: phf::Map<&'static str, i8> = phf_map! {
    "fakeout" => 3,
    "extremespeed" => 2,
    "feint" => 2,
    "firstimpression" => 2,
    "accelerock" => 2,
    "aquajet" => 1,
    "bulletpunch" => 1,
    "iceshard" => 1,
    "machpunch" => 1,
    "quickattack" => 1,
    "shadowsneak" => 1,
    "suckerpunch" => 1,
    "vacuumwave" => 1,
    "watershuriken" => 1,
    "grassyglide" => 1,
    "jetpunch" => 1,
    "thunderclap" => 1,
    "vitalthrow" => -1,
    "focuspunch" => -3,
    "dragontail" => -6,
    "circlethrow" => -6,
};

pub static SPECIAL_MOVES: phf::Map<&'static str, SpecialMove> = phf_map! {
    "terablast" => SpecialMove::TeraBlast,
    "weatherball" => SpecialMove::WeatherBall,
    "foulplay" => SpecialMove::FoulPlay,
    "bodypress" => SpecialMove::BodyPress,
    "psyshock" => SpecialMove::Psyshock,
    "psystrike" => SpecialMove::Psyshock,
    "secretsword" => SpecialMove::Psyshock,
    "psyblade" => SpecialMove::Psyblade,
    "collisioncourse" => SpecialMove::CollisionCourse,
    "electrodrift" => SpecialMove::CollisionCourse,
    "facade" => SpecialMove::Facade,
    "acrobatics" => SpecialMove::Acrobatics,
};
