//! Built-in content: Super Mario Galaxy.
//!
//! Nine domes (sections) holding 42 galaxies (areas) and 124 stars per
//! character mode. Of those, 120 count toward per-mode totals; the three
//! green stars are rare and the Star Festival is the finale.
//!
//! Comet stars are challenge items. Regular comets need 13 stars in the
//! active mode plus every main star of their galaxy. Purple comets need the
//! Bowser's Galaxy Reactor finale and the Gateway purple coins.

use crate::builder::{AreaBuilder, CollectionBuilder, SectionBuilder};
use crate::condition::UnlockCondition;
use crate::error::CatalogError;
use crate::hierarchy::Collection;
use crate::item::Item;

/// Collection identifier used for stored progress.
pub const COLLECTION_ID: &str = "super-mario-galaxy";

/// The three green stars that open the Planet of Trials.
pub const GREEN_STAR_IDS: [&str; 3] = [
    "battlerock-green-star",
    "dusty-dune-green-star",
    "buoy-base-green-star",
];

/// The finale star of the last story galaxy.
pub const REACTOR_FINALE_ID: &str = "bowser-galaxy-reactor-fate";

/// The Gateway purple-coin star.
pub const GATEWAY_PURPLE_COINS_ID: &str = "gateway-purple-coins";

/// Build the full Super Mario Galaxy collection.
///
/// # Errors
///
/// Returns [`CatalogError`] only if the built-in content is inconsistent.
pub fn super_mario_galaxy() -> Result<Collection, CatalogError> {
    CollectionBuilder::new(COLLECTION_ID, "Super Mario Galaxy")
        .section(
            SectionBuilder::new("tutorial", "Gateway")
                .area(gateway()),
        )
        .section(
            SectionBuilder::new("terrace", "Terrace")
                .area(good_egg())
                .area(honeyhive())
                .area(loopdeeloop())
                .area(flipswitch())
                .area(bowser_jr_robot_reactor())
                .area(sweet_sweet()),
        )
        .section(
            SectionBuilder::new("fountain", "Fountain")
                .condition(UnlockCondition::total_count(7))
                .area(space_junk())
                .area(battlerock())
                .area(rolling_green())
                .area(hurry_scurry())
                .area(bowser_star_reactor())
                .area(sling_pod()),
        )
        .section(
            SectionBuilder::new("kitchen", "Kitchen")
                .condition(UnlockCondition::total_count(18))
                .area(beach_bowl())
                .area(ghostly())
                .area(bubble_breeze())
                .area(buoy_base())
                .area(bowser_jr_airship_armada())
                .area(drip_drop()),
        )
        .section(
            SectionBuilder::new("bedroom", "Bedroom")
                .condition(UnlockCondition::total_count(33))
                .area(gusty_garden())
                .area(freezeflame())
                .area(dusty_dune())
                .area(honeyclimb())
                .area(bowser_dark_matter_plant())
                .area(bigmouth()),
        )
        .section(
            SectionBuilder::new("engine-room", "Engine Room")
                .condition(UnlockCondition::total_count(45))
                .area(gold_leaf())
                .area(sea_slide())
                .area(toy_time())
                .area(bonefin())
                .area(bowser_jr_lava_reactor())
                .area(sand_spiral()),
        )
        .section(
            SectionBuilder::new("garden", "Garden")
                .condition(UnlockCondition::total_count(50))
                .area(deep_dark())
                .area(dreadnought())
                .area(melty_molten())
                .area(matter_splatter())
                .area(snow_cap())
                .area(boos_boneyard())
                .area(bowser_galaxy_reactor()),
        )
        .section(
            SectionBuilder::new("planet-of-trials", "Planet of Trials")
                .condition(UnlockCondition::trial(GREEN_STAR_IDS))
                .area(rolling_gizmo())
                .area(bubble_blast())
                .area(loopdeeswoop()),
        )
        .section(
            SectionBuilder::new("grand-finale", "Grand Finale Galaxy")
                .condition(UnlockCondition::total_count(60))
                .area(grand_finale()),
        )
        .build()
}

/// Purple comets open once the story is beaten and the Gateway purple
/// coins are collected.
fn purple_comet() -> UnlockCondition {
    UnlockCondition::rare_challenge(REACTOR_FINALE_ID, GATEWAY_PURPLE_COINS_ID)
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

fn gateway() -> AreaBuilder {
    AreaBuilder::new("gateway", "Gateway Galaxy")
        .items([
            Item::ordinary("gateway-grand-star", "Grand Star Rescue"),
            Item::hidden_bonus("gateway-purple-coins", "Gateway's Purple Coins"),
        ])
}

// ---------------------------------------------------------------------------
// Terrace
// ---------------------------------------------------------------------------

fn good_egg() -> AreaBuilder {
    let main = ["good-egg-dino-piranha", "good-egg-snack", "good-egg-kaliente"];
    AreaBuilder::new("good-egg", "Good Egg Galaxy")
        .items([
            Item::ordinary("good-egg-dino-piranha", "Dino Piranha"),
            Item::ordinary("good-egg-snack", "A Snack of Cosmic Proportions"),
            Item::ordinary("good-egg-kaliente", "King Kaliente's Battle Fleet"),
            Item::hidden_bonus("good-egg-luigi", "Luigi on the Roof"),
            Item::challenge(
                "good-egg-dino-speed",
                "Dino Piranha Speed Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge("good-egg-purple-coins", "Purple Coin Omelet", purple_comet()),
        ])
}

fn honeyhive() -> AreaBuilder {
    let main = ["honeyhive-bee-mario", "honeyhive-bugaboom", "honeyhive-trouble-tower"];
    AreaBuilder::new("honeyhive", "Honeyhive Galaxy")
        .condition(UnlockCondition::total_count(3))
        .items([
            Item::ordinary("honeyhive-bee-mario", "Bee Mario Takes Flight"),
            Item::ordinary("honeyhive-bugaboom", "Big Bad Bugaboom"),
            Item::ordinary("honeyhive-trouble-tower", "Trouble on the Tower"),
            Item::challenge(
                "honeyhive-cosmic-race",
                "Honeyhive Cosmic Mario Race",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "honeyhive-purple-coins",
                "The Honeyhive's Purple Coins",
                purple_comet(),
            ),
            Item::hidden_bonus("honeyhive-luigi", "Luigi in the Honeyhive Kingdom"),
        ])
}

fn loopdeeloop() -> AreaBuilder {
    AreaBuilder::new("loopdeeloop", "Loopdeeloop Galaxy")
        .condition(UnlockCondition::total_count(5))
        .item(Item::ordinary("loopdeeloop-surfing", "Surfing 101"))
}

fn flipswitch() -> AreaBuilder {
    AreaBuilder::new("flipswitch", "Flipswitch Galaxy")
        .condition(UnlockCondition::total_count(7))
        .item(Item::ordinary("flipswitch-painting", "Painting the Planet Yellow"))
}

fn bowser_jr_robot_reactor() -> AreaBuilder {
    AreaBuilder::new("bowser-jr-robot", "Bowser Jr.'s Robot Reactor")
        .condition(UnlockCondition::total_count(8))
        .item(Item::ordinary("bowser-jr-robot-megaleg", "Megaleg's Moon"))
}

fn sweet_sweet() -> AreaBuilder {
    AreaBuilder::new("sweet-sweet", "Sweet Sweet Galaxy")
        .condition(UnlockCondition::total_count(7))
        .item(Item::ordinary("sweet-sweet-rocky-road", "Rocky Road"))
}

// ---------------------------------------------------------------------------
// Fountain
// ---------------------------------------------------------------------------

fn space_junk() -> AreaBuilder {
    let main = ["space-junk-pull-star", "space-junk-kamella", "space-junk-tarantox"];
    AreaBuilder::new("space-junk", "Space Junk Galaxy")
        .condition(UnlockCondition::total_count(12))
        .items([
            Item::ordinary("space-junk-pull-star", "Pull Star Path"),
            Item::ordinary("space-junk-kamella", "Kamella's Airship Attack"),
            Item::ordinary("space-junk-tarantox", "Tarantox's Tangled Web"),
            Item::challenge(
                "space-junk-pull-star-speed",
                "Pull Star Path Speed Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge("space-junk-purple-coins", "Purple Coin Spacewalk", purple_comet()),
            Item::hidden_bonus("space-junk-yoshi", "Yoshi's Unexpected Appearance"),
        ])
}

fn battlerock() -> AreaBuilder {
    let main = [
        "battlerock-barrage",
        "battlerock-breaking-in",
        "battlerock-topmaniac",
        "battlerock-garbage-dump",
    ];
    AreaBuilder::new("battlerock", "Battlerock Galaxy")
        .condition(UnlockCondition::total_count(12))
        .items([
            Item::ordinary("battlerock-barrage", "Battlerock Barrage"),
            Item::ordinary("battlerock-breaking-in", "Breaking into the Battlerock"),
            Item::ordinary("battlerock-topmaniac", "Topmaniac and the Topman Tribe"),
            Item::ordinary("battlerock-garbage-dump", "Battlerock's Garbage Dump"),
            Item::challenge(
                "battlerock-daredevil",
                "Topmaniac's Daredevil Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "battlerock-purple-coins",
                "Purple Coins on the Battlerock",
                purple_comet(),
            ),
            Item::hidden_bonus("battlerock-luigi", "Luigi Under the Saucer"),
            Item::rare("battlerock-green-star", "Green Power Star"),
        ])
}

fn rolling_green() -> AreaBuilder {
    AreaBuilder::new("rolling-green", "Rolling Green Galaxy")
        .condition(UnlockCondition::total_count(11))
        .item(Item::ordinary("rolling-green-clouds", "Rolling in the Clouds"))
}

fn hurry_scurry() -> AreaBuilder {
    AreaBuilder::new("hurry-scurry", "Hurry-Scurry Galaxy")
        .condition(UnlockCondition::total_count(18))
        .item(Item::ordinary("hurry-scurry-satellite", "Shrinking Satellite"))
}

fn bowser_star_reactor() -> AreaBuilder {
    AreaBuilder::new("bowser-star", "Bowser's Star Reactor")
        .condition(UnlockCondition::total_count(15))
        .item(Item::ordinary("bowser-star-stronghold", "The Fiery Stronghold"))
}

fn sling_pod() -> AreaBuilder {
    AreaBuilder::new("sling-pod", "Sling Pod Galaxy")
        .condition(UnlockCondition::total_count(12))
        .item(Item::ordinary("sling-pod-sticky-situation", "A Very Sticky Situation"))
}

// ---------------------------------------------------------------------------
// Kitchen
// ---------------------------------------------------------------------------

fn beach_bowl() -> AreaBuilder {
    let main = [
        "beach-bowl-sunken-treasure",
        "beach-bowl-swim-test",
        "beach-bowl-secret-cavern",
        "beach-bowl-wall-jumping",
    ];
    AreaBuilder::new("beach-bowl", "Beach Bowl Galaxy")
        .condition(UnlockCondition::total_count(18))
        .items([
            Item::ordinary("beach-bowl-sunken-treasure", "Sunken Treasure"),
            Item::ordinary("beach-bowl-swim-test", "Passing the Swim Test"),
            Item::ordinary("beach-bowl-secret-cavern", "The Secret Undersea Cavern"),
            Item::ordinary("beach-bowl-wall-jumping", "Wall Jumping up Waterfalls"),
            Item::challenge(
                "beach-bowl-cyclone-stone",
                "Fast Foes on the Cyclone Stone",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "beach-bowl-purple-coins",
                "Beachcombing for Purple Coins",
                purple_comet(),
            ),
        ])
}

fn ghostly() -> AreaBuilder {
    let main = [
        "ghostly-bouldergeist",
        "ghostly-spooky-sprint",
        "ghostly-matter-splatter",
    ];
    AreaBuilder::new("ghostly", "Ghostly Galaxy")
        .condition(UnlockCondition::total_count(20))
        .items([
            Item::ordinary("ghostly-bouldergeist", "Beware of Bouldergeist"),
            Item::ordinary("ghostly-spooky-sprint", "A Very Spooky Sprint"),
            Item::ordinary("ghostly-matter-splatter", "Matter Splatter Mansion"),
            Item::challenge(
                "ghostly-daredevil",
                "Bouldergeist's Daredevil Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "ghostly-purple-coins",
                "Purple Coins in the Bone Pen",
                purple_comet(),
            ),
            Item::hidden_bonus("ghostly-luigi", "Luigi and the Haunted Mansion"),
        ])
}

fn bubble_breeze() -> AreaBuilder {
    AreaBuilder::new("bubble-breeze", "Bubble Breeze Galaxy")
        .condition(UnlockCondition::total_count(19))
        .item(Item::ordinary("bubble-breeze-poison-swamp", "Through the Poison Swamp"))
}

fn buoy_base() -> AreaBuilder {
    AreaBuilder::new("buoy-base", "Buoy Base Galaxy")
        .condition(UnlockCondition::total_count(30))
        .items([
            Item::ordinary("buoy-base-floating-fortress", "The Floating Fortress"),
            Item::hidden_bonus("buoy-base-secret", "The Secret of Buoy Base"),
            Item::rare("buoy-base-green-star", "Green Power Star"),
        ])
}

fn bowser_jr_airship_armada() -> AreaBuilder {
    AreaBuilder::new("bowser-jr-airship", "Bowser Jr.'s Airship Armada")
        .condition(UnlockCondition::total_count(23))
        .item(Item::ordinary("bowser-jr-airship-sinking", "Sinking the Airships"))
}

fn drip_drop() -> AreaBuilder {
    AreaBuilder::new("drip-drop", "Drip Drop Galaxy")
        .condition(UnlockCondition::total_count(18))
        .item(Item::ordinary("drip-drop-giant-eel", "Giant Eel Outbreak"))
}

// ---------------------------------------------------------------------------
// Bedroom
// ---------------------------------------------------------------------------

fn gusty_garden() -> AreaBuilder {
    let main = [
        "gusty-garden-bunnies",
        "gusty-garden-major-burrow",
        "gusty-garden-gravity-scramble",
        "gusty-garden-golden-chomp",
    ];
    AreaBuilder::new("gusty-garden", "Gusty Garden Galaxy")
        .condition(UnlockCondition::total_count(33))
        .items([
            Item::ordinary("gusty-garden-bunnies", "Bunnies in the Wind"),
            Item::ordinary("gusty-garden-major-burrow", "The Dirty Tricks of Major Burrows"),
            Item::ordinary("gusty-garden-gravity-scramble", "Gusty Garden's Gravity Scramble"),
            Item::ordinary("gusty-garden-golden-chomp", "The Golden Chomp"),
            Item::challenge(
                "gusty-garden-daredevil",
                "Major Burrow's Daredevil Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "gusty-garden-purple-coins",
                "Purple Coins on the Puzzle Cube",
                purple_comet(),
            ),
        ])
}

fn freezeflame() -> AreaBuilder {
    let main = [
        "freezeflame-summit",
        "freezeflame-core",
        "freezeflame-hot-cold",
        "freezeflame-baron-bill",
    ];
    AreaBuilder::new("freezeflame", "Freezeflame Galaxy")
        .condition(UnlockCondition::total_count(37))
        .items([
            Item::ordinary("freezeflame-summit", "Conquering the Summit"),
            Item::ordinary("freezeflame-core", "Freezeflame's Blistering Core"),
            Item::ordinary("freezeflame-hot-cold", "Hot and Cold Collide"),
            Item::ordinary("freezeflame-baron-bill", "The Frozen Peak of Barron Bill"),
            Item::challenge(
                "freezeflame-cosmic-race",
                "Frosty Cosmic Mario Race",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "freezeflame-purple-coins",
                "Purple Coins on the Summit",
                purple_comet(),
            ),
        ])
}

fn dusty_dune() -> AreaBuilder {
    let main = [
        "dusty-dune-desert-winds",
        "dusty-dune-blasting-sand",
        "dusty-dune-sand-castle",
        "dusty-dune-bullet-bill",
    ];
    AreaBuilder::new("dusty-dune", "Dusty Dune Galaxy")
        .condition(UnlockCondition::total_count(35))
        .items([
            Item::ordinary("dusty-dune-desert-winds", "Soaring on the Desert Winds"),
            Item::ordinary("dusty-dune-blasting-sand", "Blasting through the Sand"),
            Item::ordinary("dusty-dune-sand-castle", "Sunbaked Sand Castle"),
            Item::ordinary("dusty-dune-bullet-bill", "Bullet Bill on Your Back"),
            Item::challenge(
                "dusty-dune-speed-run",
                "Sandblast Speed Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "dusty-dune-purple-coins",
                "Purple Coins in the Desert",
                purple_comet(),
            ),
            Item::hidden_bonus("dusty-dune-pyramid", "Treasure of the Pyramid"),
            Item::rare("dusty-dune-green-star", "Green Power Star"),
        ])
}

fn honeyclimb() -> AreaBuilder {
    AreaBuilder::new("honeyclimb", "Honeyclimb Galaxy")
        .condition(UnlockCondition::total_count(35))
        .item(Item::ordinary("honeyclimb-sticky-wall", "Scaling the Sticky Wall"))
}

fn bowser_dark_matter_plant() -> AreaBuilder {
    AreaBuilder::new("bowser-dark-matter", "Bowser's Dark Matter Plant")
        .condition(UnlockCondition::total_count(33))
        .item(Item::ordinary("bowser-dark-matter-darkness", "Darkness on the Horizon"))
}

fn bigmouth() -> AreaBuilder {
    AreaBuilder::new("bigmouth", "Bigmouth Galaxy")
        .condition(UnlockCondition::total_count(33))
        .item(Item::ordinary("bigmouth-gold-bait", "Bigmouth's Gold Bait"))
}

// ---------------------------------------------------------------------------
// Engine Room
// ---------------------------------------------------------------------------

fn gold_leaf() -> AreaBuilder {
    let main = [
        "gold-leaf-star-bunnies",
        "gold-leaf-cataquack",
        "gold-leaf-rains-pours",
        "gold-leaf-big-tree",
    ];
    AreaBuilder::new("gold-leaf", "Gold Leaf Galaxy")
        .condition(UnlockCondition::total_count(45))
        .items([
            Item::ordinary("gold-leaf-star-bunnies", "Star Bunnies on the Hunt"),
            Item::ordinary("gold-leaf-cataquack", "Cataquack to the Skies"),
            Item::ordinary("gold-leaf-rains-pours", "When it Rains, it Pours"),
            Item::ordinary("gold-leaf-big-tree", "The Bell on the Big Tree"),
            Item::challenge(
                "gold-leaf-cosmic-race",
                "Cosmic Mario Forest Race",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "gold-leaf-purple-coins",
                "Purple Coins in the Woods",
                purple_comet(),
            ),
        ])
}

fn sea_slide() -> AreaBuilder {
    let main = [
        "sea-slide-guppy",
        "sea-slide-speeding-penguin",
        "sea-slide-cosmic-race",
    ];
    AreaBuilder::new("sea-slide", "Sea Slide Galaxy")
        .condition(UnlockCondition::total_count(45))
        .items([
            Item::ordinary("sea-slide-guppy", "Going after Guppy"),
            Item::ordinary("sea-slide-speeding-penguin", "Faster Than a Speeding Penguin"),
            Item::ordinary("sea-slide-cosmic-race", "Underwater Cosmic Mario Race"),
            Item::challenge(
                "sea-slide-purple-coins",
                "Purple Coins by the Seaside",
                purple_comet(),
            ),
            Item::challenge(
                "sea-slide-hungry",
                "Hurry, He's Hungry",
                UnlockCondition::challenge(main),
            ),
            Item::hidden_bonus("sea-slide-silver-stars", "The Silver Stars of Sea Slide"),
        ])
}

fn toy_time() -> AreaBuilder {
    let main = [
        "toy-time-mecha-bowser",
        "toy-time-mecha-mario",
        "toy-time-cake-lane",
        "toy-time-fast-foes",
    ];
    AreaBuilder::new("toy-time", "Toy Time Galaxy")
        .condition(UnlockCondition::total_count(47))
        .items([
            Item::ordinary("toy-time-mecha-bowser", "Heavy Metal Mecha-Bowser"),
            Item::ordinary("toy-time-mecha-mario", "Mario Meets Mario"),
            Item::ordinary("toy-time-cake-lane", "Bouncing Down Cake Lane"),
            Item::ordinary("toy-time-fast-foes", "Fast Foes of Toy Time"),
            Item::challenge("toy-time-purple-coins", "Luigi's Purple Coins", purple_comet()),
            Item::challenge(
                "toy-time-flipswitch-chain",
                "The Flipswitch Chain",
                UnlockCondition::challenge(main),
            ),
        ])
}

fn bonefin() -> AreaBuilder {
    AreaBuilder::new("bonefin", "Bonefin Galaxy")
        .condition(UnlockCondition::total_count(55))
        .item(Item::ordinary("bonefin-kingfin", "Kingfin's Fearsome Waters"))
}

fn bowser_jr_lava_reactor() -> AreaBuilder {
    AreaBuilder::new("bowser-jr-lava", "Bowser Jr.'s Lava Reactor")
        .condition(UnlockCondition::total_count(52))
        .item(Item::ordinary("bowser-jr-lava-kaliente", "King Kaliente's Spicy Return"))
}

fn sand_spiral() -> AreaBuilder {
    AreaBuilder::new("sand-spiral", "Sand Spiral Galaxy")
        .condition(UnlockCondition::total_count(45))
        .item(Item::ordinary("sand-spiral-snack", "Choosing a Favorite Snack"))
}

// ---------------------------------------------------------------------------
// Garden
// ---------------------------------------------------------------------------

fn deep_dark() -> AreaBuilder {
    let main = [
        "deep-dark-boo-box",
        "deep-dark-ghost-ship",
        "deep-dark-guppy-lake",
        "deep-dark-bubble-blastoff",
    ];
    AreaBuilder::new("deep-dark", "Deep Dark Galaxy")
        .condition(UnlockCondition::total_count(60))
        .items([
            Item::ordinary("deep-dark-boo-box", "Boo in a Box"),
            Item::ordinary("deep-dark-ghost-ship", "The Underground Ghost Ship"),
            Item::ordinary("deep-dark-guppy-lake", "Guppy and the Underground Lake"),
            Item::ordinary("deep-dark-bubble-blastoff", "Bubble Blastoff"),
            Item::challenge(
                "deep-dark-daredevil",
                "Ghost Ship Daredevil Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "deep-dark-purple-coins",
                "Plunder the Purple Coins",
                purple_comet(),
            ),
        ])
}

fn dreadnought() -> AreaBuilder {
    let main = [
        "dreadnought-infiltrating",
        "dreadnought-cannons",
        "dreadnought-topman-revenge",
        "dreadnought-garbage-dump",
    ];
    AreaBuilder::new("dreadnought", "Dreadnought Galaxy")
        .condition(UnlockCondition::total_count(60))
        .items([
            Item::ordinary("dreadnought-infiltrating", "Infiltrating the Dreadnought"),
            Item::ordinary("dreadnought-cannons", "Dreadnought's Colossal Cannons"),
            Item::ordinary("dreadnought-topman-revenge", "Revenge of the Topman Tribe"),
            Item::ordinary("dreadnought-garbage-dump", "Dreadnought's Garbage Dump"),
            Item::challenge(
                "dreadnought-speed-run",
                "Topman Tribe Speed Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge(
                "dreadnought-purple-coins",
                "Battlestation's Purple Coins",
                purple_comet(),
            ),
        ])
}

fn melty_molten() -> AreaBuilder {
    let main = [
        "melty-molten-sinking-spire",
        "melty-molten-meteor-storm",
        "melty-molten-fiery-dino",
    ];
    AreaBuilder::new("melty-molten", "Melty Molten Galaxy")
        .condition(UnlockCondition::total_count(60))
        .items([
            Item::ordinary("melty-molten-sinking-spire", "The Sinking Lava Spire"),
            Item::ordinary("melty-molten-meteor-storm", "Through the Meteor Storm"),
            Item::ordinary("melty-molten-fiery-dino", "Fiery Dino Piranha"),
            Item::challenge(
                "melty-molten-daredevil",
                "Lava Spire Daredevil Run",
                UnlockCondition::challenge(main),
            ),
            Item::challenge("melty-molten-purple-coins", "Red-Hot Purple Coins", purple_comet()),
            Item::challenge(
                "melty-molten-burning-tide",
                "Burning Tide",
                UnlockCondition::challenge(main),
            ),
        ])
}

fn matter_splatter() -> AreaBuilder {
    AreaBuilder::new("matter-splatter", "Matter Splatter Galaxy")
        .condition(UnlockCondition::total_count(60))
        .item(Item::ordinary("matter-splatter-watch-step", "Watch Your Step"))
}

fn snow_cap() -> AreaBuilder {
    AreaBuilder::new("snow-cap", "Snow Cap Galaxy")
        .condition(UnlockCondition::total_count(60))
        .item(Item::ordinary("snow-cap-star-bunnies", "Star Bunnies in the Snow"))
}

fn boos_boneyard() -> AreaBuilder {
    AreaBuilder::new("boos-boneyard", "Boo's Boneyard Galaxy")
        .condition(UnlockCondition::total_count(50))
        .item(Item::ordinary("boos-boneyard-speedster", "Racing the Spooky Speedster"))
}

fn bowser_galaxy_reactor() -> AreaBuilder {
    AreaBuilder::new("bowser-galaxy-reactor", "Bowser's Galaxy Reactor")
        .condition(UnlockCondition::total_count(60))
        .item(Item::ordinary("bowser-galaxy-reactor-fate", "The Fate of the Universe"))
}

// ---------------------------------------------------------------------------
// Planet of Trials
// ---------------------------------------------------------------------------

fn rolling_gizmo() -> AreaBuilder {
    AreaBuilder::new("rolling-gizmo", "Rolling Gizmo Galaxy")
        .condition(UnlockCondition::total_count(58))
        .item(Item::ordinary("rolling-gizmo-gizmos", "Gizmos, Gears, and Gadgets"))
}

fn bubble_blast() -> AreaBuilder {
    AreaBuilder::new("bubble-blast", "Bubble Blast Galaxy")
        .condition(UnlockCondition::total_count(58))
        .item(Item::ordinary("bubble-blast-labyrinth", "The Electric Labyrinth"))
}

fn loopdeeswoop() -> AreaBuilder {
    AreaBuilder::new("loopdeeswoop", "Loopdeeswoop Galaxy")
        .condition(UnlockCondition::total_count(58))
        .item(Item::ordinary("loopdeeswoop-wave", "The Galaxy's Greatest Wave"))
}

// ---------------------------------------------------------------------------
// Grand Finale Galaxy
// ---------------------------------------------------------------------------

fn grand_finale() -> AreaBuilder {
    AreaBuilder::new("grand-finale", "Grand Finale Galaxy")
        .condition(UnlockCondition::grand_aggregate())
        .item(Item::finale("grand-finale-star-festival", "The Star Festival"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use completionist_progress::ProgressStore;
    use completionist_types::{CharacterMode, ItemId, ItemKind, ProgressKey};

    use super::*;
    use crate::completion::CompletionTrackable;

    fn count_kind(collection: &Collection, kind: ItemKind) -> usize {
        collection.items().filter(|item| item.kind() == kind).count()
    }

    #[test]
    fn content_shape() {
        let game = super_mario_galaxy().unwrap();
        assert_eq!(game.id().as_str(), COLLECTION_ID);
        assert_eq!(game.sections().len(), 9);
        assert_eq!(game.areas().count(), 42);
        assert_eq!(game.total_items(), 124);
        assert_eq!(count_kind(&game, ItemKind::Rare), 3);
        assert_eq!(count_kind(&game, ItemKind::Finale), 1);
        assert_eq!(count_kind(&game, ItemKind::HiddenBonus), 9);
        assert_eq!(count_kind(&game, ItemKind::Challenge), 31);
        let counted = game
            .items()
            .filter(|item| !game.reserved().is_reserved(item.id()))
            .count();
        assert_eq!(counted, 120);
        assert_eq!(game.reserved().rare_len(), 3);
    }

    #[test]
    fn parent_links_resolve() {
        let game = super_mario_galaxy().unwrap();
        let area = game.area_of_item(&ItemId::new("battlerock-green-star")).unwrap();
        assert_eq!(area.id().as_str(), "battlerock");
        let section = game.section_of_area(area.id()).unwrap();
        assert_eq!(section.id().as_str(), "fountain");
        assert_eq!(section.name(), "Fountain");
    }

    #[test]
    fn section_thresholds() {
        let game = super_mario_galaxy().unwrap();
        let kitchen = game.find_section(&"kitchen".into()).unwrap();
        assert_eq!(
            kitchen.unlock_condition(),
            Some(&UnlockCondition::total_count(18))
        );
        let trials = game.find_section(&"planet-of-trials".into()).unwrap();
        assert_eq!(
            trials.unlock_condition(),
            Some(&UnlockCondition::trial(GREEN_STAR_IDS))
        );
        assert!(game.find_section(&"tutorial".into()).unwrap().unlock_condition().is_none());
    }

    #[test]
    fn comet_needs_count_and_main_stars() {
        let game = super_mario_galaxy().unwrap();
        let comet = game.find_item(&ItemId::new("good-egg-dino-speed")).unwrap();
        let condition = comet.unlock_condition().unwrap();

        let mut store = ProgressStore::new();
        let mode = CharacterMode::Primary;
        for id in ["good-egg-dino-piranha", "good-egg-snack", "good-egg-kaliente"] {
            store.mark_collected(&ProgressKey::new(mode, ItemId::new(id)));
        }
        assert!(!condition.evaluate(&game.context(&store, Some(mode))));

        let fillers: Vec<ItemId> = game
            .items()
            .filter(|item| item.kind() == ItemKind::Ordinary)
            .map(|item| item.id().clone())
            .filter(|id| !id.as_str().starts_with("good-egg"))
            .take(10)
            .collect();
        for id in fillers {
            store.mark_collected(&ProgressKey::new(mode, id));
        }
        assert!(condition.evaluate(&game.context(&store, Some(mode))));
        assert!(!condition.evaluate(&game.context(&store, Some(CharacterMode::Alternate))));
    }

    #[test]
    fn purple_comets_share_one_gate() {
        let game = super_mario_galaxy().unwrap();
        let purple: Vec<_> = game
            .items()
            .filter(|item| item.unlock_condition() == Some(&purple_comet()))
            .collect();
        assert!(purple.len() > 1);
        assert!(purple.iter().all(|item| item.kind() == ItemKind::Challenge));
    }
}
