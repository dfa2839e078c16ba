// ═══════════════════════════════════════════════════════════════════════
// Static map data — the classic 42-territory world graph.
// Territory ids are 1-based and stable; id 0 and id 2 are unused slots
// so a TerritoryId can index the table directly. All properties here
// never change during a game.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{Region, TerritoryId};

/// Static description of a map territory (compile-time constant).
#[derive(Debug, Clone)]
pub struct TerritoryDef {
    pub id: TerritoryId,
    pub name: &'static str,
    pub region: Region,
    /// Cosmetic layout coordinate for renderers.
    pub position: (i16, i16),
    pub adjacent: &'static [TerritoryId],
}

// ── Territory ID constants ─────────────────────────────────────────────
// Grouped by region. Id 2 does not exist on the board.

// NORTH AMERICA
pub const NORTHWEST_TERRITORY: TerritoryId = TerritoryId(1);
pub const GREENLAND: TerritoryId           = TerritoryId(3);
pub const ALBERTA: TerritoryId             = TerritoryId(4);
pub const ONTARIO: TerritoryId             = TerritoryId(5);
pub const QUEBEC: TerritoryId              = TerritoryId(6);
pub const WESTERN_US: TerritoryId          = TerritoryId(7);
pub const EASTERN_US: TerritoryId          = TerritoryId(8);
pub const MEXICO: TerritoryId              = TerritoryId(9);
pub const ALASKA: TerritoryId              = TerritoryId(43);
// SOUTH AMERICA
pub const VENEZUELA: TerritoryId           = TerritoryId(10);
pub const BRAZIL: TerritoryId              = TerritoryId(11);
pub const PERU: TerritoryId                = TerritoryId(12);
pub const ARGENTINA: TerritoryId           = TerritoryId(13);
// EUROPE
pub const ICELAND: TerritoryId             = TerritoryId(14);
pub const SCANDINAVIA: TerritoryId         = TerritoryId(15);
pub const GREAT_BRITAIN: TerritoryId       = TerritoryId(16);
pub const NORTHERN_EUROPE: TerritoryId     = TerritoryId(17);
pub const WESTERN_EUROPE: TerritoryId      = TerritoryId(18);
pub const SOUTHERN_EUROPE: TerritoryId     = TerritoryId(19);
pub const UKRAINE: TerritoryId             = TerritoryId(20);
// AFRICA
pub const NORTH_AFRICA: TerritoryId        = TerritoryId(21);
pub const EGYPT: TerritoryId               = TerritoryId(22);
pub const EAST_AFRICA: TerritoryId         = TerritoryId(23);
pub const CONGO: TerritoryId               = TerritoryId(24);
pub const SOUTH_AFRICA: TerritoryId        = TerritoryId(25);
pub const MADAGASCAR: TerritoryId          = TerritoryId(26);
// ASIA
pub const URAL: TerritoryId                = TerritoryId(27);
pub const SIBERIA: TerritoryId             = TerritoryId(28);
pub const YAKUTSK: TerritoryId             = TerritoryId(29);
pub const KAMCHATKA: TerritoryId           = TerritoryId(30);
pub const KAZAKHSTAN: TerritoryId          = TerritoryId(31);
pub const IRKUTSK: TerritoryId             = TerritoryId(32);
pub const MONGOLIA: TerritoryId            = TerritoryId(33);
pub const JAPAN: TerritoryId               = TerritoryId(34);
pub const MIDDLE_EAST: TerritoryId         = TerritoryId(35);
pub const INDIA: TerritoryId               = TerritoryId(36);
pub const CHINA: TerritoryId               = TerritoryId(37);
pub const SIAM: TerritoryId                = TerritoryId(38);
// AUSTRALIA
pub const INDONESIA: TerritoryId           = TerritoryId(39);
pub const NEW_GUINEA: TerritoryId          = TerritoryId(40);
pub const WESTERN_AUSTRALIA: TerritoryId   = TerritoryId(41);
pub const EASTERN_AUSTRALIA: TerritoryId   = TerritoryId(42);

/// Number of playable territories.
pub const NUM_TERRITORIES: usize = 42;

/// Size of the dense id-indexed table (highest id + 1).
pub const TABLE_SIZE: usize = 44;

/// All valid territory ids in ascending order. Deterministic iteration
/// over the board goes through this slice.
pub const ALL_TERRITORIES: [TerritoryId; NUM_TERRITORIES] = [
    NORTHWEST_TERRITORY, GREENLAND, ALBERTA, ONTARIO, QUEBEC, WESTERN_US,
    EASTERN_US, MEXICO, VENEZUELA, BRAZIL, PERU, ARGENTINA, ICELAND,
    SCANDINAVIA, GREAT_BRITAIN, NORTHERN_EUROPE, WESTERN_EUROPE,
    SOUTHERN_EUROPE, UKRAINE, NORTH_AFRICA, EGYPT, EAST_AFRICA, CONGO,
    SOUTH_AFRICA, MADAGASCAR, URAL, SIBERIA, YAKUTSK, KAMCHATKA,
    KAZAKHSTAN, IRKUTSK, MONGOLIA, JAPAN, MIDDLE_EAST, INDIA, CHINA, SIAM,
    INDONESIA, NEW_GUINEA, WESTERN_AUSTRALIA, EASTERN_AUSTRALIA, ALASKA,
];

/// Lookup the static definition for a valid territory id.
///
/// Panics on the unused ids (0 and 2); those never come out of the map
/// or the engine.
pub fn territory_def(id: TerritoryId) -> &'static TerritoryDef {
    match &TERRITORIES[id.index()] {
        Some(def) => def,
        None => panic!("invalid territory id {}", id),
    }
}

/// Neighbors of a territory in static declaration order.
pub fn neighbors(id: TerritoryId) -> &'static [TerritoryId] {
    territory_def(id).adjacent
}

/// Region a territory belongs to.
pub fn region(id: TerritoryId) -> Region {
    territory_def(id).region
}

/// Lookup territory name by id.
pub fn territory_name(id: TerritoryId) -> &'static str {
    territory_def(id).name
}

/// All member territories of a region.
pub fn region_members(region: Region) -> &'static [TerritoryId] {
    match region {
        Region::NorthAmerica => &[
            NORTHWEST_TERRITORY, GREENLAND, ALBERTA, ONTARIO, QUEBEC,
            WESTERN_US, EASTERN_US, MEXICO, ALASKA,
        ],
        Region::SouthAmerica => &[VENEZUELA, BRAZIL, PERU, ARGENTINA],
        Region::Europe => &[
            ICELAND, SCANDINAVIA, GREAT_BRITAIN, NORTHERN_EUROPE,
            WESTERN_EUROPE, SOUTHERN_EUROPE, UKRAINE,
        ],
        Region::Africa => &[
            NORTH_AFRICA, EGYPT, EAST_AFRICA, CONGO, SOUTH_AFRICA,
            MADAGASCAR,
        ],
        Region::Asia => &[
            URAL, SIBERIA, YAKUTSK, KAMCHATKA, KAZAKHSTAN, IRKUTSK,
            MONGOLIA, JAPAN, MIDDLE_EAST, INDIA, CHINA, SIAM,
        ],
        Region::Australia => &[
            INDONESIA, NEW_GUINEA, WESTERN_AUSTRALIA, EASTERN_AUSTRALIA,
        ],
    }
}

// ── Static territory definitions ───────────────────────────────────────

macro_rules! territory {
    ($name:expr, $id:expr, $region:ident, pos: ($x:expr, $y:expr), adj: [$($a:expr),*]) => {
        Some(TerritoryDef {
            id: $id,
            name: $name,
            region: Region::$region,
            position: ($x, $y),
            adjacent: &[$(TerritoryId($a)),*],
        })
    };
}

/// Dense id-indexed territory table. Slots 0 and 2 are unused.
pub static TERRITORIES: [Option<TerritoryDef>; TABLE_SIZE] = [
    None, // 0 unused
    territory!("Northwest Territory", NORTHWEST_TERRITORY, NorthAmerica, pos: (129, 79), adj: [43, 3, 5, 4]),
    None, // 2 unused
    territory!("Greenland", GREENLAND, NorthAmerica, pos: (266, 48), adj: [14, 6, 5, 1]),
    territory!("Alberta", ALBERTA, NorthAmerica, pos: (110, 125), adj: [43, 1, 5, 7]),
    territory!("Ontario", ONTARIO, NorthAmerica, pos: (172, 130), adj: [1, 3, 6, 7, 8, 4]),
    territory!("Quebec", QUEBEC, NorthAmerica, pos: (230, 133), adj: [3, 5, 8]),
    territory!("Western US", WESTERN_US, NorthAmerica, pos: (112, 183), adj: [8, 5, 4, 9]),
    territory!("Eastern US", EASTERN_US, NorthAmerica, pos: (172, 200), adj: [5, 6, 7, 9]),
    territory!("Mexico", MEXICO, NorthAmerica, pos: (121, 257), adj: [7, 8, 10]),
    territory!("Venezuela", VENEZUELA, SouthAmerica, pos: (177, 301), adj: [9, 11, 12]),
    territory!("Brazil", BRAZIL, SouthAmerica, pos: (235, 359), adj: [10, 12, 13, 21]),
    territory!("Peru", PERU, SouthAmerica, pos: (174, 369), adj: [10, 11, 13]),
    territory!("Argentina", ARGENTINA, SouthAmerica, pos: (193, 441), adj: [11, 12]),
    territory!("Iceland", ICELAND, Europe, pos: (333, 100), adj: [3, 15, 16]),
    territory!("Scandinavia", SCANDINAVIA, Europe, pos: (400, 94), adj: [14, 16, 17, 20]),
    territory!("Great Britain", GREAT_BRITAIN, Europe, pos: (313, 165), adj: [14, 15, 17, 18]),
    territory!("Northern Europe", NORTHERN_EUROPE, Europe, pos: (388, 177), adj: [16, 15, 20, 19, 18]),
    territory!("Western Europe", WESTERN_EUROPE, Europe, pos: (337, 238), adj: [16, 17, 19, 21]),
    territory!("Southern Europe", SOUTHERN_EUROPE, Europe, pos: (400, 235), adj: [17, 18, 20, 21, 22, 35]),
    territory!("Ukraine", UKRAINE, Europe, pos: (463, 145), adj: [15, 17, 19, 27, 31, 35]),
    territory!("North Africa", NORTH_AFRICA, Africa, pos: (356, 340), adj: [18, 19, 22, 23, 24, 11]),
    territory!("Egypt", EGYPT, Africa, pos: (421, 311), adj: [19, 21, 35, 23]),
    territory!("East Africa", EAST_AFRICA, Africa, pos: (472, 378), adj: [21, 22, 35, 24, 25, 26]),
    territory!("Congo", CONGO, Africa, pos: (421, 406), adj: [21, 23, 25]),
    territory!("South Africa", SOUTH_AFRICA, Africa, pos: (424, 476), adj: [24, 23, 26]),
    territory!("Madagascar", MADAGASCAR, Africa, pos: (503, 479), adj: [23, 25]),
    territory!("Ural", URAL, Asia, pos: (550, 125), adj: [20, 31, 37, 28]),
    territory!("Siberia", SIBERIA, Asia, pos: (593, 80), adj: [27, 37, 33, 32, 29]),
    territory!("Yakutsk", YAKUTSK, Asia, pos: (650, 60), adj: [28, 32, 30]),
    territory!("Kamchatka", KAMCHATKA, Asia, pos: (727, 60), adj: [29, 32, 34, 43]),
    territory!("Kazakhstan", KAZAKHSTAN, Asia, pos: (527, 191), adj: [27, 37, 36, 35, 20]),
    territory!("Irkutsk", IRKUTSK, Asia, pos: (643, 130), adj: [29, 30, 34, 33, 28]),
    territory!("Mongolia", MONGOLIA, Asia, pos: (650, 182), adj: [28, 32, 34, 37]),
    territory!("Japan", JAPAN, Asia, pos: (740, 183), adj: [33, 32, 30]),
    territory!("Middle East", MIDDLE_EAST, Asia, pos: (483, 267), adj: [31, 36, 22, 23, 19, 20]),
    territory!("India", INDIA, Asia, pos: (570, 278), adj: [35, 38, 37, 31]),
    territory!("China", CHINA, Asia, pos: (630, 231), adj: [38, 36, 33, 31, 27, 28]),
    territory!("Siam", SIAM, Asia, pos: (643, 298), adj: [37, 36, 39]),
    territory!("Indonesia", INDONESIA, Australia, pos: (658, 391), adj: [40, 41, 38]),
    territory!("New Guinea", NEW_GUINEA, Australia, pos: (727, 370), adj: [39, 41, 42]),
    territory!("Western Australia", WESTERN_AUSTRALIA, Australia, pos: (684, 471), adj: [39, 42, 40]),
    territory!("Eastern Australia", EASTERN_AUSTRALIA, Australia, pos: (756, 459), adj: [41, 40]),
    territory!("Alaska", ALASKA, NorthAmerica, pos: (44, 77), adj: [30, 1, 4]),
];
