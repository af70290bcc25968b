//! Free-form person and place names for simulated content.
//!
//! Names are assembled from independent first/last tables and city
//! prefix/suffix formats, so the space of outputs is the product of the
//! tables rather than a short fixed list.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Alicia", "Andrew", "Angela", "Benjamin", "Brenda", "Caleb", "Carmen", "Daniel",
    "Denise", "Edward", "Elena", "Frank", "Gabriela", "George", "Hannah", "Isaac", "Janet",
    "Jerome", "Julia", "Kevin", "Laura", "Lisa", "Marcus", "Maria", "Michelle", "Nathan",
    "Olivia", "Patrick", "Priya", "Raphael", "Rebecca", "Samuel", "Sandra", "Thomas", "Valerie",
    "Victor", "Wendy", "Xavier", "Yolanda", "Zachary",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Alvarez", "Barkin", "Bowman", "Brooks", "Carter", "Chen", "Cook", "Daly",
    "Dunn", "Evans", "Fischer", "Garcia", "Goolsbee", "Harker", "Hayes", "Jefferson", "Kashkari",
    "Kim", "Kugler", "Logan", "Lopez", "Mester", "Miran", "Murphy", "Nguyen", "Patel", "Powell",
    "Quarles", "Reed", "Schmid", "Sullivan", "Thompson", "Waller", "Walsh", "Williams", "Yellen",
    "Young",
];

const NAME_PREFIXES: &[&str] = &["Dr.", "Mr.", "Ms.", "Mrs."];
const NAME_SUFFIXES: &[&str] = &["Jr.", "II", "III", "PhD"];

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];
const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port",
    "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

/// Random human-readable full name, occasionally with an honorific or suffix.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    match rng.gen_range(0..10) {
        0 => format!("{} {first} {last}", pick(rng, NAME_PREFIXES)),
        1 => format!("{first} {last} {}", pick(rng, NAME_SUFFIXES)),
        _ => format!("{first} {last}"),
    }
}

/// Random city name such as "Port Juliaview" or "Walshborough".
pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..4) {
        0 => format!(
            "{} {}{}",
            pick(rng, CITY_PREFIXES),
            pick(rng, FIRST_NAMES),
            pick(rng, CITY_SUFFIXES)
        ),
        1 => format!("{} {}", pick(rng, CITY_PREFIXES), pick(rng, FIRST_NAMES)),
        2 => format!("{}{}", pick(rng, FIRST_NAMES), pick(rng, CITY_SUFFIXES)),
        _ => format!("{}{}", pick(rng, LAST_NAMES), pick(rng, CITY_SUFFIXES)),
    }
}
