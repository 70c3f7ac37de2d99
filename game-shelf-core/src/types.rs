//! Record types for the collection entities and lookup tables.
//!
//! Entity structs carry both the stored columns (ids, flags, optional
//! fields) and the joined display data the table views need (lookup names,
//! many-to-many name lists). List queries leave the many-to-many lists
//! empty; the by-id queries populate everything.

/// A row from one of the name-only lookup tables (genres, developers,
/// composers, publishers, producers, manufacturers, console types,
/// accessory types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub id: i64,
    pub name: String,
}

/// A regional age-rating entry (e.g. CERO A, ESRB E, PEGI 7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSystem {
    pub id: i64,
    pub region: String,
    pub code: String,
    pub description: Option<String>,
}

impl RatingSystem {
    /// Display label used in dropdowns and detail views.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.region)
    }
}

/// A game in the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub console_id: Option<i64>,
    pub genre_id: Option<i64>,
    pub jp_release_date: Option<String>,
    pub us_release_date: Option<String>,
    pub eu_release_date: Option<String>,
    pub jp_rating_id: Option<i64>,
    pub us_rating_id: Option<i64>,
    pub eu_rating_id: Option<i64>,
    pub units_sold: Option<i64>,
    pub owned: bool,
    pub box_owned: bool,
    pub collector: bool,
    /// Collector grade, 1-5. `None` = ungraded.
    pub condition: Option<u32>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,

    // Joined display data
    pub console_name: Option<String>,
    pub genre_name: Option<String>,
    pub jp_rating: Option<String>,
    pub us_rating: Option<String>,
    pub eu_rating: Option<String>,
    pub developers: Vec<LookupEntry>,
    pub composers: Vec<LookupEntry>,
    pub publishers: Vec<LookupEntry>,
    pub producers: Vec<LookupEntry>,
}

/// A console in the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Console {
    pub id: i64,
    pub name: String,
    pub type_id: Option<i64>,
    pub manufacturer_id: Option<i64>,
    pub generation: Option<u32>,
    pub jp_release_date: Option<String>,
    pub us_release_date: Option<String>,
    pub eu_release_date: Option<String>,
    pub discontinued: Option<String>,
    pub price_jpy: Option<i64>,
    pub price_usd: Option<i64>,
    pub controllers: Option<u32>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub memory: Option<String>,
    pub audio: Option<String>,
    pub units_sold: Option<i64>,
    pub top_game: Option<String>,
    pub predecessor: Option<String>,
    pub successor: Option<String>,
    pub owned: bool,
    pub condition: Option<u32>,
    pub notes: Option<String>,

    // Joined display data
    pub type_name: Option<String>,
    pub manufacturer_name: Option<String>,
}

/// An accessory in the collection (controller, memory card, cable, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accessory {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub type_id: Option<i64>,
    pub manufacturer_id: Option<i64>,
    pub quantity: i64,
    pub owned: bool,
    pub condition: Option<u32>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,

    // Joined display data
    pub type_name: Option<String>,
    pub manufacturer_name: Option<String>,
    /// Compatible consoles via the join table.
    pub consoles: Vec<LookupEntry>,
}

/// Join the names of a many-to-many list for display ("Nintendo, HAL").
pub fn name_list(entries: &[LookupEntry]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
