//! Game add/edit form state.

use game_shelf_core::types::{Game, LookupEntry, RatingSystem};
use game_shelf_db::{COMPOSERS, DEVELOPERS, GENRES, PRODUCERS, PUBLISHERS, Store, StoreError};

use super::{
    LookupForm, LookupSelect, PickList, buffer, optional_text, parse_optional_count,
    parse_optional_date, parse_optional_price, require,
};

#[derive(Debug, Clone)]
pub struct GameForm {
    pub id: i64,
    pub title: String,
    pub console: LookupSelect,
    pub genre: LookupSelect,
    pub jp_release_date: String,
    pub us_release_date: String,
    pub eu_release_date: String,
    pub jp_rating: LookupSelect,
    pub us_rating: LookupSelect,
    pub eu_rating: LookupSelect,
    pub units_sold: String,
    pub owned: bool,
    pub box_owned: bool,
    pub collector: bool,
    /// 0 = ungraded, 1-5 = star grade.
    pub condition: u32,
    pub purchase_date: String,
    pub purchase_price: String,
    pub notes: String,
    pub developers: PickList,
    pub composers: PickList,
    pub publishers: PickList,
    pub producers: PickList,
    /// Open "+ New" sub-dialog, if any.
    pub new_lookup: Option<LookupForm>,
}

impl Default for GameForm {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            console: LookupSelect::default(),
            genre: LookupSelect::default(),
            jp_release_date: String::new(),
            us_release_date: String::new(),
            eu_release_date: String::new(),
            jp_rating: LookupSelect::default(),
            us_rating: LookupSelect::default(),
            eu_rating: LookupSelect::default(),
            units_sold: String::new(),
            owned: true,
            box_owned: false,
            collector: false,
            condition: 0,
            purchase_date: String::new(),
            purchase_price: String::new(),
            notes: String::new(),
            developers: PickList::default(),
            composers: PickList::default(),
            publishers: PickList::default(),
            producers: PickList::default(),
            new_lookup: None,
        }
    }
}

impl GameForm {
    /// Empty form for adding a game, with dropdown options loaded.
    pub fn new(store: &Store) -> Result<Self, StoreError> {
        let mut form = Self::default();
        form.refresh_options(store)?;
        Ok(form)
    }

    /// Form pre-filled from an existing game.
    pub fn edit(store: &Store, game: &Game) -> Result<Self, StoreError> {
        let mut form = Self {
            id: game.id,
            title: game.title.clone(),
            jp_release_date: game.jp_release_date.clone().unwrap_or_default(),
            us_release_date: game.us_release_date.clone().unwrap_or_default(),
            eu_release_date: game.eu_release_date.clone().unwrap_or_default(),
            units_sold: buffer(&game.units_sold),
            owned: game.owned,
            box_owned: game.box_owned,
            collector: game.collector,
            condition: game.condition.unwrap_or(0),
            purchase_date: game.purchase_date.clone().unwrap_or_default(),
            purchase_price: buffer(&game.purchase_price),
            notes: game.notes.clone().unwrap_or_default(),
            ..Self::default()
        };
        form.console.selected = game.console_id;
        form.genre.selected = game.genre_id;
        form.jp_rating.selected = game.jp_rating_id;
        form.us_rating.selected = game.us_rating_id;
        form.eu_rating.selected = game.eu_rating_id;
        form.developers.staged = game.developers.clone();
        form.composers.staged = game.composers.clone();
        form.publishers.staged = game.publishers.clone();
        form.producers.staged = game.producers.clone();
        form.refresh_options(store)?;
        Ok(form)
    }

    /// (Re)load every dropdown and pick-list option set. Called on
    /// construction and after a "+ New" lookup insert.
    pub fn refresh_options(&mut self, store: &Store) -> Result<(), StoreError> {
        let consoles = store
            .consoles()?
            .into_iter()
            .map(|c| LookupEntry {
                id: c.id,
                name: c.name,
            })
            .collect();
        self.console.refresh(consoles);
        self.genre.refresh(store.lookup_entries(GENRES)?);

        let ratings = store.rating_systems()?;
        self.jp_rating.refresh(rating_options(&ratings, "JP"));
        self.us_rating.refresh(rating_options(&ratings, "US"));
        self.eu_rating.refresh(rating_options(&ratings, "EU"));

        self.developers.refresh(store.lookup_entries(DEVELOPERS)?);
        self.composers.refresh(store.lookup_entries(COMPOSERS)?);
        self.publishers.refresh(store.lookup_entries(PUBLISHERS)?);
        self.producers.refresh(store.lookup_entries(PRODUCERS)?);
        Ok(())
    }

    /// Validate and convert to a record ready for `Store::save_game`.
    pub fn to_game(&self) -> Result<Game, String> {
        let title = require("Title", &self.title)?;
        if self.console.selected.is_none() {
            return Err("Console is required".to_string());
        }

        let jp_release_date = parse_optional_date("JP release date", &self.jp_release_date)?;
        let us_release_date = parse_optional_date("US release date", &self.us_release_date)?;
        let eu_release_date = parse_optional_date("EU release date", &self.eu_release_date)?;
        let units_sold = parse_optional_count("Units sold", &self.units_sold)?;
        let purchase_date = parse_optional_date("Purchase date", &self.purchase_date)?;
        let purchase_price = parse_optional_price("Purchase price", &self.purchase_price)?;

        Ok(Game {
            id: self.id,
            title,
            console_id: self.console.selected,
            genre_id: self.genre.selected,
            jp_release_date,
            us_release_date,
            eu_release_date,
            jp_rating_id: self.jp_rating.selected,
            us_rating_id: self.us_rating.selected,
            eu_rating_id: self.eu_rating.selected,
            units_sold,
            owned: self.owned,
            box_owned: self.box_owned,
            collector: self.collector,
            condition: (self.condition > 0).then(|| self.condition.min(5)),
            purchase_date,
            purchase_price,
            notes: optional_text(&self.notes),
            developers: self.developers.staged.clone(),
            composers: self.composers.staged.clone(),
            publishers: self.publishers.staged.clone(),
            producers: self.producers.staged.clone(),
            ..Game::default()
        })
    }
}

fn rating_options(ratings: &[RatingSystem], region: &str) -> Vec<LookupEntry> {
    ratings
        .iter()
        .filter(|r| r.region == region)
        .map(|r| LookupEntry {
            id: r.id,
            name: r.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> GameForm {
        let mut form = GameForm::default();
        form.title = "Super Metroid".to_string();
        form.console.selected = Some(1);
        form
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut form = valid_form();
        form.title = "  ".to_string();
        assert_eq!(form.to_game().unwrap_err(), "Title is required");
    }

    #[test]
    fn missing_console_is_rejected() {
        let mut form = valid_form();
        form.console.selected = None;
        assert_eq!(form.to_game().unwrap_err(), "Console is required");
    }

    #[test]
    fn garbage_date_is_rejected() {
        let mut form = valid_form();
        form.us_release_date = "sometime in 1994".to_string();
        assert!(form.to_game().is_err());
    }

    #[test]
    fn garbage_number_is_rejected() {
        let mut form = valid_form();
        form.units_sold = "many".to_string();
        assert!(form.to_game().is_err());

        let mut form = valid_form();
        form.purchase_price = "a lot".to_string();
        assert!(form.to_game().is_err());
    }

    #[test]
    fn valid_form_converts() {
        let mut form = valid_form();
        form.us_release_date = "1994-04-18".to_string();
        form.units_sold = "1420000".to_string();
        form.purchase_price = "64.99".to_string();
        form.condition = 4;
        form.notes = "  boxed  ".to_string();

        let game = form.to_game().unwrap();
        assert_eq!(game.title, "Super Metroid");
        assert_eq!(game.console_id, Some(1));
        assert_eq!(game.us_release_date.as_deref(), Some("1994-04-18"));
        assert_eq!(game.units_sold, Some(1_420_000));
        assert_eq!(game.purchase_price, Some(64.99));
        assert_eq!(game.condition, Some(4));
        assert_eq!(game.notes.as_deref(), Some("boxed"));
    }

    #[test]
    fn unset_condition_becomes_none() {
        let form = valid_form();
        assert_eq!(form.to_game().unwrap().condition, None);
    }
}
