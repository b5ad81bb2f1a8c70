pub mod card;
pub mod card_form;
pub mod deck;
pub mod masonry_grid;
pub mod navbar;
pub mod search;
