pub mod banner;
pub mod field;
pub mod modal;
pub mod product_card;
