pub mod categories;
pub mod discover;
pub mod explore;
pub mod extract;
pub mod impact;
pub mod seed;
pub mod setup;
pub mod ui;
