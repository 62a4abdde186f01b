pub mod favorite;
pub mod recipe;

pub use favorite::Favorite;
pub use recipe::{Category, Recipe};
