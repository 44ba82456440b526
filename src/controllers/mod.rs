pub mod favorites;
pub mod health;
pub mod movie;
pub mod taste;
