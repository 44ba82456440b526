pub mod favorites;
pub mod movie;
pub mod taste;
