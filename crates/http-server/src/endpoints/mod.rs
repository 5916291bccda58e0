pub mod documents;
pub mod hover;
pub mod info;
pub mod insight;
pub mod resolve;
pub mod shared;
