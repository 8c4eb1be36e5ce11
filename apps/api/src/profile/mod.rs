// Profile Text Normalizer: fetch (live or fixture), normalize, flatten to text.

pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod source;
pub mod text;
