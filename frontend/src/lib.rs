pub mod app;
pub mod config;
pub mod content;
pub mod disclosure;

pub mod components {
    pub mod cards;
    pub mod cta;
    pub mod faq;
    pub mod glyph;
}

pub mod pages {
    pub mod landing;
}
