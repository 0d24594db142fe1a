pub mod app;
pub mod config;
pub mod error;
pub mod api {
    pub mod errors;
    pub mod news;
    pub mod search;
    pub mod status;
}
pub mod db {
    pub mod models;
    pub mod repository;
    pub mod snapshot;
}
pub mod search {
    pub mod category;
    pub mod index;
    pub mod normalizer;
    pub mod ranker;
    pub mod stemmer;
    pub mod stopwords;
    pub mod vectorizer;
}
