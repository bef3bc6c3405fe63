pub mod language;
pub mod pipeline;
pub mod speech;
pub mod translation;
pub mod wordcloud;
