//! Transliteration between the coordinated Brahmic scripts, and between
//! those scripts and ITRANS.

pub mod bridge;
pub mod engine;
pub mod itrans;
pub mod mapper;
pub mod script;

pub use bridge::{convert, from_itrans, to_itrans, RomanizationBridge};
pub use mapper::{transliterate, transliterate_with};
pub use script::ScriptTable;
