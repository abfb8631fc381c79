pub mod output;

pub use output::{
    display_banner, display_farewell, display_json, display_question, render, FAREWELL,
};
