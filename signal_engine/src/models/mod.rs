pub mod bar;
pub mod frame;
pub mod plan;
pub mod series;
pub mod signal;
pub mod timeframe;
