//! Classification of outlying observations

pub mod tukey;
