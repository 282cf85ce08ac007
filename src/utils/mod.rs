pub mod char_class;
pub mod range_utils;
pub mod regex_cache;
