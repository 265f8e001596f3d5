pub mod color_utils;
pub mod json_utils;
pub mod math_utils;
