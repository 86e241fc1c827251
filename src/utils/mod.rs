pub mod geodesy;
pub mod vector2d;
