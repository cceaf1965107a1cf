pub mod font;
pub mod rasterizer;
