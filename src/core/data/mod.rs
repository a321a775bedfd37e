pub mod colour;
pub mod complex;
pub mod escape_grid;
pub mod fractal_params;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod plane_grid;
pub mod point;
pub mod region;
