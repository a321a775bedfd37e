pub mod draw_axes;
pub mod generate_pixel_buffer;
pub mod ports;
