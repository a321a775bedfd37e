pub mod generate_fractal_serial;
pub mod generate_fractal_tiled;
pub mod ports;
