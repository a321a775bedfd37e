pub mod fractal_session;
pub mod session_config;
