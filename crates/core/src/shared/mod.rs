pub mod canvas_spec;
pub mod color;
pub mod constants;
pub mod frame;
pub mod mat_settings;
