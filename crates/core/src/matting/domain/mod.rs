pub mod background;
pub mod border_compositor;
pub mod frame_resizer;
pub mod mat_error;
pub mod placement;
