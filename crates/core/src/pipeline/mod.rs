pub mod mat_image_use_case;
pub mod output_naming;
