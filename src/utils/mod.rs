pub mod html;
pub mod status;
