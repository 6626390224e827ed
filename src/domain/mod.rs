pub mod navigation;
pub mod view;
