pub mod batch;
pub mod icons;
