pub mod bipolar;
pub mod competency;
pub mod depression;
pub mod satisfaction;
