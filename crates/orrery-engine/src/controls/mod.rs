pub mod fly;
pub mod orbit;
