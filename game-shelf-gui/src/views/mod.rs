pub mod accessories;
pub mod consoles;
pub mod games;
pub mod home;
