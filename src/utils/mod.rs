pub mod console;
pub mod devcon;
pub mod deviceAPI;
pub mod devinfo;
pub mod error;
pub mod guid;
pub mod profile;
pub mod util;

#[cfg(windows)]
pub mod newdevAPI;
#[cfg(windows)]
pub mod setupAPI;
