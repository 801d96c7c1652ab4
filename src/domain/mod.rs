pub mod entities;
pub mod ports;
pub mod services;
pub mod state;
pub mod value_objects;
