pub mod controller;
pub mod ui;
