// Console front end

pub mod console;

pub use console::run;
