pub mod draw_command;
pub mod file_io;
pub mod raster_surface;
pub mod stopwatch;
pub mod surface;
