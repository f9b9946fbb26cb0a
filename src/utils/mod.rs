pub mod color;
pub mod profiler;
pub mod vector;
