pub mod annotate;
pub mod cli;
pub mod ctx;
pub mod group;
pub mod io;
pub mod pipeline;
pub mod schema;
