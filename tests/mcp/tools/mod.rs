mod config;
mod lookup;
mod scan;
