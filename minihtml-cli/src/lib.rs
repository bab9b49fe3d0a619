//! Command line front end for `minihtml`.

pub mod cli;
pub mod logging;
