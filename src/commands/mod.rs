pub mod base_commands;
pub mod command_error;
pub mod completions_cmd;
pub mod logging;
pub mod overbooking_cmd;
pub mod report_format;
pub mod roi_cmd;
