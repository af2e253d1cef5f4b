mod link_commands;
mod list_commands;
