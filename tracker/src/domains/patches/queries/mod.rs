mod get_patch;
mod ready_times;
