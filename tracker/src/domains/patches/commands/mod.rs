mod clear_patches;
mod handle_raw_state;
