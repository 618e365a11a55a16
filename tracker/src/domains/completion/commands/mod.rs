mod mark_completed;
