mod cells;
mod pointers;
