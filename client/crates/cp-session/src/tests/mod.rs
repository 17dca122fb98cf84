mod gate;
mod splash_timer;
