pub mod wheel_game;
