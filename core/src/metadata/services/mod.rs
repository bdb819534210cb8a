pub mod song;
