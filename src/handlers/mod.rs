pub mod trainers;
