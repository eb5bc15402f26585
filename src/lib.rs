// src/lib.rs

pub mod vec3;

pub use vec3::{cross, normalize, Vector3};
